use std::fmt;

pub use crate::command::CommandError;
pub use crate::numeric::ArithmeticError;
pub use crate::stack::CapacityError;

#[derive(Debug)]
pub enum Error {
    Capacity(CapacityError),
    Arithmetic(ArithmeticError),
    Command(CommandError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Capacity(e) => write!(f, "{}", e),
            Self::Arithmetic(e) => write!(f, "{}", e),
            Self::Command(e) => write!(f, "{}", e),
        }
    }
}

impl From<CapacityError> for Error {
    fn from(e: CapacityError) -> Self {
        Self::Capacity(e)
    }
}

impl From<ArithmeticError> for Error {
    fn from(e: ArithmeticError) -> Self {
        Self::Arithmetic(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}
