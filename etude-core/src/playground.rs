use std::fmt;

use crate::command::{parse, Command};
use crate::error::Result;
use crate::numeric::IntType;
use crate::stack::{CapacityError, Stack};

pub const DEFAULT_CAPACITY: usize = 5;

pub const HELP: &str = "\
commands:
  new <capacity>   start over with a fresh stack
  push <int>...    push values, overflow is reported when full
  pop              remove the top value, underflow is reported when empty
  top              peek at the top value
  show             list the stack bottom to top
  info             occupancy and capacity
  help             this text
  quit             leave the playground";

/// An interactive bounded stack. Lines of input become commands, and
/// each command yields outcomes ready to print.
pub struct Playground {
    stack: Stack<IntType>,
}

impl Playground {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY).unwrap()
    }

    pub fn with_capacity(capacity: usize) -> std::result::Result<Self, CapacityError> {
        Ok(Self {
            stack: Stack::new(capacity)?,
        })
    }

    pub fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Parse and apply one line of input. Command errors and rejected
    /// capacities come back as `Err`; over- and underflow are ordinary
    /// outcomes, not errors.
    pub fn eval_line(&mut self, line: &str) -> Result<Vec<Outcome>> {
        let command = parse(line)?;
        self.eval(command)
    }

    pub fn eval(&mut self, command: Command) -> Result<Vec<Outcome>> {
        let outcomes = match command {
            Command::New(capacity) => {
                self.stack = Stack::new(capacity)?;
                vec![Outcome::Created(capacity)]
            }
            Command::Push(values) => values
                .into_iter()
                .map(|v| match self.stack.push(v) {
                    Ok(()) => Outcome::Pushed(v),
                    Err(e) => Outcome::Rejected(e.into_value()),
                })
                .collect(),
            Command::Pop => vec![match self.stack.pop() {
                Some(v) => Outcome::Popped(v),
                None => Outcome::Underflow,
            }],
            Command::Top => vec![match self.stack.top() {
                Some(&v) => Outcome::Top(v),
                None => Outcome::NoTop,
            }],
            Command::Show => vec![Outcome::Contents(self.stack.as_slice().to_vec())],
            Command::Info => vec![Outcome::Info {
                len: self.stack.len(),
                capacity: self.stack.capacity(),
            }],
            Command::Help => vec![Outcome::Help],
            Command::Quit => vec![Outcome::Farewell],
        };
        Ok(outcomes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pushed(IntType),
    Rejected(IntType),
    Popped(IntType),
    Underflow,
    Top(IntType),
    NoTop,
    Created(usize),
    Contents(Vec<IntType>),
    Info { len: usize, capacity: usize },
    Help,
    Farewell,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pushed(v) => write!(f, "{} pushed to stack.", v),
            Self::Rejected(v) => write!(f, "Stack Overflow! Cannot push {}", v),
            Self::Popped(v) => write!(f, "{} popped from stack.", v),
            Self::Underflow => write!(f, "Stack Underflow! Cannot pop."),
            Self::Top(v) => write!(f, "Top element: {}", v),
            Self::NoTop => write!(f, "Stack is empty!"),
            Self::Created(capacity) => write!(f, "New stack with capacity {}.", capacity),
            Self::Contents(values) => {
                if values.is_empty() {
                    write!(f, "Stack: empty")
                } else {
                    write!(f, "Stack:")?;
                    for v in values {
                        write!(f, " {}", v)?;
                    }
                    Ok(())
                }
            }
            Self::Info { len, capacity } => {
                write!(f, "{} of {} slots used", len, capacity)?;
                if *len == 0 {
                    write!(f, " (empty)")
                } else if len == capacity {
                    write!(f, " (full)")
                } else {
                    Ok(())
                }
            }
            Self::Help => f.write_str(HELP),
            Self::Farewell => write!(f, "bye!"),
        }
    }
}
