use std::fmt;

pub type IntType = i64;
pub type FloatType = f64;

/// x^n by repeated squaring, O(log |n|) multiplications. A negative
/// exponent inverts the base first, so `fast_powf(2.0, -2)` is `0.25`.
pub fn fast_powf(x: FloatType, n: IntType) -> FloatType {
    let mut base = if n < 0 { 1.0 / x } else { x };
    let mut exp = n.unsigned_abs();
    let mut result = 1.0;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        base *= base;
        exp >>= 1;
    }
    result
}

/// Integer power with overflow checking on every multiplication.
pub fn fast_powi(base: IntType, exp: u32) -> Result<IntType, ArithmeticError> {
    let mut base = base;
    let mut exp = exp;
    let mut result: IntType = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result
                .checked_mul(base)
                .ok_or_else(|| ArithmeticError::new("int overflow".to_string()))?;
        }
        exp >>= 1;
        // Skip the final squaring; it can overflow after result is done.
        if exp > 0 {
            base = base
                .checked_mul(base)
                .ok_or_else(|| ArithmeticError::new("int overflow".to_string()))?;
        }
    }
    Ok(result)
}

#[derive(Debug, PartialEq)]
pub struct ArithmeticError {
    reason: String,
}

impl ArithmeticError {
    pub fn new(reason: String) -> Self {
        Self { reason }
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ArithmeticError: {}", self.reason)
    }
}
