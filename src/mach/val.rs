use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Operand
///
/// Computed results with no fractional part are stored as integers.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Integer(i64),
    Float(f64),
}

impl Val {
    /// Normalize a computed float. Non-finite results are an error.
    pub fn normalize(n: f64) -> Result<Val> {
        if !n.is_finite() {
            return Err(error!(InvalidOperation));
        }
        // i64::MAX as f64 rounds up to 2^63, which does not fit.
        if n.floor() == n && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            Ok(Val::Integer(n as i64))
        } else {
            Ok(Val::Float(n))
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Val::Integer(n) => n as f64,
            Val::Float(n) => n,
        }
    }

    pub fn is_true(self) -> bool {
        match self {
            Val::Integer(n) => n != 0,
            Val::Float(n) => n != 0.0,
        }
    }
}

impl From<i64> for Val {
    fn from(n: i64) -> Val {
        Val::Integer(n)
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        Val::Integer(b as i64)
    }
}

impl TryFrom<Val> for i64 {
    type Error = Error;
    fn try_from(val: Val) -> Result<i64> {
        match val {
            Val::Integer(n) => Ok(n),
            Val::Float(_) => Err(error!(InvalidOperation; "This operation requires an integer")),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Float(n) => {
                let magnitude = n.abs();
                if magnitude >= 1e16 || (magnitude < 1e-4 && magnitude > 0.0) {
                    write!(f, "{:e}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}
