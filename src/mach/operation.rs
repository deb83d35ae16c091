use super::Val;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Two operand operations
///
/// Integer arithmetic is checked; overflow is an error rather than a
/// silent conversion to floating point.

pub struct Operation {}

fn overflow() -> Error {
    error!(InvalidOperation; "Integer overflow")
}

fn is_zero(val: Val) -> bool {
    match val {
        Val::Integer(n) => n == 0,
        Val::Float(n) => n == 0.0,
    }
}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => l.checked_add(r).map(Integer).ok_or_else(overflow),
            (l, r) => Ok(Float(l.as_f64() + r.as_f64())),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => l.checked_sub(r).map(Integer).ok_or_else(overflow),
            (l, r) => Ok(Float(l.as_f64() - r.as_f64())),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => l.checked_mul(r).map(Integer).ok_or_else(overflow),
            (l, r) => Ok(Float(l.as_f64() * r.as_f64())),
        }
    }

    /// True division. `7 2 /` is `3.5`.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        if is_zero(rhs) {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Float(lhs.as_f64() / rhs.as_f64()))
    }

    /// Floored modulo: the result takes the sign of the divisor.
    pub fn modulo(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        if is_zero(rhs) {
            return Err(error!(DivisionByZero));
        }
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_rem(r) {
                Some(m) if m != 0 && (m < 0) != (r < 0) => Ok(Integer(m + r)),
                Some(m) => Ok(Integer(m)),
                None => Ok(Integer(0)),
            },
            (l, r) => {
                let (l, r) = (l.as_f64(), r.as_f64());
                let m = l % r;
                if m != 0.0 && (m < 0.0) != (r < 0.0) {
                    Ok(Float(m + r))
                } else {
                    Ok(Float(m))
                }
            }
        }
    }

    pub fn bit_and(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Integer(i64::try_from(lhs)? & i64::try_from(rhs)?))
    }

    pub fn bit_or(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Integer(i64::try_from(lhs)? | i64::try_from(rhs)?))
    }

    pub fn bit_xor(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Integer(i64::try_from(lhs)? ^ i64::try_from(rhs)?))
    }

    pub fn shift_left(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = (i64::try_from(lhs)?, i64::try_from(rhs)?);
        if r < 0 {
            return Err(error!(InvalidOperation; "Negative shift count"));
        }
        if l == 0 {
            return Ok(Val::Integer(0));
        }
        if r >= 64 {
            return Err(overflow());
        }
        let shifted = l << r;
        if shifted >> r != l {
            return Err(overflow());
        }
        Ok(Val::Integer(shifted))
    }

    pub fn shift_right(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = (i64::try_from(lhs)?, i64::try_from(rhs)?);
        if r < 0 {
            return Err(error!(InvalidOperation; "Negative shift count"));
        }
        Ok(Val::Integer(l >> r.min(63)))
    }

    pub fn and(lhs: Val, rhs: Val) -> Result<Val> {
        Ok((lhs.is_true() && rhs.is_true()).into())
    }

    pub fn or(lhs: Val, rhs: Val) -> Result<Val> {
        Ok((lhs.is_true() || rhs.is_true()).into())
    }

    pub fn xor(lhs: Val, rhs: Val) -> Result<Val> {
        Ok((lhs.is_true() ^ rhs.is_true()).into())
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Operation::equal_bool(lhs, rhs).into())
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok((!Operation::equal_bool(lhs, rhs)).into())
    }

    fn equal_bool(lhs: Val, rhs: Val) -> bool {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => l == r,
            (l, r) => l.as_f64() == r.as_f64(),
        }
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Operation::less_bool(lhs, rhs).into())
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok((!Operation::less_bool(rhs, lhs)).into())
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Operation::less_bool(rhs, lhs).into())
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok((!Operation::less_bool(lhs, rhs)).into())
    }

    fn less_bool(lhs: Val, rhs: Val) -> bool {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => l < r,
            (l, r) => l.as_f64() < r.as_f64(),
        }
    }

    pub fn max(lhs: Val, rhs: Val) -> Result<Val> {
        if Operation::less_bool(lhs, rhs) {
            Ok(rhs)
        } else {
            Ok(lhs)
        }
    }

    pub fn min(lhs: Val, rhs: Val) -> Result<Val> {
        if Operation::less_bool(rhs, lhs) {
            Ok(rhs)
        } else {
            Ok(lhs)
        }
    }

    /// `x base log`
    pub fn log(lhs: Val, rhs: Val) -> Result<Val> {
        let (x, base) = (lhs.as_f64(), rhs.as_f64());
        if x <= 0.0 || base <= 0.0 {
            return Err(error!(InvalidOperation; "Logarithm is only defined for positive numbers"));
        }
        if base == 1.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Float(x.ln() / base.ln()))
    }

    pub fn pow(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        if is_zero(lhs) && rhs.as_f64() < 0.0 {
            return Err(error!(DivisionByZero));
        }
        match (lhs, rhs) {
            (Integer(l), Integer(r)) if r >= 0 => match u32::try_from(r) {
                Ok(r) => l.checked_pow(r).map(Integer).ok_or_else(overflow),
                Err(_) => match l {
                    0 | 1 => Ok(Integer(l)),
                    -1 => Ok(Integer(if r % 2 == 0 { 1 } else { -1 })),
                    _ => Err(overflow()),
                },
            },
            (l, r) => Ok(Float(l.as_f64().powf(r.as_f64()))),
        }
    }
}
