use super::Val;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

pub struct Function {}

impl Function {
    pub fn increment(val: Val) -> Result<Val> {
        match val {
            Val::Integer(n) => n
                .checked_add(1)
                .map(Val::Integer)
                .ok_or_else(|| error!(InvalidOperation)),
            Val::Float(n) => Ok(Val::Float(n + 1.0)),
        }
    }

    pub fn decrement(val: Val) -> Result<Val> {
        match val {
            Val::Integer(n) => n
                .checked_sub(1)
                .map(Val::Integer)
                .ok_or_else(|| error!(InvalidOperation)),
            Val::Float(n) => Ok(Val::Float(n - 1.0)),
        }
    }

    pub fn not(val: Val) -> Result<Val> {
        Ok((!val.is_true()).into())
    }

    pub fn bit_not(val: Val) -> Result<Val> {
        Ok(Val::Integer(!i64::try_from(val)?))
    }

    pub fn acos(val: Val) -> Result<Val> {
        Ok(Val::Float(val.as_f64().acos()))
    }
    pub fn asin(val: Val) -> Result<Val> {
        Ok(Val::Float(val.as_f64().asin()))
    }
    pub fn atan(val: Val) -> Result<Val> {
        Ok(Val::Float(val.as_f64().atan()))
    }
    pub fn cos(val: Val) -> Result<Val> {
        Ok(Val::Float(val.as_f64().cos()))
    }
    pub fn cosh(val: Val) -> Result<Val> {
        Ok(Val::Float(val.as_f64().cosh()))
    }
    pub fn sin(val: Val) -> Result<Val> {
        Ok(Val::Float(val.as_f64().sin()))
    }
    pub fn sinh(val: Val) -> Result<Val> {
        Ok(Val::Float(val.as_f64().sinh()))
    }
    pub fn tanh(val: Val) -> Result<Val> {
        Ok(Val::Float(val.as_f64().tanh()))
    }

    pub fn ceil(val: Val) -> Result<Val> {
        match val {
            Val::Integer(_) => Ok(val),
            Val::Float(n) => Ok(Val::Float(n.ceil())),
        }
    }

    pub fn floor(val: Val) -> Result<Val> {
        match val {
            Val::Integer(_) => Ok(val),
            Val::Float(n) => Ok(Val::Float(n.floor())),
        }
    }

    /// Rounds half way cases to the even neighbour: `2.5 round` is `2`.
    pub fn round(val: Val) -> Result<Val> {
        match val {
            Val::Integer(_) => Ok(val),
            Val::Float(n) => Ok(Val::Float(n.round_ties_even())),
        }
    }

    /// Integer part.
    pub fn ip(val: Val) -> Result<Val> {
        match val {
            Val::Integer(_) => Ok(val),
            Val::Float(n) => Ok(Val::Float(n.trunc())),
        }
    }

    /// Fractional part.
    pub fn fp(val: Val) -> Result<Val> {
        match val {
            Val::Integer(_) => Ok(Val::Integer(0)),
            Val::Float(n) => Ok(Val::Float(n.fract())),
        }
    }

    pub fn sign(val: Val) -> Result<Val> {
        match val {
            Val::Integer(n) => Ok(Val::Integer(n.signum())),
            Val::Float(n) if n == 0.0 => Ok(Val::Integer(0)),
            Val::Float(n) => Ok(Val::Integer(if n < 0.0 { -1 } else { 1 })),
        }
    }

    pub fn abs(val: Val) -> Result<Val> {
        match val {
            Val::Integer(n) => n
                .checked_abs()
                .map(Val::Integer)
                .ok_or_else(|| error!(InvalidOperation)),
            Val::Float(n) => Ok(Val::Float(n.abs())),
        }
    }

    pub fn exp(val: Val) -> Result<Val> {
        Ok(Val::Float(val.as_f64().exp()))
    }

    pub fn fact(val: Val) -> Result<Val> {
        let n = i64::try_from(val)?;
        if n < 0 {
            return Err(error!(InvalidOperation; "Factorial is not defined for negative values"));
        }
        let mut acc: i64 = 1;
        for i in 2..=n {
            acc = acc
                .checked_mul(i)
                .ok_or_else(|| error!(InvalidOperation; "Integer overflow"))?;
        }
        Ok(Val::Integer(acc))
    }

    pub fn sqrt(val: Val) -> Result<Val> {
        let n = val.as_f64();
        if n < 0.0 {
            return Err(error!(InvalidOperation; "Square root of a negative number"));
        }
        Ok(Val::Float(n.sqrt()))
    }

    pub fn ln(val: Val) -> Result<Val> {
        let n = val.as_f64();
        if n <= 0.0 {
            return Err(error!(InvalidOperation; "Logarithm is only defined for positive numbers"));
        }
        Ok(Val::Float(n.ln()))
    }

    pub fn e() -> Val {
        Val::Float(std::f64::consts::E)
    }

    pub fn pi() -> Val {
        Val::Float(std::f64::consts::PI)
    }

    /// Uniform in `[0, 1)`.
    pub fn rand() -> Val {
        Val::Float(rand::random::<f64>())
    }

    /// Host to network long.
    pub fn hnl(val: Val) -> Result<Val> {
        Ok(Val::Integer(Function::u32_of(val)?.to_be() as i64))
    }

    /// Host to network short.
    pub fn hns(val: Val) -> Result<Val> {
        Ok(Val::Integer(Function::u16_of(val)?.to_be() as i64))
    }

    /// Network to host long.
    pub fn nhl(val: Val) -> Result<Val> {
        Ok(Val::Integer(u32::from_be(Function::u32_of(val)?) as i64))
    }

    /// Network to host short.
    pub fn nhs(val: Val) -> Result<Val> {
        Ok(Val::Integer(u16::from_be(Function::u16_of(val)?) as i64))
    }

    fn u32_of(val: Val) -> Result<u32> {
        u32::try_from(i64::try_from(val)?)
            .map_err(|_| error!(InvalidOperation; "Value should fit in 32 unsigned bits"))
    }

    fn u16_of(val: Val) -> Result<u16> {
        u16::try_from(i64::try_from(val)?)
            .map_err(|_| error!(InvalidOperation; "Value should fit in 16 unsigned bits"))
    }
}
