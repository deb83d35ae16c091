use super::{Function, Operation, Radix, Session, Val};
use crate::error;
use crate::lang::{Error, Word};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Built-in command table
///
/// Each command takes zero, one or two operands from the stack and may
/// return a value to push. The runtime pops the operands, so a function
/// only sees the session for side effects.
///
/// For example: `7 2 -` pops `2` then `7` and calls `Binary(sub)(7, 2)`.

#[derive(Clone, Copy)]
pub enum Opcode {
    Nullary(fn(&mut Session) -> Result<Option<Val>>),
    Unary(fn(&mut Session, Val) -> Result<Option<Val>>),
    Binary(fn(&mut Session, Val, Val) -> Result<Option<Val>>),
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Opcode::Nullary(_) => write!(f, "NULLARY"),
            Opcode::Unary(_) => write!(f, "UNARY"),
            Opcode::Binary(_) => write!(f, "BINARY"),
        }
    }
}

/// Stack counts are non-negative integers.
fn count(val: Val) -> Result<usize> {
    let n = i64::try_from(val)?;
    usize::try_from(n).map_err(|_| error!(InvalidCount; "Count should not be negative"))
}

impl Opcode {
    pub fn arity(&self) -> usize {
        match self {
            Opcode::Nullary(_) => 0,
            Opcode::Unary(_) => 1,
            Opcode::Binary(_) => 2,
        }
    }

    /// `help` and `exit` talk to the front end and have no entry here.
    pub fn for_word(word: Word) -> Option<Opcode> {
        use Opcode::*;
        Some(match word {
            Word::Add => Binary(|_, l, r| Operation::sum(l, r).map(Some)),
            Word::Sub => Binary(|_, l, r| Operation::subtract(l, r).map(Some)),
            Word::Mul => Binary(|_, l, r| Operation::multiply(l, r).map(Some)),
            Word::Div => Binary(|_, l, r| Operation::divide(l, r).map(Some)),
            Word::Mod => Binary(|_, l, r| Operation::modulo(l, r).map(Some)),
            Word::Incr => Unary(|_, v| Function::increment(v).map(Some)),
            Word::Decr => Unary(|_, v| Function::decrement(v).map(Some)),

            Word::BitAnd => Binary(|_, l, r| Operation::bit_and(l, r).map(Some)),
            Word::BitOr => Binary(|_, l, r| Operation::bit_or(l, r).map(Some)),
            Word::BitXor => Binary(|_, l, r| Operation::bit_xor(l, r).map(Some)),
            Word::BitNot => Unary(|_, v| Function::bit_not(v).map(Some)),
            Word::Shl => Binary(|_, l, r| Operation::shift_left(l, r).map(Some)),
            Word::Shr => Binary(|_, l, r| Operation::shift_right(l, r).map(Some)),

            Word::And => Binary(|_, l, r| Operation::and(l, r).map(Some)),
            Word::Or => Binary(|_, l, r| Operation::or(l, r).map(Some)),
            Word::Xor => Binary(|_, l, r| Operation::xor(l, r).map(Some)),
            Word::Not => Unary(|_, v| Function::not(v).map(Some)),

            Word::Lt => Binary(|_, l, r| Operation::less(l, r).map(Some)),
            Word::LtEq => Binary(|_, l, r| Operation::less_equal(l, r).map(Some)),
            Word::Eq => Binary(|_, l, r| Operation::equal(l, r).map(Some)),
            Word::NotEq => Binary(|_, l, r| Operation::not_equal(l, r).map(Some)),
            Word::Gt => Binary(|_, l, r| Operation::greater(l, r).map(Some)),
            Word::GtEq => Binary(|_, l, r| Operation::greater_equal(l, r).map(Some)),

            Word::Acos => Unary(|_, v| Function::acos(v).map(Some)),
            Word::Asin => Unary(|_, v| Function::asin(v).map(Some)),
            Word::Atan => Unary(|_, v| Function::atan(v).map(Some)),
            Word::Cos => Unary(|_, v| Function::cos(v).map(Some)),
            Word::Cosh => Unary(|_, v| Function::cosh(v).map(Some)),
            Word::Sin => Unary(|_, v| Function::sin(v).map(Some)),
            Word::Sinh => Unary(|_, v| Function::sinh(v).map(Some)),
            Word::Tanh => Unary(|_, v| Function::tanh(v).map(Some)),

            Word::Ceil => Unary(|_, v| Function::ceil(v).map(Some)),
            Word::Floor => Unary(|_, v| Function::floor(v).map(Some)),
            Word::Round => Unary(|_, v| Function::round(v).map(Some)),
            Word::Ip => Unary(|_, v| Function::ip(v).map(Some)),
            Word::Fp => Unary(|_, v| Function::fp(v).map(Some)),
            Word::Sign => Unary(|_, v| Function::sign(v).map(Some)),
            Word::Abs => Unary(|_, v| Function::abs(v).map(Some)),
            Word::Max => Binary(|_, l, r| Operation::max(l, r).map(Some)),
            Word::Min => Binary(|_, l, r| Operation::min(l, r).map(Some)),

            Word::Hex => Nullary(|s| {
                s.radix = Radix::Hex;
                Ok(None)
            }),
            Word::Dec => Nullary(|s| {
                s.radix = Radix::Dec;
                Ok(None)
            }),
            Word::Bin => Nullary(|s| {
                s.radix = Radix::Bin;
                Ok(None)
            }),
            Word::Oct => Nullary(|s| {
                s.radix = Radix::Oct;
                Ok(None)
            }),

            Word::E => Nullary(|_| Ok(Some(Function::e()))),
            Word::Pi => Nullary(|_| Ok(Some(Function::pi()))),
            Word::Rand => Nullary(|_| Ok(Some(Function::rand()))),

            Word::Exp => Unary(|_, v| Function::exp(v).map(Some)),
            Word::Fact => Unary(|_, v| Function::fact(v).map(Some)),
            Word::Sqrt => Unary(|_, v| Function::sqrt(v).map(Some)),
            Word::Ln => Unary(|_, v| Function::ln(v).map(Some)),
            Word::Log => Binary(|_, l, r| Operation::log(l, r).map(Some)),
            Word::Pow => Binary(|_, l, r| Operation::pow(l, r).map(Some)),

            Word::Hnl => Unary(|_, v| Function::hnl(v).map(Some)),
            Word::Hns => Unary(|_, v| Function::hns(v).map(Some)),
            Word::Nhl => Unary(|_, v| Function::nhl(v).map(Some)),
            Word::Nhs => Unary(|_, v| Function::nhs(v).map(Some)),

            Word::Pick => Unary(|s, n| s.stack.pick(count(n)?).map(|_| None)),
            Word::Depth => Nullary(|s| Ok(Some(Val::Integer(s.stack.len() as i64)))),
            Word::Drop => Nullary(|s| s.stack.drop_n(1).map(|_| None)),
            Word::DropN => Unary(|s, n| s.stack.drop_n(count(n)?).map(|_| None)),
            Word::Dup => Nullary(|s| s.stack.duplicate(1).map(|_| None)),
            Word::DupN => Unary(|s, n| s.stack.duplicate(count(n)?).map(|_| None)),
            Word::Roll => Unary(|s, n| {
                s.stack.rotate(i64::try_from(n)?);
                Ok(None)
            }),
            Word::RollD => Unary(|s, n| {
                s.stack.rotate_down(i64::try_from(n)?);
                Ok(None)
            }),
            Word::Stack => Nullary(|s| {
                s.toggle_vertical();
                Ok(None)
            }),
            Word::Swap => Binary(|s, l, r| {
                s.stack.push(r);
                s.stack.push(l);
                Ok(None)
            }),

            Word::Clr => Nullary(|s| {
                s.clear_stack();
                Ok(None)
            }),
            Word::Clv => Nullary(|s| {
                s.clear_vars();
                Ok(None)
            }),
            Word::Clm => Nullary(|s| {
                s.clear_macros();
                Ok(None)
            }),
            Word::Cla => Nullary(|s| {
                s.clear_all();
                Ok(None)
            }),

            Word::Help | Word::Exit => return None,
        })
    }
}
