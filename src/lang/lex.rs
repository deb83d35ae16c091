use super::Error;
use crate::error;
use crate::mach::Val;
use std::rc::Rc;

pub fn lex(s: &str) -> Vec<Rc<str>> {
    s.split_whitespace().map(Rc::from).collect()
}

/// Parse a numeric literal: decimal integer, decimal float, or an
/// integer with a `0x` or `0b` prefix.
pub fn literal(s: &str) -> Result<Val, Error> {
    if let Some(digits) = s.strip_prefix("0x") {
        return radix(s, digits, 16);
    }
    if let Some(digits) = s.strip_prefix("0b") {
        return radix(s, digits, 2);
    }
    if let Ok(n) = s.parse::<i64>() {
        return Ok(Val::Integer(n));
    }
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Val::normalize(n),
        _ => Err(unparsable(s)),
    }
}

fn radix(s: &str, digits: &str, radix: u32) -> Result<Val, Error> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(unparsable(s));
    }
    match i64::from_str_radix(digits, radix) {
        Ok(n) => Ok(Val::Integer(n)),
        Err(_) => Err(error!(InvalidOperation; format!("{} does not fit in 64 bits", s))),
    }
}

fn unparsable(s: &str) -> Error {
    error!(UnparsableToken; format!("Can't understand the input: {}", s))
}
