use super::Val;

/// ## Display radix
///
/// Only integers are affected. Floats always print in decimal.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    #[default]
    Dec,
    Hex,
    Bin,
    Oct,
}

impl Radix {
    pub fn format(self, val: Val) -> String {
        let n = match val {
            Val::Integer(n) => n,
            Val::Float(_) => return val.to_string(),
        };
        let sign = if n < 0 { "-" } else { "" };
        let m = n.unsigned_abs();
        match self {
            Radix::Dec => n.to_string(),
            Radix::Hex => format!("{}0x{:x}", sign, m),
            Radix::Bin => format!("{}0b{:b}", sign, m),
            Radix::Oct => format!("{}0o{:o}", sign, m),
        }
    }
}

impl std::str::FromStr for Radix {
    type Err = String;
    fn from_str(s: &str) -> Result<Radix, String> {
        match s {
            "dec" => Ok(Radix::Dec),
            "hex" => Ok(Radix::Hex),
            "bin" => Ok(Radix::Bin),
            "oct" => Ok(Radix::Oct),
            _ => Err(format!("unknown radix: {}", s)),
        }
    }
}
