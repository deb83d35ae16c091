use crate::mach::Val;
use std::collections::HashMap;
use std::rc::Rc;

thread_local!(
    static STRING_TO_WORD: HashMap<&'static str, Word> =
        Word::ALL.iter().map(|w| (w.as_str(), *w)).collect();
);

/// ## Classified token
///
/// A raw token is classified again every time the dispatch loop visits it
/// because splicing may have changed what surrounds it.

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Number to push. Variable references classify as their value.
    Literal(Val),
    /// `repeat`: pop a count and splice copies of the next token.
    Repeat,
    /// `macro`: the rest of the line is a definition.
    Macro,
    /// User defined macro: its name and the body as it was looked up.
    Invoke(Rc<str>, Rc<[Rc<str>]>),
    /// `name=`: pop the stack into a variable.
    Assign(Rc<str>),
    /// `dupN`: duplicate the top N items in order.
    DupN(usize),
    /// Built-in command.
    Word(Word),
}

impl Token {
    /// Directives and commands recognized by their spelling alone.
    /// Macro invocations and variables depend on the session and
    /// literals need parsing, so those return `None`.
    pub fn from_string(s: &str) -> Option<Token> {
        match s {
            "repeat" => return Some(Token::Repeat),
            "macro" => return Some(Token::Macro),
            _ => {}
        }
        if let Some(name) = assignment(s) {
            return Some(Token::Assign(name.into()));
        }
        if let Some(n) = dup_count(s) {
            return Some(Token::DupN(n));
        }
        Word::from_string(s).map(Token::Word)
    }
}

/// True if `s` names a built-in command or directive.
pub fn is_reserved(s: &str) -> bool {
    s == "repeat" || s == "macro" || Word::from_string(s).is_some()
}

/// Matches `^(\w+)=$` and returns the name.
pub fn assignment(s: &str) -> Option<&str> {
    let name = s.strip_suffix('=')?;
    if !name.is_empty() && name.chars().all(is_word_char) {
        Some(name)
    } else {
        None
    }
}

/// Matches `^dup(\d+)$` and returns the count. Counts too large for
/// `usize` saturate; no stack is that deep.
pub fn dup_count(s: &str) -> Option<usize> {
    let digits = s.strip_prefix("dup")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse::<usize>().unwrap_or(usize::MAX))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    // *** Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Incr,
    Decr,

    // *** Bitwise
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    Shl,
    Shr,

    // *** Boolean
    And,
    Or,
    Xor,
    Not,

    // *** Comparison
    Lt,
    LtEq,
    Eq,
    NotEq,
    Gt,
    GtEq,

    // *** Trigonometric
    Acos,
    Asin,
    Atan,
    Cos,
    Cosh,
    Sin,
    Sinh,
    Tanh,

    // *** Numeric utilities
    Ceil,
    Floor,
    Round,
    Ip,
    Fp,
    Sign,
    Abs,
    Max,
    Min,

    // *** Display modes
    Hex,
    Dec,
    Bin,
    Oct,

    // *** Constants
    E,
    Pi,
    Rand,

    // *** Math
    Exp,
    Fact,
    Sqrt,
    Ln,
    Log,
    Pow,

    // *** Byte order
    Hnl,
    Hns,
    Nhl,
    Nhs,

    // *** Stack
    Pick,
    Depth,
    Drop,
    DropN,
    Dup,
    DupN,
    Roll,
    RollD,
    Stack,
    Swap,

    // *** Session
    Clr,
    Clv,
    Clm,
    Cla,

    Help,
    Exit,
}

impl Word {
    pub const ALL: &'static [Word] = &[
        Word::Add,
        Word::Sub,
        Word::Mul,
        Word::Div,
        Word::Mod,
        Word::Incr,
        Word::Decr,
        Word::BitAnd,
        Word::BitOr,
        Word::BitXor,
        Word::BitNot,
        Word::Shl,
        Word::Shr,
        Word::And,
        Word::Or,
        Word::Xor,
        Word::Not,
        Word::Lt,
        Word::LtEq,
        Word::Eq,
        Word::NotEq,
        Word::Gt,
        Word::GtEq,
        Word::Acos,
        Word::Asin,
        Word::Atan,
        Word::Cos,
        Word::Cosh,
        Word::Sin,
        Word::Sinh,
        Word::Tanh,
        Word::Ceil,
        Word::Floor,
        Word::Round,
        Word::Ip,
        Word::Fp,
        Word::Sign,
        Word::Abs,
        Word::Max,
        Word::Min,
        Word::Hex,
        Word::Dec,
        Word::Bin,
        Word::Oct,
        Word::E,
        Word::Pi,
        Word::Rand,
        Word::Exp,
        Word::Fact,
        Word::Sqrt,
        Word::Ln,
        Word::Log,
        Word::Pow,
        Word::Hnl,
        Word::Hns,
        Word::Nhl,
        Word::Nhs,
        Word::Pick,
        Word::Depth,
        Word::Drop,
        Word::DropN,
        Word::Dup,
        Word::DupN,
        Word::Roll,
        Word::RollD,
        Word::Stack,
        Word::Swap,
        Word::Clr,
        Word::Clv,
        Word::Clm,
        Word::Cla,
        Word::Help,
        Word::Exit,
    ];

    pub fn from_string(s: &str) -> Option<Word> {
        STRING_TO_WORD.with(|stw| stw.get(s).copied())
    }

    pub fn as_str(self) -> &'static str {
        use Word::*;
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Incr => "++",
            Decr => "--",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            BitNot => "~",
            Shl => "<<",
            Shr => ">>",
            And => "&&",
            Or => "||",
            Xor => "^^",
            Not => "!",
            Lt => "<",
            LtEq => "<=",
            Eq => "==",
            NotEq => "!=",
            Gt => ">",
            GtEq => ">=",
            Acos => "acos",
            Asin => "asin",
            Atan => "atan",
            Cos => "cos",
            Cosh => "cosh",
            Sin => "sin",
            Sinh => "sinh",
            Tanh => "tanh",
            Ceil => "ceil",
            Floor => "floor",
            Round => "round",
            Ip => "ip",
            Fp => "fp",
            Sign => "sign",
            Abs => "abs",
            Max => "max",
            Min => "min",
            Hex => "hex",
            Dec => "dec",
            Bin => "bin",
            Oct => "oct",
            E => "e",
            Pi => "pi",
            Rand => "rand",
            Exp => "exp",
            Fact => "fact",
            Sqrt => "sqrt",
            Ln => "ln",
            Log => "log",
            Pow => "pow",
            Hnl => "hnl",
            Hns => "hns",
            Nhl => "nhl",
            Nhs => "nhs",
            Pick => "pick",
            Depth => "depth",
            Drop => "drop",
            DropN => "dropn",
            Dup => "dup",
            DupN => "dupn",
            Roll => "roll",
            RollD => "rolld",
            Stack => "stack",
            Swap => "swap",
            Clr => "clr",
            Clv => "clv",
            Clm => "clm",
            Cla => "cla",
            Help => "help",
            Exit => "exit",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
