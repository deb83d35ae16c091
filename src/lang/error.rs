#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            message: String::new(),
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    EmptyStack = 1,
    InsufficientDepth = 2,
    InvalidRepeatCount = 3,
    MissingArgument = 4,
    ReservedName = 5,
    InvalidName = 6,
    NestedMacro = 7,
    UnparsableToken = 8,
    DivisionByZero = 9,
    InvalidOperation = 10,
    InvalidCount = 11,
    OutOfMemory = 12,
    Break = 13,
}

impl ErrorCode {
    fn text(self) -> &'static str {
        use ErrorCode::*;
        match self {
            EmptyStack => "Not enough values in stack",
            InsufficientDepth => "Not enough values in stack",
            InvalidRepeatCount => "Number of repeats should be a positive integer",
            MissingArgument => "Missing argument",
            ReservedName => "This is an internal command. Please choose another name",
            InvalidName => "Macro name should contain only ASCII alphabet characters",
            NestedMacro => {
                "You can't define macro inside a macro, this can possibly lead to endless loops"
            }
            UnparsableToken => "Can't understand the input",
            DivisionByZero => "Zero division error",
            InvalidOperation => "This operation is not possible with provided data",
            InvalidCount => "Count should be greater than zero",
            OutOfMemory => "Out of memory",
            Break => "Interrupted",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {:?}: {} }}", self.code, self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.code.text())
        } else {
            write!(f, "{}", self.message)
        }
    }
}
