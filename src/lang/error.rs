pub struct Error {
    code: ErrorCode,
    message: &'static str,
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
        Error { code, message: "" }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            message,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

/// Numeric codes echo the 8-bit era where a close analogue exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    UnresolvedSymbol = 2,
    Overflow = 6,
    OutOfMemory = 7,
    AddressOutOfRange = 9,
    DivisionByZero = 11,
    TypeMismatch = 13,
    StackUnderflow = 22,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::UnresolvedSymbol => "UNRESOLVED SYMBOL",
            ErrorCode::Overflow => "OVERFLOW",
            ErrorCode::OutOfMemory => "OUT OF MEMORY",
            ErrorCode::AddressOutOfRange => "ADDRESS OUT OF RANGE",
            ErrorCode::DivisionByZero => "DIVISION BY ZERO",
            ErrorCode::TypeMismatch => "TYPE MISMATCH",
            ErrorCode::StackUnderflow => "STACK UNDERFLOW",
            ErrorCode::InternalError => "INTERNAL ERROR",
        };
        if self.message.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{}; {}", code_str, self.message)
        }
    }
}
