use super::Column;
use crate::mach::Address;

/// ## Load errors and runtime faults
///
/// Every failure in the machine is an `Error` carrying an `ErrorCode`.
/// Load errors know the source column of the offending token, runtime
/// faults know the address of the instruction that faulted.

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    address: Option<Address>,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $addr:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_address($addr)
            .in_column($col)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_address($addr)
            .message($msg)
    };
    ($err:ident, $addr:expr, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_address($addr)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            address: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Instruction index the error refers to, if any.
    pub fn address(&self) -> Option<Address> {
        self.address
    }

    /// Character span of the offending token in the program source.
    pub fn column(&self) -> Column {
        self.column.clone()
    }

    /// Load errors are raised before a machine exists.
    /// Everything else is a runtime fault.
    pub fn is_load_error(&self) -> bool {
        matches!(self.code, ErrorCode::UnbalancedBrackets)
    }

    pub fn in_address(&self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            code: self.code,
            address: Some(address),
            column: self.column.clone(),
            message: self.message.clone(),
        }
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            address: self.address,
            column: column.clone(),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            address: self.address,
            column: self.column.clone(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnbalancedBrackets = 1,
    InvalidPage = 2,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::UnbalancedBrackets => "unbalanced brackets",
            ErrorCode::InvalidPage => "invalid page",
            ErrorCode::InternalError => "internal error",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" at instruction {}", address));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" (column {}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", code_str, suffix)
    }
}

impl std::error::Error for Error {}
