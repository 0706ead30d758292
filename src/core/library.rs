use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // Invalid argument supplied while building a book or a request.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // A general book was narrowed to a variant it does not hold.
    TypeMismatch {
        message: String,
        expected: BookKind,
        actual: BookKind,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn type_mismatch(message: &str, expected: BookKind, actual: BookKind) -> LibraryError {
        LibraryError::TypeMismatch { message: message.to_string(), expected, actual }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::TypeMismatch { message, expected, actual } => {
                write!(f, "{} expected {} but was {}", message, expected, actual)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookKind {
    Plain,
    Electronic,
}

impl From<String> for BookKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Electronic" => BookKind::Electronic,
            _ => BookKind::Plain,
        }
    }
}

impl Display for BookKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookKind::Plain => write!(f, "Plain"),
            BookKind::Electronic => write!(f, "Electronic"),
        }
    }
}
