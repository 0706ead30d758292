use crate::core::library::{BookKind, LibraryError};

#[derive(Debug, PartialEq)]
pub enum CommandError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    TypeMismatch {
        message: String,
        expected: BookKind,
        actual: BookKind,
    },
    Serialization {
        message: String,
    },
}

// Command executes a single catalog use-case against a service
pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::TypeMismatch { message, expected, actual } => {
                CommandError::TypeMismatch { message, expected, actual }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::{BookKind, LibraryError};

    #[test]
    fn test_should_build_command_error() {
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Serialization { message: "test".to_string() };
    }

    #[test]
    fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Validation{ .. }));
        assert!(matches!(CommandError::from(LibraryError::type_mismatch("test", BookKind::Electronic, BookKind::Plain)),
            CommandError::TypeMismatch{ expected: BookKind::Electronic, actual: BookKind::Plain, .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Serialization{ .. }));
    }
}
