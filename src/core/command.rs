use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Conflict {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Unavailable {
        message: String,
    },
    Busy {
        message: String,
        retryable: bool,
    },
    Unauthorized {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Other {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::AlreadyBorrowed { message } => {
                CommandError::Conflict { message, reason_code: Some("AlreadyBorrowed".to_string()) }
            }
            LibraryError::DuplicateHold { message } => {
                CommandError::Conflict { message, reason_code: Some("DuplicateHold".to_string()) }
            }
            LibraryError::AlreadyReturned { message } => {
                CommandError::Conflict { message, reason_code: Some("AlreadyReturned".to_string()) }
            }
            LibraryError::RenewalLimitReached { message } => {
                CommandError::Conflict { message, reason_code: Some("RenewalLimitReached".to_string()) }
            }
            LibraryError::HoldsPending { message } => {
                CommandError::Conflict { message, reason_code: Some("HoldsPending".to_string()) }
            }
            LibraryError::NoCopiesAvailable { message } => {
                CommandError::Unavailable { message }
            }
            LibraryError::Busy { message, retryable } => {
                CommandError::Busy { message, retryable }
            }
            LibraryError::Unauthorized { message } => {
                CommandError::Unauthorized { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Storage { message, reason_code, retryable } => {
                CommandError::Other { message, reason_code, retryable }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::Conflict { message: "test".to_string(), reason_code: None };
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Unavailable { message: "test".to_string() };
        let _ = CommandError::Busy { message: "test".to_string(), retryable: true };
        let _ = CommandError::Unauthorized { message: "test".to_string() };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Other { message: "test".to_string(), reason_code: None, retryable: false };
    }

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::not_found("test")),
                         CommandError::NotFound { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::already_borrowed("test")),
                         CommandError::Conflict { message: _, reason_code: _ }));
        assert!(matches!(CommandError::from(LibraryError::duplicate_hold("test")),
                         CommandError::Conflict { message: _, reason_code: _ }));
        assert!(matches!(CommandError::from(LibraryError::no_copies("test")),
                         CommandError::Unavailable { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::busy("test")),
                         CommandError::Busy { message: _, retryable: true }));
        assert!(matches!(CommandError::from(LibraryError::unauthorized("test")),
                         CommandError::Unauthorized { message: _ }));
    }
}
