use async_trait::async_trait;
use crate::core::library::{CatalogError, FieldViolation};

#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CatalogError> for CommandError {
    fn from(other: CatalogError) -> Self {
        match other {
            CatalogError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            CatalogError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CatalogError::Validation { message, violations } => {
                CommandError::Validation { message, violations }
            }
            CatalogError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            CatalogError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: true }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::{CatalogError, FieldViolation};

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::Database { message: "test".to_string(), reason_code: None, retryable: false };
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None, retryable: false };
        let _ = CommandError::Other { message: "test".to_string(), reason_code: None };
    }

    #[tokio::test]
    async fn test_should_map_validation_error() {
        let err = CatalogError::validation(
            "bad payload", vec![FieldViolation::new("description", "description cannot be empty")]);
        if let CommandError::Validation { violations, .. } = CommandError::from(err) {
            assert_eq!(1, violations.len());
            assert_eq!("description", violations[0].field.as_str());
        } else {
            panic!("expected validation command error");
        }
    }

    #[tokio::test]
    async fn test_should_map_not_found_error() {
        assert!(matches!(CommandError::from(CatalogError::not_found("test")),
            CommandError::NotFound { message: _ }));
    }
}
