use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// FieldViolation is one field-level problem found while checking a write request.
// Validation collects the whole set so callers see every problem at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum CatalogError {
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
    },
}

impl CatalogError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, violations: Vec<FieldViolation>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), violations }
    }

    pub fn serialization(message: &str) -> CatalogError {
        CatalogError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CatalogError::Database { retryable, .. } => { *retryable }
            CatalogError::NotFound { .. } => { false }
            CatalogError::Validation { .. } => { false }
            CatalogError::Serialization { .. } => { false }
            CatalogError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::runtime(
            format!("serde io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Validation { message, violations } => {
                write!(f, "{} {:?}", message, violations)
            }
            CatalogError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog operations and repositories.
pub type CatalogResult<T> = Result<T, CatalogError>;
