use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::FieldViolation;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(env: &str, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(env),
            store,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

// Renders the violation collection as a field -> message object, the shape
// validation clients consume.
fn violations_to_body(violations: &[FieldViolation]) -> String {
    let mut body = Map::new();
    for violation in violations {
        body.insert(violation.field.to_string(), Value::String(violation.message.to_string()));
    }
    serde_json::to_string(&body).unwrap_or_else(|_| "{}".to_string())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Database { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Validation { ref violations, .. } => {
                (StatusCode::BAD_REQUEST, violations_to_body(violations))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Other { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}
