use serde::{Deserialize, Serialize};
use crate::authors::domain::model::AuthorEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDto {
    // ignored on add; the store assigns it
    #[serde(default)]
    pub author_id: i64,
    pub full_name: String,
}

impl AuthorDto {
    pub fn new(full_name: &str) -> Self {
        Self {
            author_id: 0,
            full_name: full_name.to_string(),
        }
    }
}

impl From<&AuthorEntity> for AuthorDto {
    fn from(other: &AuthorEntity) -> Self {
        Self {
            author_id: other.author_id,
            full_name: other.full_name.to_string(),
        }
    }
}

impl From<&AuthorDto> for AuthorEntity {
    fn from(other: &AuthorDto) -> Self {
        Self {
            author_id: other.author_id,
            full_name: other.full_name.to_string(),
        }
    }
}
