use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorEntity {
    pub author_id: i64,
    pub full_name: String,
}

impl AuthorEntity {
    pub fn new(full_name: &str) -> Self {
        Self {
            author_id: 0, // assigned by the store on create
            full_name: full_name.to_string(),
        }
    }
}

impl Identifiable for AuthorEntity {
    fn id(&self) -> i64 {
        self.author_id
    }
}
