use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::{opt_serializer, serializer};

// BookEntity is one cataloged book. date_read and rate only carry meaning
// while is_read is true; stray stored values are suppressed on projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub cover_url: String,
    #[serde(with = "serializer")]
    pub date_added: NaiveDateTime,
    pub is_read: bool,
    #[serde(with = "opt_serializer", skip_serializing_if = "Option::is_none", default)]
    pub date_read: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rate: Option<f64>,
    pub publisher_id: i64,
}

impl BookEntity {
    pub fn new(title: &str, description: &str, genre: &str, cover_url: &str, publisher_id: i64) -> Self {
        Self {
            book_id: 0, // assigned by the store on create
            title: title.to_string(),
            description: description.to_string(),
            genre: genre.to_string(),
            cover_url: cover_url.to_string(),
            date_added: Utc::now().naive_utc(),
            is_read: false,
            date_read: None,
            rate: None,
            publisher_id,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

// BookAuthorEntity is one edge of the book/author many-to-many relation.
// The set of edges for a book always mirrors the author ids submitted on
// its most recent create or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookAuthorEntity {
    pub book_id: i64,
    pub author_id: i64,
}

impl BookAuthorEntity {
    pub fn new(book_id: i64, author_id: i64) -> Self {
        Self {
            book_id,
            author_id,
        }
    }
}
