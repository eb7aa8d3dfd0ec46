use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::utils::date::{opt_serializer, serializer};

// SaveBookDto is the write-shape shared by add and update. author_ids feeds
// the association replace-all and is never stored on the book itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveBookDto {
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
    pub author_ids: Vec<i64>,
}

impl SaveBookDto {
    // Scalar fields copy over verbatim, including date_read and rate even
    // when is_read is false. Suppression happens on projection, not here.
    pub fn build_book(&self, book_id: i64) -> BookEntity {
        BookEntity {
            book_id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            genre: self.genre.to_string(),
            cover_url: self.cover_url.to_string(),
            date_added: self.date_added,
            is_read: self.is_read,
            date_read: self.date_read,
            rate: self.rate,
            publisher_id: self.publisher_id,
        }
    }
}

// BookDetailsDto is the read-shape: scalar fields plus the resolved publisher
// name and the author names in store traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetailsDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub genre: String,
    pub cover_url: String,
    pub is_read: bool,
    #[serde(with = "opt_serializer", skip_serializing_if = "Option::is_none", default)]
    pub date_read: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rate: Option<f64>,
    pub publisher_name: String,
    pub author_names: Vec<String>,
}

impl BookDetailsDto {
    pub fn project(book: &BookEntity, publisher_name: &str, author_names: Vec<String>) -> Self {
        // date_read and rate are undefined unless the book has been read,
        // whatever the store happens to hold
        let (date_read, rate) = if book.is_read {
            (book.date_read, book.rate)
        } else {
            (None, None)
        };
        Self {
            id: book.book_id,
            title: book.title.to_string(),
            description: book.description.to_string(),
            genre: book.genre.to_string(),
            cover_url: book.cover_url.to_string(),
            is_read: book.is_read,
            date_read,
            rate,
            publisher_name: publisher_name.to_string(),
            author_names,
        }
    }
}
