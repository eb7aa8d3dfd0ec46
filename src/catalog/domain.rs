pub mod service;

use async_trait::async_trait;
use crate::authors::dto::AuthorDto;
use crate::books::dto::{BookDetailsDto, SaveBookDto};
use crate::core::library::CatalogResult;
use crate::publishers::dto::PublisherDto;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> CatalogResult<Vec<BookDetailsDto>>;
    async fn find_book_by_id(&self, id: i64) -> CatalogResult<BookDetailsDto>;
    async fn add_book(&self, book: &SaveBookDto) -> CatalogResult<BookDetailsDto>;
    // returns the echoed payload, not the post-update entity
    async fn update_book(&self, id: i64, book: &SaveBookDto) -> CatalogResult<SaveBookDto>;
    // idempotent: succeeds whether or not the book existed
    async fn remove_book(&self, id: i64) -> CatalogResult<()>;

    async fn add_author(&self, author: &AuthorDto) -> CatalogResult<AuthorDto>;
    async fn find_author_by_id(&self, id: i64) -> CatalogResult<AuthorDto>;
    async fn list_authors(&self) -> CatalogResult<Vec<AuthorDto>>;

    async fn add_publisher(&self, publisher: &PublisherDto) -> CatalogResult<PublisherDto>;
    async fn find_publisher_by_id(&self, id: i64) -> CatalogResult<PublisherDto>;
    async fn list_publishers(&self) -> CatalogResult<Vec<PublisherDto>>;
}
