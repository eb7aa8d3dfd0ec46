pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::{BookAuthorEntity, BookEntity};
use crate::core::library::CatalogResult;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {}

// Access to the book/author association edges. The edge set for a book is
// only ever rewritten wholesale, never patched.
#[async_trait]
pub trait BookAuthorRepository: Sync + Send {
    // edges for one book, in traversal order, always materialized
    async fn find_by_book_id(&self, book_id: i64) -> CatalogResult<Vec<BookAuthorEntity>>;

    // delete the existing edges for a book and insert one edge per author id,
    // in one scoped store operation so no half-applied edge set is observable.
    // Duplicate author ids collapse to a single edge, first occurrence wins.
    async fn replace_for_book(&self, book_id: i64, author_ids: &[i64]) -> CatalogResult<usize>;

    // remove every edge for a book, returning the number removed
    async fn delete_by_book_id(&self, book_id: i64) -> CatalogResult<usize>;
}
