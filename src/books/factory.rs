use lazy_static::lazy_static;
use crate::books::repository::{BookAuthorRepository, BookRepository};
use crate::books::repository::memory_book_repository::{MemoryBookAuthorRepository, MemoryBookRepository};
use crate::core::repository::RepositoryStore;

lazy_static! {
    // process-wide tables so every request handler sees the same store
    static ref SHARED_BOOKS: MemoryBookRepository = MemoryBookRepository::new();
    static ref SHARED_BOOK_AUTHORS: MemoryBookAuthorRepository = MemoryBookAuthorRepository::new();
}

pub async fn create_book_repository(store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::Memory => Box::new(SHARED_BOOKS.clone()),
    }
}

pub async fn create_book_author_repository(store: RepositoryStore) -> Box<dyn BookAuthorRepository> {
    match store {
        RepositoryStore::Memory => Box::new(SHARED_BOOK_AUTHORS.clone()),
    }
}
