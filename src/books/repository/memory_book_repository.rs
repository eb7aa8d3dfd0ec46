use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::model::{BookAuthorEntity, BookEntity};
use crate::books::repository::{BookAuthorRepository, BookRepository};
use crate::core::library::{CatalogError, CatalogResult};
use crate::core::repository::Repository;

// In-process book table. BTreeMap keeps the store's natural iteration order
// deterministic (ascending id). Clones share the same underlying table.
#[derive(Debug, Clone)]
pub struct MemoryBookRepository {
    seq: Arc<AtomicI64>,
    books: Arc<RwLock<BTreeMap<i64, BookEntity>>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            seq: Arc::new(AtomicI64::new(0)),
            books: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> CatalogResult<BookEntity> {
        let mut created = entity.clone();
        created.book_id = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.books.write().await.insert(created.book_id, created.clone());
        Ok(created)
    }

    async fn update(&self, entity: &BookEntity) -> CatalogResult<usize> {
        let mut books = self.books.write().await;
        if !books.contains_key(&entity.book_id) {
            return Err(CatalogError::not_found(
                format!("book not found for {}", entity.book_id).as_str()));
        }
        books.insert(entity.book_id, entity.clone());
        Ok(1)
    }

    async fn get(&self, id: i64) -> CatalogResult<BookEntity> {
        self.books.read().await.get(&id).cloned().ok_or_else(|| {
            CatalogError::not_found(format!("book not found for {}", id).as_str())
        })
    }

    async fn find_all(&self) -> CatalogResult<Vec<BookEntity>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> CatalogResult<usize> {
        match self.books.write().await.remove(&id) {
            Some(_) => Ok(1),
            None => Ok(0),
        }
    }
}

impl BookRepository for MemoryBookRepository {}

// In-process edge table. Edges keep insertion order, which is the traversal
// order the projected author-name list follows.
#[derive(Debug, Clone)]
pub struct MemoryBookAuthorRepository {
    edges: Arc<RwLock<Vec<BookAuthorEntity>>>,
}

impl MemoryBookAuthorRepository {
    pub fn new() -> Self {
        Self {
            edges: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MemoryBookAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookAuthorRepository for MemoryBookAuthorRepository {
    async fn find_by_book_id(&self, book_id: i64) -> CatalogResult<Vec<BookAuthorEntity>> {
        Ok(self.edges.read().await.iter()
            .filter(|edge| edge.book_id == book_id)
            .cloned()
            .collect())
    }

    async fn replace_for_book(&self, book_id: i64, author_ids: &[i64]) -> CatalogResult<usize> {
        // single write-lock scope: the delete and the inserts commit together
        let mut edges = self.edges.write().await;
        edges.retain(|edge| edge.book_id != book_id);
        let mut inserted = 0;
        for author_id in author_ids {
            if edges.iter().any(|edge| edge.book_id == book_id && edge.author_id == *author_id) {
                continue;
            }
            edges.push(BookAuthorEntity::new(book_id, *author_id));
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn delete_by_book_id(&self, book_id: i64) -> CatalogResult<usize> {
        let mut edges = self.edges.write().await;
        let before = edges.len();
        edges.retain(|edge| edge.book_id != book_id);
        Ok(before - edges.len())
    }
}
