use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::authors::domain::model::AuthorEntity;
use crate::authors::repository::AuthorRepository;
use crate::core::library::{CatalogError, CatalogResult};
use crate::core::repository::Repository;

#[derive(Debug, Clone)]
pub struct MemoryAuthorRepository {
    seq: Arc<AtomicI64>,
    authors: Arc<RwLock<BTreeMap<i64, AuthorEntity>>>,
}

impl MemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            seq: Arc::new(AtomicI64::new(0)),
            authors: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for MemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<AuthorEntity> for MemoryAuthorRepository {
    async fn create(&self, entity: &AuthorEntity) -> CatalogResult<AuthorEntity> {
        let mut created = entity.clone();
        created.author_id = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.authors.write().await.insert(created.author_id, created.clone());
        Ok(created)
    }

    async fn update(&self, entity: &AuthorEntity) -> CatalogResult<usize> {
        let mut authors = self.authors.write().await;
        if !authors.contains_key(&entity.author_id) {
            return Err(CatalogError::not_found(
                format!("author not found for {}", entity.author_id).as_str()));
        }
        authors.insert(entity.author_id, entity.clone());
        Ok(1)
    }

    async fn get(&self, id: i64) -> CatalogResult<AuthorEntity> {
        self.authors.read().await.get(&id).cloned().ok_or_else(|| {
            CatalogError::not_found(format!("author not found for {}", id).as_str())
        })
    }

    async fn find_all(&self) -> CatalogResult<Vec<AuthorEntity>> {
        Ok(self.authors.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> CatalogResult<usize> {
        match self.authors.write().await.remove(&id) {
            Some(_) => Ok(1),
            None => Ok(0),
        }
    }
}

impl AuthorRepository for MemoryAuthorRepository {}
