use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::library::{CatalogError, CatalogResult};
use crate::core::repository::Repository;
use crate::publishers::domain::model::PublisherEntity;
use crate::publishers::repository::PublisherRepository;

#[derive(Debug, Clone)]
pub struct MemoryPublisherRepository {
    seq: Arc<AtomicI64>,
    publishers: Arc<RwLock<BTreeMap<i64, PublisherEntity>>>,
}

impl MemoryPublisherRepository {
    pub fn new() -> Self {
        Self {
            seq: Arc::new(AtomicI64::new(0)),
            publishers: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for MemoryPublisherRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<PublisherEntity> for MemoryPublisherRepository {
    async fn create(&self, entity: &PublisherEntity) -> CatalogResult<PublisherEntity> {
        let mut created = entity.clone();
        created.publisher_id = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.publishers.write().await.insert(created.publisher_id, created.clone());
        Ok(created)
    }

    async fn update(&self, entity: &PublisherEntity) -> CatalogResult<usize> {
        let mut publishers = self.publishers.write().await;
        if !publishers.contains_key(&entity.publisher_id) {
            return Err(CatalogError::not_found(
                format!("publisher not found for {}", entity.publisher_id).as_str()));
        }
        publishers.insert(entity.publisher_id, entity.clone());
        Ok(1)
    }

    async fn get(&self, id: i64) -> CatalogResult<PublisherEntity> {
        self.publishers.read().await.get(&id).cloned().ok_or_else(|| {
            CatalogError::not_found(format!("publisher not found for {}", id).as_str())
        })
    }

    async fn find_all(&self) -> CatalogResult<Vec<PublisherEntity>> {
        Ok(self.publishers.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> CatalogResult<usize> {
        match self.publishers.write().await.remove(&id) {
            Some(_) => Ok(1),
            None => Ok(0),
        }
    }
}

impl PublisherRepository for MemoryPublisherRepository {}
