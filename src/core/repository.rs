use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::CatalogResult;

// Record-level access to the durable store. Every call commits on its own;
// there is no cross-call transaction at this seam.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, returning it with its store-assigned identity
    async fn create(&self, entity: &Entity) -> CatalogResult<Entity>;

    // overwrite an existing entity, NotFound when the identity is absent
    async fn update(&self, entity: &Entity) -> CatalogResult<usize>;

    // get an entity, NotFound when absent
    async fn get(&self, id: i64) -> CatalogResult<Entity>;

    // all entities in the store's natural iteration order, always materialized
    async fn find_all(&self) -> CatalogResult<Vec<Entity>>;

    // delete an entity, returning the number of records removed (0 or 1)
    async fn delete(&self, id: i64) -> CatalogResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    // in-process tables; a durable engine slots in behind the same traits
    Memory,
}
