use lazy_static::lazy_static;
use crate::core::repository::RepositoryStore;
use crate::publishers::repository::PublisherRepository;
use crate::publishers::repository::memory_publisher_repository::MemoryPublisherRepository;

lazy_static! {
    static ref SHARED_PUBLISHERS: MemoryPublisherRepository = MemoryPublisherRepository::new();
}

pub async fn create_publisher_repository(store: RepositoryStore) -> Box<dyn PublisherRepository> {
    match store {
        RepositoryStore::Memory => Box::new(SHARED_PUBLISHERS.clone()),
    }
}
