use lazy_static::lazy_static;
use crate::authors::repository::AuthorRepository;
use crate::authors::repository::memory_author_repository::MemoryAuthorRepository;
use crate::core::repository::RepositoryStore;

lazy_static! {
    static ref SHARED_AUTHORS: MemoryAuthorRepository = MemoryAuthorRepository::new();
}

pub async fn create_author_repository(store: RepositoryStore) -> Box<dyn AuthorRepository> {
    match store {
        RepositoryStore::Memory => Box::new(SHARED_AUTHORS.clone()),
    }
}
