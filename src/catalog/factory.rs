use crate::authors::factory as authors_factory;
use crate::books::factory as books_factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::publishers::factory as publishers_factory;

pub async fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> Box<dyn CatalogService> {
    let book_repo = books_factory::create_book_repository(store).await;
    let book_author_repo = books_factory::create_book_author_repository(store).await;
    let author_repo = authors_factory::create_author_repository(store).await;
    let publisher_repo = publishers_factory::create_publisher_repository(store).await;
    Box::new(CatalogServiceImpl::new(config, book_repo, book_author_repo, author_repo, publisher_repo))
}
