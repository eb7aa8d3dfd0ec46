use async_trait::async_trait;
use serde::Serialize;
use crate::authors::dto::AuthorDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListAuthorsCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListAuthorsCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct ListAuthorsCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListAuthorsCommandResponse {
    pub authors: Vec<AuthorDto>,
}

impl ListAuthorsCommandResponse {
    pub fn new(authors: Vec<AuthorDto>) -> Self {
        Self {
            authors,
        }
    }
}

#[async_trait]
impl Command<ListAuthorsCommandRequest, ListAuthorsCommandResponse> for ListAuthorsCommand {
    async fn execute(&self, _req: ListAuthorsCommandRequest) -> Result<ListAuthorsCommandResponse, CommandError> {
        self.catalog_service.list_authors().await
            .map_err(CommandError::from).map(ListAuthorsCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::authors::dto::AuthorDto;
    use crate::catalog::command::list_authors_cmd::{ListAuthorsCommand, ListAuthorsCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory).await
            });
        static ref SUT_CMD: AsyncOnce<ListAuthorsCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                ListAuthorsCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_list_authors() {
        let svc = SUT_SVC.get().await.clone();
        let cmd = SUT_CMD.get().await.clone();

        let created = svc.add_author(&AuthorDto::new("list authors cmd name"))
            .await.expect("should add author");
        let res = cmd.execute(ListAuthorsCommandRequest {}).await.expect("should list authors");
        assert!(res.authors.iter().any(|a| a.author_id == created.author_id));
    }
}
