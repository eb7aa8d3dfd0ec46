use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::authors::dto::AuthorDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetAuthorCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetAuthorCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAuthorCommandRequest {
    pub author_id: i64,
}

impl GetAuthorCommandRequest {
    pub fn new(author_id: i64) -> Self {
        Self {
            author_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetAuthorCommandResponse {
    pub author: AuthorDto,
}

impl GetAuthorCommandResponse {
    pub fn new(author: AuthorDto) -> Self {
        Self {
            author,
        }
    }
}

#[async_trait]
impl Command<GetAuthorCommandRequest, GetAuthorCommandResponse> for GetAuthorCommand {
    async fn execute(&self, req: GetAuthorCommandRequest) -> Result<GetAuthorCommandResponse, CommandError> {
        self.catalog_service.find_author_by_id(req.author_id).await
            .map_err(CommandError::from).map(GetAuthorCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::authors::dto::AuthorDto;
    use crate::catalog::command::get_author_cmd::{GetAuthorCommand, GetAuthorCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory).await
            });
        static ref SUT_CMD: AsyncOnce<GetAuthorCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                GetAuthorCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_get_author() {
        let svc = SUT_SVC.get().await.clone();
        let cmd = SUT_CMD.get().await.clone();

        let created = svc.add_author(&AuthorDto::new("get author cmd name"))
            .await.expect("should add author");
        let res = cmd.execute(GetAuthorCommandRequest::new(created.author_id))
            .await.expect("should get author");
        assert_eq!("get author cmd name", res.author.full_name.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_get_author_for_unknown_id() {
        let cmd = SUT_CMD.get().await.clone();
        let res = cmd.execute(GetAuthorCommandRequest::new(-1)).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
