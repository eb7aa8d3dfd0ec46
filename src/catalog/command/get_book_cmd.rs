use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDetailsDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: i64,
}

impl GetBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDetailsDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDetailsDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id)
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use chrono::NaiveDateTime;
    use lazy_static::lazy_static;
    use crate::books::dto::SaveBookDto;
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::publishers::dto::PublisherDto;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory).await
            });
        static ref SUT_CMD: AsyncOnce<GetBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory).await;
                GetBookCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let svc = SUT_SVC.get().await.clone();
        let cmd = SUT_CMD.get().await.clone();

        let publisher = svc.add_publisher(&PublisherDto::new("get cmd publisher"))
            .await.expect("should add publisher");
        let book = SaveBookDto {
            title: "get cmd book".to_string(),
            description: "description".to_string(),
            genre: "genre".to_string(),
            cover_url: "http://covers/1.png".to_string(),
            date_added: NaiveDateTime::parse_from_str("2024-05-01T00:00:00", "%Y-%m-%dT%H:%M:%S").unwrap(),
            is_read: false,
            date_read: None,
            rate: None,
            publisher_id: publisher.publisher_id,
            author_ids: vec![],
        };
        let created = svc.add_book(&book).await.expect("should add book");

        let res = cmd.execute(GetBookCommandRequest::new(created.id)).await.expect("should get book");
        assert_eq!("get cmd book", res.book.title.as_str());
        assert_eq!("get cmd publisher", res.book.publisher_name.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_get_book_for_unknown_id() {
        let cmd = SUT_CMD.get().await.clone();
        let res = cmd.execute(GetBookCommandRequest::new(-1)).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
