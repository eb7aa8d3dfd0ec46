use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDetailsDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDetailsDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDetailsDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books().await
            .map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}
