use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::{BookDetailsDto, SaveBookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandRequest {
    pub book: SaveBookDto,
}

impl AddBookCommandRequest {
    pub fn new(book: SaveBookDto) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDetailsDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDetailsDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.book).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
