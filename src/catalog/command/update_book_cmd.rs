use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::SaveBookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct UpdateBookCommandRequest {
    pub book_id: i64,
    pub book: SaveBookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, book: SaveBookDto) -> Self {
        Self {
            book_id,
            book,
        }
    }
}

// the update contract echoes the submitted payload back to the caller
#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: SaveBookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: SaveBookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id, &req.book).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
