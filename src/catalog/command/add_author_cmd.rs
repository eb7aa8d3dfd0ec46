use async_trait::async_trait;
use serde::Serialize;
use crate::authors::dto::AuthorDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddAuthorCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddAuthorCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AddAuthorCommandRequest {
    pub author: AuthorDto,
}

impl AddAuthorCommandRequest {
    pub fn new(author: AuthorDto) -> Self {
        Self {
            author,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddAuthorCommandResponse {
    pub author: AuthorDto,
}

impl AddAuthorCommandResponse {
    pub fn new(author: AuthorDto) -> Self {
        Self {
            author,
        }
    }
}

#[async_trait]
impl Command<AddAuthorCommandRequest, AddAuthorCommandResponse> for AddAuthorCommand {
    async fn execute(&self, req: AddAuthorCommandRequest) -> Result<AddAuthorCommandResponse, CommandError> {
        self.catalog_service.add_author(&req.author).await
            .map_err(CommandError::from).map(AddAuthorCommandResponse::new)
    }
}
