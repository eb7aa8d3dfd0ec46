use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::publishers::dto::PublisherDto;

pub struct AddPublisherCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddPublisherCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AddPublisherCommandRequest {
    pub publisher: PublisherDto,
}

impl AddPublisherCommandRequest {
    pub fn new(publisher: PublisherDto) -> Self {
        Self {
            publisher,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddPublisherCommandResponse {
    pub publisher: PublisherDto,
}

impl AddPublisherCommandResponse {
    pub fn new(publisher: PublisherDto) -> Self {
        Self {
            publisher,
        }
    }
}

#[async_trait]
impl Command<AddPublisherCommandRequest, AddPublisherCommandResponse> for AddPublisherCommand {
    async fn execute(&self, req: AddPublisherCommandRequest) -> Result<AddPublisherCommandResponse, CommandError> {
        self.catalog_service.add_publisher(&req.publisher).await
            .map_err(CommandError::from).map(AddPublisherCommandResponse::new)
    }
}
