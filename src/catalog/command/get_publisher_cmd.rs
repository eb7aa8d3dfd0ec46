use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::publishers::dto::PublisherDto;

pub struct GetPublisherCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetPublisherCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetPublisherCommandRequest {
    pub publisher_id: i64,
}

impl GetPublisherCommandRequest {
    pub fn new(publisher_id: i64) -> Self {
        Self {
            publisher_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetPublisherCommandResponse {
    pub publisher: PublisherDto,
}

impl GetPublisherCommandResponse {
    pub fn new(publisher: PublisherDto) -> Self {
        Self {
            publisher,
        }
    }
}

#[async_trait]
impl Command<GetPublisherCommandRequest, GetPublisherCommandResponse> for GetPublisherCommand {
    async fn execute(&self, req: GetPublisherCommandRequest) -> Result<GetPublisherCommandResponse, CommandError> {
        self.catalog_service.find_publisher_by_id(req.publisher_id).await
            .map_err(CommandError::from).map(GetPublisherCommandResponse::new)
    }
}
