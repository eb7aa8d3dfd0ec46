use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::publishers::dto::PublisherDto;

pub struct ListPublishersCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListPublishersCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct ListPublishersCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListPublishersCommandResponse {
    pub publishers: Vec<PublisherDto>,
}

impl ListPublishersCommandResponse {
    pub fn new(publishers: Vec<PublisherDto>) -> Self {
        Self {
            publishers,
        }
    }
}

#[async_trait]
impl Command<ListPublishersCommandRequest, ListPublishersCommandResponse> for ListPublishersCommand {
    async fn execute(&self, _req: ListPublishersCommandRequest) -> Result<ListPublishersCommandResponse, CommandError> {
        self.catalog_service.list_publishers().await
            .map_err(CommandError::from).map(ListPublishersCommandResponse::new)
    }
}
