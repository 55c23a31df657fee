use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct GetItemCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetItemCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetItemCommandRequest {
    pub(crate) item_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetItemCommandResponse {
    pub item: ItemDto,
}

impl GetItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<GetItemCommandRequest, GetItemCommandResponse> for GetItemCommand {
    async fn execute(&self, req: GetItemCommandRequest) -> Result<GetItemCommandResponse, CommandError> {
        self.catalog_service.find_item_by_id(req.item_id.as_str())
            .await.map_err(CommandError::from).map(GetItemCommandResponse::new)
    }
}
