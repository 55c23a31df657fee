use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct AddItemCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddItemCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddItemCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) age_group: String,
    pub(crate) total_copies: i64,
    pub(crate) loan_period_days: i64,
    pub(crate) max_renewals: i64,
}

impl AddItemCommandRequest {
    pub fn new(title: &str, author: &str, age_group: &str,
               total_copies: i64, loan_period_days: i64, max_renewals: i64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            age_group: age_group.to_string(),
            total_copies,
            loan_period_days,
            max_renewals,
        }
    }

    pub fn build_item(&self) -> ItemDto {
        ItemDto::new(self.title.as_str(), self.author.as_str(), self.age_group.as_str(),
                     self.total_copies, self.loan_period_days, self.max_renewals)
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddItemCommandResponse {
    pub item: ItemDto,
}

impl AddItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand {
    async fn execute(&self, req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
        let item = req.build_item();
        self.catalog_service.add_item(&item).await.map_err(CommandError::from).map(|_| AddItemCommandResponse::new(item))
    }
}
