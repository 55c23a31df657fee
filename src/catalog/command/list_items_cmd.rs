use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct ListItemsCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListItemsCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListItemsCommandRequest {
    // optional age-group filter, as the original discovery page offered
    pub(crate) age_group: Option<String>,
    pub(crate) page: Option<String>,
    pub(crate) page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ListItemsCommandResponse {
    pub items: Vec<ItemDto>,
    pub next_page: Option<String>,
}

impl ListItemsCommandResponse {
    pub fn new(items: Vec<ItemDto>, next_page: Option<String>) -> Self {
        Self {
            items,
            next_page,
        }
    }
}

#[async_trait]
impl Command<ListItemsCommandRequest, ListItemsCommandResponse> for ListItemsCommand {
    async fn execute(&self, req: ListItemsCommandRequest) -> Result<ListItemsCommandResponse, CommandError> {
        let page_size = req.page_size.unwrap_or(50);
        let res = match req.age_group {
            Some(age_group) => {
                self.catalog_service.find_items_by_age_group(
                    age_group.as_str(), req.page.as_deref(), page_size).await
            }
            None => {
                self.catalog_service.list_items(req.page.as_deref(), page_size).await
            }
        }.map_err(CommandError::from)?;
        Ok(ListItemsCommandResponse::new(res.records, res.next_page))
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use uuid::Uuid;
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::catalog::command::list_items_cmd::{ListItemsCommand, ListItemsCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref ADD_CMD : AsyncOnce<AddItemCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory).await;
                AddItemCommand::new(svc)
            });
        static ref LIST_CMD : AsyncOnce<ListItemsCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory).await;
                ListItemsCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_list_items_by_age_group() {
        let add_cmd = ADD_CMD.get().await.clone();
        let list_cmd = LIST_CMD.get().await.clone();

        let age_group = Uuid::new_v4().to_string();
        let _ = add_cmd.execute(AddItemCommandRequest::new("test item", "author", age_group.as_str(), 1, 14, 1))
            .await.expect("should add item");
        let res = list_cmd.execute(ListItemsCommandRequest {
            age_group: Some(age_group.to_string()), page: None, page_size: None,
        }).await.expect("should list items");
        assert_eq!(1, res.items.len());
    }
}
