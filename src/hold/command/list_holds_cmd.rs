use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::hold::domain::HoldService;
use crate::hold::dto::HoldDto;

pub(crate) struct ListHoldsCommand {
    hold_service: Box<dyn HoldService>,
}

impl ListHoldsCommand {
    pub(crate) fn new(hold_service: Box<dyn HoldService>) -> Self {
        Self {
            hold_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListHoldsCommandRequest {
    pub(crate) patron_id: String,
    pub(crate) page: Option<String>,
    pub(crate) page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ListHoldsCommandResponse {
    pub holds: Vec<HoldDto>,
    pub next_page: Option<String>,
}

impl ListHoldsCommandResponse {
    pub fn new(holds: Vec<HoldDto>, next_page: Option<String>) -> Self {
        Self {
            holds,
            next_page,
        }
    }
}

#[async_trait]
impl Command<ListHoldsCommandRequest, ListHoldsCommandResponse> for ListHoldsCommand {
    async fn execute(&self, req: ListHoldsCommandRequest) -> Result<ListHoldsCommandResponse, CommandError> {
        let res = self.hold_service.list_open_holds(
            req.patron_id.as_str(), req.page.as_deref(), req.page_size.unwrap_or(50))
            .await.map_err(CommandError::from)?;
        Ok(ListHoldsCommandResponse::new(res.records, res.next_page))
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use uuid::Uuid;
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::hold::command::list_holds_cmd::{ListHoldsCommand, ListHoldsCommandRequest};
    use crate::hold::command::reserve_item_cmd::{ReserveItemCommand, ReserveItemCommandRequest};
    use crate::hold::factory::create_hold_service;

    lazy_static! {
        static ref ITEM_CMD : AsyncOnce<AddItemCommand> = AsyncOnce::new(async {
                let svc = create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory).await;
                AddItemCommand::new(svc)
            });
        static ref RESERVE_CMD : AsyncOnce<ReserveItemCommand> = AsyncOnce::new(async {
                let svc = create_hold_service(&Configuration::new("test"), RepositoryStore::InMemory).await;
                ReserveItemCommand::new(svc)
            });
        static ref LIST_CMD : AsyncOnce<ListHoldsCommand> = AsyncOnce::new(async {
                let svc = create_hold_service(&Configuration::new("test"), RepositoryStore::InMemory).await;
                ListHoldsCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_list_holds() {
        let item_cmd = ITEM_CMD.get().await.clone();
        let reserve_cmd = RESERVE_CMD.get().await.clone();
        let list_cmd = LIST_CMD.get().await.clone();

        let patron_id = Uuid::new_v4().to_string();
        let item = item_cmd.execute(AddItemCommandRequest::new("test item", "author", "5-7", 1, 21, 2))
            .await.expect("should add item");
        let _ = reserve_cmd.execute(ReserveItemCommandRequest::new(
            patron_id.to_string(), item.item.item_id.to_string())).await.expect("should reserve item");
        let res = list_cmd.execute(ListHoldsCommandRequest {
            patron_id: patron_id.to_string(), page: None, page_size: None,
        }).await.expect("should list holds");
        assert_eq!(1, res.holds.len());
    }
}
