use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::hold::domain::HoldService;
use crate::hold::dto::HoldDto;

pub(crate) struct ReserveItemCommand {
    hold_service: Box<dyn HoldService>,
}

impl ReserveItemCommand {
    pub(crate) fn new(hold_service: Box<dyn HoldService>) -> Self {
        Self {
            hold_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReserveItemCommandRequest {
    patron_id: String,
    item_id: String,
}

impl ReserveItemCommandRequest {
    pub fn new(patron_id: String, item_id: String) -> Self {
        Self {
            patron_id,
            item_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReserveItemCommandResponse {
    pub(crate) hold: HoldDto,
}

impl ReserveItemCommandResponse {
    pub fn new(hold: HoldDto) -> Self {
        Self {
            hold,
        }
    }
}

#[async_trait]
impl Command<ReserveItemCommandRequest, ReserveItemCommandResponse> for ReserveItemCommand {
    async fn execute(&self, req: ReserveItemCommandRequest) -> Result<ReserveItemCommandResponse, CommandError> {
        self.hold_service.reserve(req.patron_id.as_str(), req.item_id.as_str())
            .await.map_err(CommandError::from).map(ReserveItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
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
    }

    #[tokio::test]
    async fn test_should_run_reserve_item() {
        let item_cmd = ITEM_CMD.get().await.clone();
        let reserve_cmd = RESERVE_CMD.get().await.clone();

        let item = item_cmd.execute(AddItemCommandRequest::new("test item", "author", "5-7", 1, 21, 2))
            .await.expect("should add item");
        let res = reserve_cmd.execute(ReserveItemCommandRequest::new(
            "patron1".to_string(), item.item.item_id.to_string())).await.expect("should reserve item");
        assert_eq!(item.item.item_id, res.hold.item_id);
        assert_eq!(1, res.hold.position);
    }
}
