use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::hold::domain::HoldService;
use crate::hold::dto::HoldDto;

pub(crate) struct CancelHoldCommand {
    hold_service: Box<dyn HoldService>,
}

impl CancelHoldCommand {
    pub(crate) fn new(hold_service: Box<dyn HoldService>) -> Self {
        Self {
            hold_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CancelHoldCommandRequest {
    patron_id: String,
    hold_id: String,
}

impl CancelHoldCommandRequest {
    pub fn new(patron_id: String, hold_id: String) -> Self {
        Self {
            patron_id,
            hold_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct CancelHoldCommandResponse {
    hold: HoldDto,
}

impl CancelHoldCommandResponse {
    pub fn new(hold: HoldDto) -> Self {
        Self {
            hold,
        }
    }
}

#[async_trait]
impl Command<CancelHoldCommandRequest, CancelHoldCommandResponse> for CancelHoldCommand {
    async fn execute(&self, req: CancelHoldCommandRequest) -> Result<CancelHoldCommandResponse, CommandError> {
        self.hold_service.cancel(req.patron_id.as_str(), req.hold_id.as_str())
            .await.map_err(CommandError::from).map(CancelHoldCommandResponse::new)
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
    use crate::core::library::HoldStatus;
    use crate::core::repository::RepositoryStore;
    use crate::hold::command::cancel_hold_cmd::{CancelHoldCommand, CancelHoldCommandRequest};
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
        static ref CANCEL_CMD : AsyncOnce<CancelHoldCommand> = AsyncOnce::new(async {
                let svc = create_hold_service(&Configuration::new("test"), RepositoryStore::InMemory).await;
                CancelHoldCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_cancel_hold() {
        let item_cmd = ITEM_CMD.get().await.clone();
        let reserve_cmd = RESERVE_CMD.get().await.clone();
        let cancel_cmd = CANCEL_CMD.get().await.clone();

        let item = item_cmd.execute(AddItemCommandRequest::new("test item", "author", "5-7", 1, 21, 2))
            .await.expect("should add item");
        let reserved = reserve_cmd.execute(ReserveItemCommandRequest::new(
            "patron1".to_string(), item.item.item_id.to_string())).await.expect("should reserve item");
        let res = cancel_cmd.execute(CancelHoldCommandRequest::new(
            "patron1".to_string(), reserved.hold.hold_id.to_string())).await.expect("should cancel hold");
        assert_eq!(HoldStatus::Cancelled, res.hold.hold_status);
    }
}
