use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::borrow::domain::BorrowService;
use crate::borrow::dto::BorrowDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct RenewBorrowCommand {
    borrow_service: Box<dyn BorrowService>,
}

impl RenewBorrowCommand {
    pub(crate) fn new(borrow_service: Box<dyn BorrowService>) -> Self {
        Self {
            borrow_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RenewBorrowCommandRequest {
    borrow_id: String,
}

impl RenewBorrowCommandRequest {
    pub fn new(borrow_id: String) -> Self {
        Self {
            borrow_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RenewBorrowCommandResponse {
    borrow: BorrowDto,
}

impl RenewBorrowCommandResponse {
    pub fn new(borrow: BorrowDto) -> Self {
        Self {
            borrow,
        }
    }
}

#[async_trait]
impl Command<RenewBorrowCommandRequest, RenewBorrowCommandResponse> for RenewBorrowCommand {
    async fn execute(&self, req: RenewBorrowCommandRequest) -> Result<RenewBorrowCommandResponse, CommandError> {
        self.borrow_service.renew(req.borrow_id.as_str())
            .await.map_err(CommandError::from).map(RenewBorrowCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::borrow::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest};
    use crate::borrow::command::renew_borrow_cmd::{RenewBorrowCommand, RenewBorrowCommandRequest};
    use crate::borrow::factory::create_borrow_service;
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref ITEM_CMD : AsyncOnce<AddItemCommand> = AsyncOnce::new(async {
                let svc = create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory).await;
                AddItemCommand::new(svc)
            });
        static ref BORROW_CMD : AsyncOnce<BorrowItemCommand> = AsyncOnce::new(async {
                let svc = create_borrow_service(&Configuration::new("test"), RepositoryStore::InMemory).await;
                BorrowItemCommand::new(svc)
            });
        static ref RENEW_CMD : AsyncOnce<RenewBorrowCommand> = AsyncOnce::new(async {
                let svc = create_borrow_service(&Configuration::new("test"), RepositoryStore::InMemory).await;
                RenewBorrowCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_renew_borrow() {
        let item_cmd = ITEM_CMD.get().await.clone();
        let borrow_cmd = BORROW_CMD.get().await.clone();
        let renew_cmd = RENEW_CMD.get().await.clone();

        let item = item_cmd.execute(AddItemCommandRequest::new("test item", "author", "5-7", 1, 21, 2))
            .await.expect("should add item");
        let borrowed = borrow_cmd.execute(BorrowItemCommandRequest::new(
            "patron1".to_string(), item.item.item_id.to_string())).await.expect("should borrow item");
        let res = renew_cmd.execute(RenewBorrowCommandRequest::new(
            borrowed.borrow.borrow_id.to_string())).await.expect("should renew borrow");
        assert_eq!(1, res.borrow.renewal_count);
    }
}
