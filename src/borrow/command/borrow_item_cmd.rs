use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::borrow::domain::BorrowService;
use crate::borrow::dto::BorrowDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct BorrowItemCommand {
    borrow_service: Box<dyn BorrowService>,
}

impl BorrowItemCommand {
    pub(crate) fn new(borrow_service: Box<dyn BorrowService>) -> Self {
        Self {
            borrow_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BorrowItemCommandRequest {
    patron_id: String,
    item_id: String,
}

impl BorrowItemCommandRequest {
    pub fn new(patron_id: String, item_id: String) -> Self {
        Self {
            patron_id,
            item_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct BorrowItemCommandResponse {
    pub(crate) borrow: BorrowDto,
}

impl BorrowItemCommandResponse {
    pub fn new(borrow: BorrowDto) -> Self {
        Self {
            borrow,
        }
    }
}

#[async_trait]
impl Command<BorrowItemCommandRequest, BorrowItemCommandResponse> for BorrowItemCommand {
    async fn execute(&self, req: BorrowItemCommandRequest) -> Result<BorrowItemCommandResponse, CommandError> {
        self.borrow_service.borrow(req.patron_id.as_str(), req.item_id.as_str())
            .await.map_err(CommandError::from).map(BorrowItemCommandResponse::new)
    }
}
