use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::borrow::domain::BorrowService;
use crate::borrow::dto::BorrowDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnItemCommand {
    borrow_service: Box<dyn BorrowService>,
}

impl ReturnItemCommand {
    pub(crate) fn new(borrow_service: Box<dyn BorrowService>) -> Self {
        Self {
            borrow_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnItemCommandRequest {
    patron_id: String,
    borrow_id: String,
}

impl ReturnItemCommandRequest {
    pub fn new(patron_id: String, borrow_id: String) -> Self {
        Self {
            patron_id,
            borrow_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnItemCommandResponse {
    borrow: BorrowDto,
}

impl ReturnItemCommandResponse {
    pub fn new(borrow: BorrowDto) -> Self {
        Self {
            borrow,
        }
    }
}

#[async_trait]
impl Command<ReturnItemCommandRequest, ReturnItemCommandResponse> for ReturnItemCommand {
    async fn execute(&self, req: ReturnItemCommandRequest) -> Result<ReturnItemCommandResponse, CommandError> {
        self.borrow_service.return_item(req.patron_id.as_str(), req.borrow_id.as_str())
            .await.map_err(CommandError::from).map(ReturnItemCommandResponse::new)
    }
}
