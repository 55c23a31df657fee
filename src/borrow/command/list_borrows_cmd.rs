use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::borrow::domain::BorrowService;
use crate::borrow::dto::BorrowDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBorrowsCommand {
    borrow_service: Box<dyn BorrowService>,
}

impl ListBorrowsCommand {
    pub(crate) fn new(borrow_service: Box<dyn BorrowService>) -> Self {
        Self {
            borrow_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListBorrowsCommandRequest {
    pub(crate) patron_id: String,
    pub(crate) page: Option<String>,
    pub(crate) page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBorrowsCommandResponse {
    pub borrows: Vec<BorrowDto>,
    pub next_page: Option<String>,
}

impl ListBorrowsCommandResponse {
    pub fn new(borrows: Vec<BorrowDto>, next_page: Option<String>) -> Self {
        Self {
            borrows,
            next_page,
        }
    }
}

#[async_trait]
impl Command<ListBorrowsCommandRequest, ListBorrowsCommandResponse> for ListBorrowsCommand {
    async fn execute(&self, req: ListBorrowsCommandRequest) -> Result<ListBorrowsCommandResponse, CommandError> {
        let res = self.borrow_service.list_active_borrows(
            req.patron_id.as_str(), req.page.as_deref(), req.page_size.unwrap_or(50))
            .await.map_err(CommandError::from)?;
        Ok(ListBorrowsCommandResponse::new(res.records, res.next_page))
    }
}
