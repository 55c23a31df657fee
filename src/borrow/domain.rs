use async_trait::async_trait;
use crate::borrow::dto::BorrowDto;
use crate::core::library::{LibraryResult, PaginatedResult};

pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait BorrowService: Sync + Send {
    async fn borrow(&self, patron_id: &str, item_id: &str) -> LibraryResult<BorrowDto>;
    async fn renew(&self, borrow_id: &str) -> LibraryResult<BorrowDto>;
    async fn return_item(&self, patron_id: &str, borrow_id: &str) -> LibraryResult<BorrowDto>;
    async fn list_active_borrows(&self, patron_id: &str,
                                 page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BorrowDto>>;
    // periodic sweep reclassifying past-due Active records; returns how
    // many records were marked
    async fn mark_overdue(&self) -> LibraryResult<usize>;
}
