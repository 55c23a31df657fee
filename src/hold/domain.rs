use async_trait::async_trait;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::hold::dto::HoldDto;

pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait HoldService: Sync + Send {
    async fn reserve(&self, patron_id: &str, item_id: &str) -> LibraryResult<HoldDto>;
    async fn cancel(&self, patron_id: &str, hold_id: &str) -> LibraryResult<HoldDto>;
    async fn list_open_holds(&self, patron_id: &str,
                             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<HoldDto>>;
    // the patron's Ready hold for an item, if any
    async fn find_claimable(&self, patron_id: &str, item_id: &str) -> LibraryResult<Option<HoldDto>>;
    // consumes a Ready hold as part of a borrow; the caller must hold the
    // item's exclusive section
    async fn fulfill_ready(&self, patron_id: &str, item_id: &str) -> LibraryResult<HoldDto>;
    // moves the head of the wait list to Ready while free copies remain;
    // the caller must hold the item's exclusive section
    async fn promote_next(&self, item_id: &str) -> LibraryResult<usize>;
    // periodic sweep expiring unclaimed Ready holds and promoting the next
    // waiting patron; returns how many holds expired
    async fn expire_ready(&self) -> LibraryResult<usize>;
}
