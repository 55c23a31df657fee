pub mod mem_hold_repository;

use async_trait::async_trait;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::hold::domain::model::HoldEntity;


#[async_trait]
pub(crate) trait HoldRepository : Repository<HoldEntity> {
    // an item's wait list in serving order (ascending position)
    async fn find_pending_by_item(&self, item_id: &str) -> LibraryResult<Vec<HoldEntity>>;

    // how many copies of an item are earmarked for Ready holds
    async fn count_ready_by_item(&self, item_id: &str) -> LibraryResult<i64>;

    // the patron's live hold for an item, Pending or Ready
    async fn find_open_by_patron_item(&self, patron_id: &str,
                                      item_id: &str) -> LibraryResult<Option<HoldEntity>>;

    async fn find_ready_by_patron_item(&self, patron_id: &str,
                                       item_id: &str) -> LibraryResult<Option<HoldEntity>>;

    async fn find_open_by_patron(&self, patron_id: &str,
                                 page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<HoldEntity>>;

    // Ready holds whose claim window has lapsed
    async fn query_ready_expired(&self, page: Option<&str>,
                                 page_size: usize) -> LibraryResult<PaginatedResult<HoldEntity>>;
}
