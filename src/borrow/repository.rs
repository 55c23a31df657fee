pub mod mem_borrow_repository;

use async_trait::async_trait;
use crate::borrow::domain::model::BorrowEntity;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BorrowRepository : Repository<BorrowEntity> {
    // the patron's live borrow for an item, Active or Overdue
    async fn find_outstanding_by_patron_item(&self, patron_id: &str,
                                             item_id: &str) -> LibraryResult<Option<BorrowEntity>>;

    // how many copies of an item are currently out
    async fn count_outstanding_by_item(&self, item_id: &str) -> LibraryResult<i64>;

    async fn find_outstanding_by_patron(&self, patron_id: &str,
                                        page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BorrowEntity>>;

    // Active records already past their due date
    async fn query_overdue(&self, page: Option<&str>,
                           page_size: usize) -> LibraryResult<PaginatedResult<BorrowEntity>>;
}
