pub mod mem_item_repository;

use async_trait::async_trait;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::items::domain::model::ItemEntity;


#[async_trait]
pub(crate) trait ItemRepository: Repository<ItemEntity> {
    async fn find_by_age_group(&self, age_group: &str,
                               page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<ItemEntity>>;
}
