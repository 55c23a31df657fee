pub mod service;

use async_trait::async_trait;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::items::dto::ItemDto;

// CatalogService is the engine's read path into the collection; item
// management is driven by the external catalog through add_item.
#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_item(&self, item: &ItemDto) -> LibraryResult<ItemDto>;
    async fn find_item_by_id(&self, id: &str) -> LibraryResult<ItemDto>;
    async fn find_items_by_age_group(&self, age_group: &str,
                                     page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<ItemDto>>;
    async fn list_items(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<ItemDto>>;
}
