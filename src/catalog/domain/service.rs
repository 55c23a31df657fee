use std::collections::HashMap;
use async_trait::async_trait;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::gateway::events::EventPublisher;
use crate::items::domain::model::ItemEntity;
use crate::items::dto::ItemDto;
use crate::items::repository::ItemRepository;

pub(crate) struct CatalogServiceImpl {
    item_repository: Box<dyn ItemRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, item_repository: Box<dyn ItemRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            item_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_item(&self, item: &ItemDto) -> LibraryResult<ItemDto> {
        if item.total_copies < 1 {
            return Err(LibraryError::validation(format!("item {} needs at least one copy",
                                                        item.item_id).as_str(), Some("400".to_string())));
        }
        if item.loan_period_days < 1 {
            return Err(LibraryError::validation(format!("item {} needs a loan period of at least one day",
                                                        item.item_id).as_str(), Some("400".to_string())));
        }
        if item.max_renewals < 0 {
            return Err(LibraryError::validation(format!("item {} cannot have a negative renewal limit",
                                                        item.item_id).as_str(), Some("400".to_string())));
        }
        let _ = self.item_repository.create(&ItemEntity::from(item)).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "items", "items", item.item_id.as_str(), &HashMap::new(), item)?).await?;
        Ok(item.clone())
    }

    async fn find_item_by_id(&self, id: &str) -> LibraryResult<ItemDto> {
        self.item_repository.get(id).await.map(|i| ItemDto::from(&i))
    }

    async fn find_items_by_age_group(&self, age_group: &str,
                                     page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<ItemDto>> {
        let res = self.item_repository.find_by_age_group(age_group, page, page_size).await?;
        let records = res.records.iter().map(ItemDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }

    async fn list_items(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<ItemDto>> {
        let res = self.item_repository.query(&HashMap::new(), page, page_size).await?;
        let records = res.records.iter().map(ItemDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}
