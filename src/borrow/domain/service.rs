use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::borrow::domain::BorrowService;
use crate::borrow::domain::model::BorrowEntity;
use crate::borrow::dto::BorrowDto;
use crate::borrow::repository::BorrowRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BorrowStatus, LibraryError, LibraryResult, PaginatedResult};
use crate::core::lock::ItemLockManager;
use crate::gateway::events::EventPublisher;
use crate::hold::domain::HoldService;
use crate::inventory::ledger::InventoryLedger;

pub(crate) struct BorrowServiceImpl {
    branch_id: String,
    borrow_repository: Box<dyn BorrowRepository>,
    catalog_service: Box<dyn CatalogService>,
    hold_service: Box<dyn HoldService>,
    ledger: InventoryLedger,
    lock_manager: ItemLockManager,
    events_publisher: Box<dyn EventPublisher>,
}

impl BorrowServiceImpl {
    pub(crate) fn new(config: &Configuration, borrow_repository: Box<dyn BorrowRepository>,
                      catalog_service: Box<dyn CatalogService>, hold_service: Box<dyn HoldService>,
                      ledger: InventoryLedger, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            borrow_repository,
            catalog_service,
            hold_service,
            ledger,
            lock_manager: ItemLockManager::new(config.lock_wait_millis),
            events_publisher,
        }
    }
}

#[async_trait]
impl BorrowService for BorrowServiceImpl {
    async fn borrow(&self, patron_id: &str, item_id: &str) -> LibraryResult<BorrowDto> {
        let item = self.catalog_service.find_item_by_id(item_id).await?;
        // the availability decision happens inside the item's exclusive
        // section, not before it
        let _guard = self.lock_manager.acquire(item.item_id.as_str()).await?;
        if let Some(existing) = self.borrow_repository.find_outstanding_by_patron_item(patron_id, item_id).await? {
            return Err(LibraryError::already_borrowed(format!(
                "patron {} already has borrow {} for item {}",
                patron_id, existing.borrow_id, item_id).as_str()));
        }
        if self.hold_service.find_claimable(patron_id, item_id).await?.is_some() {
            // a Ready hold already earmarked a copy for this patron;
            // consume it instead of taking a generally available copy
            let _ = self.hold_service.fulfill_ready(patron_id, item_id).await?;
        } else if self.ledger.available_copies(&item).await? < 1 {
            return Err(LibraryError::no_copies(format!(
                "no copies of item {} are available", item_id).as_str()));
        }
        let borrow = BorrowEntity::from_patron_item(self.branch_id.as_str(), patron_id, &item);
        self.borrow_repository.create(&borrow).await?;
        let borrow = BorrowDto::from(&borrow);
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "item_borrowed", "borrow", borrow.borrow_id.as_str(), &HashMap::new(), &borrow.clone())?).await?;
        Ok(borrow)
    }

    async fn renew(&self, borrow_id: &str) -> LibraryResult<BorrowDto> {
        let existing = self.borrow_repository.get(borrow_id).await?;
        let item = self.catalog_service.find_item_by_id(existing.item_id.as_str()).await?;
        let _guard = self.lock_manager.acquire(item.item_id.as_str()).await?;
        let mut existing = self.borrow_repository.get(borrow_id).await?;
        match existing.borrow_status {
            BorrowStatus::Returned => {
                return Err(LibraryError::already_returned(format!(
                    "borrow {} was already returned", borrow_id).as_str()));
            }
            BorrowStatus::Overdue => {
                return Err(LibraryError::validation(format!(
                    "borrow {} is overdue and must be returned", borrow_id).as_str(),
                    Some("400".to_string())));
            }
            BorrowStatus::Active => {}
        }
        if self.ledger.pending_holds(item.item_id.as_str()).await? > 0 {
            return Err(LibraryError::holds_pending(format!(
                "item {} has patrons waiting; renewal is blocked", item.item_id).as_str()));
        }
        if existing.renewal_count >= item.max_renewals {
            return Err(LibraryError::renewal_limit_reached(format!(
                "borrow {} reached its renewal limit of {}", borrow_id, item.max_renewals).as_str()));
        }
        existing.due_at = existing.due_at + Duration::days(item.loan_period_days);
        existing.renewal_count += 1;
        self.borrow_repository.update(&existing).await?;
        let borrow = BorrowDto::from(&existing);
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "borrow_renewed", "borrow", borrow.borrow_id.as_str(), &HashMap::new(), &borrow.clone())?).await?;
        Ok(borrow)
    }

    async fn return_item(&self, patron_id: &str, borrow_id: &str) -> LibraryResult<BorrowDto> {
        let existing = self.borrow_repository.get(borrow_id).await?;
        if existing.patron_id != patron_id {
            return Err(LibraryError::unauthorized(format!(
                "borrow {} does not belong to patron {}", borrow_id, patron_id).as_str()));
        }
        let _guard = self.lock_manager.acquire(existing.item_id.as_str()).await?;
        let mut existing = self.borrow_repository.get(borrow_id).await?;
        if existing.borrow_status == BorrowStatus::Returned {
            // double-return is a client bug to surface, not to mask
            return Err(LibraryError::already_returned(format!(
                "borrow {} was already returned", borrow_id).as_str()));
        }
        existing.borrow_status = BorrowStatus::Returned;
        existing.returned_at = Some(Utc::now().naive_utc());
        self.borrow_repository.update(&existing).await?;
        let borrow = BorrowDto::from(&existing);
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "item_returned", "borrow", borrow.borrow_id.as_str(), &HashMap::new(), &borrow.clone())?).await?;
        // the freed copy goes to the wait list ahead of any walk-in borrow
        let _ = self.hold_service.promote_next(existing.item_id.as_str()).await?;
        Ok(borrow)
    }

    async fn list_active_borrows(&self, patron_id: &str,
                                 page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BorrowDto>> {
        let res = self.borrow_repository.find_outstanding_by_patron(patron_id, page, page_size).await?;
        let records = res.records.iter().map(BorrowDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }

    async fn mark_overdue(&self) -> LibraryResult<usize> {
        let mut marked = 0;
        let mut page: Option<String> = None;
        loop {
            let res = self.borrow_repository.query_overdue(page.as_deref(), 100).await?;
            for rec in res.records {
                let _guard = match self.lock_manager.acquire(rec.item_id.as_str()).await {
                    Ok(guard) => guard,
                    Err(err) => {
                        warn!("skipping overdue marking for item {}: {}", rec.item_id, err);
                        continue;
                    }
                };
                let mut current = self.borrow_repository.get(rec.borrow_id.as_str()).await?;
                if current.borrow_status != BorrowStatus::Active
                    || current.due_at >= Utc::now().naive_utc() {
                    continue;
                }
                // the copy stays occupied until returned; there is no
                // forced return
                current.borrow_status = BorrowStatus::Overdue;
                self.borrow_repository.update(&current).await?;
                let borrow = BorrowDto::from(&current);
                let _ = self.events_publisher.publish(&DomainEvent::updated(
                    "borrow_overdue", "borrow", borrow.borrow_id.as_str(), &HashMap::new(), &borrow.clone())?).await?;
                marked += 1;
            }
            page = res.next_page;
            if page.is_none() {
                break;
            }
        }
        if marked > 0 {
            info!("overdue sweep marked {} records", marked);
        }
        Ok(marked)
    }
}

impl From<&BorrowEntity> for BorrowDto {
    fn from(other: &BorrowEntity) -> BorrowDto {
        BorrowDto {
            borrow_id: other.borrow_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            item_id: other.item_id.to_string(),
            patron_id: other.patron_id.to_string(),
            borrow_status: other.borrow_status,
            borrowed_at: other.borrowed_at,
            due_at: other.due_at,
            renewal_count: other.renewal_count,
            returned_at: other.returned_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BorrowDto> for BorrowEntity {
    fn from(other: &BorrowDto) -> BorrowEntity {
        BorrowEntity {
            borrow_id: other.borrow_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            item_id: other.item_id.to_string(),
            patron_id: other.patron_id.to_string(),
            borrow_status: other.borrow_status,
            borrowed_at: other.borrowed_at,
            due_at: other.due_at,
            renewal_count: other.renewal_count,
            returned_at: other.returned_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
