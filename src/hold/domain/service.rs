use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{HoldStatus, LibraryError, LibraryResult, PaginatedResult};
use crate::core::lock::ItemLockManager;
use crate::gateway::events::EventPublisher;
use crate::hold::domain::HoldService;
use crate::hold::domain::model::HoldEntity;
use crate::hold::dto::HoldDto;
use crate::hold::repository::HoldRepository;
use crate::inventory::ledger::InventoryLedger;

pub(crate) struct HoldServiceImpl {
    branch_id: String,
    hold_ready_days: i64,
    hold_repository: Box<dyn HoldRepository>,
    catalog_service: Box<dyn CatalogService>,
    ledger: InventoryLedger,
    lock_manager: ItemLockManager,
    events_publisher: Box<dyn EventPublisher>,
}

impl HoldServiceImpl {
    pub(crate) fn new(config: &Configuration, hold_repository: Box<dyn HoldRepository>,
                      catalog_service: Box<dyn CatalogService>, ledger: InventoryLedger,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            hold_ready_days: config.hold_ready_days,
            hold_repository,
            catalog_service,
            ledger,
            lock_manager: ItemLockManager::new(config.lock_wait_millis),
            events_publisher,
        }
    }
}

#[async_trait]
impl HoldService for HoldServiceImpl {
    async fn reserve(&self, patron_id: &str, item_id: &str) -> LibraryResult<HoldDto> {
        let item = self.catalog_service.find_item_by_id(item_id).await?;
        let _guard = self.lock_manager.acquire(item.item_id.as_str()).await?;
        if let Some(existing) = self.hold_repository.find_open_by_patron_item(patron_id, item_id).await? {
            return Err(LibraryError::duplicate_hold(format!(
                "patron {} already has hold {} for item {}",
                patron_id, existing.hold_id, item_id).as_str()));
        }
        let pending = self.hold_repository.find_pending_by_item(item_id).await?;
        let position = pending.last().map(|h| h.position).unwrap_or(0) + 1;
        let hold = HoldEntity::from_patron_item(self.branch_id.as_str(), patron_id, &item, position);
        self.hold_repository.create(&hold).await?;
        let hold = HoldDto::from(&hold);
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "hold_placed", "hold", hold.hold_id.as_str(), &HashMap::new(), &hold.clone())?).await?;
        Ok(hold)
    }

    async fn cancel(&self, patron_id: &str, hold_id: &str) -> LibraryResult<HoldDto> {
        let existing = self.hold_repository.get(hold_id).await?;
        if existing.patron_id != patron_id {
            return Err(LibraryError::unauthorized(format!(
                "hold {} does not belong to patron {}", hold_id, patron_id).as_str()));
        }
        let _guard = self.lock_manager.acquire(existing.item_id.as_str()).await?;
        let mut existing = self.hold_repository.get(hold_id).await?;
        if existing.hold_status != HoldStatus::Pending {
            return Err(LibraryError::validation(format!(
                "hold {} is {} and can no longer be cancelled",
                hold_id, existing.hold_status).as_str(), Some("400".to_string())));
        }
        // later positions are not renumbered; the gap is harmless because
        // the queue is served lowest-position first
        existing.hold_status = HoldStatus::Cancelled;
        self.hold_repository.update(&existing).await?;
        let hold = HoldDto::from(&existing);
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "hold_cancelled", "hold", hold.hold_id.as_str(), &HashMap::new(), &hold.clone())?).await?;
        Ok(hold)
    }

    async fn list_open_holds(&self, patron_id: &str,
                             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<HoldDto>> {
        let res = self.hold_repository.find_open_by_patron(patron_id, page, page_size).await?;
        let records = res.records.iter().map(HoldDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }

    async fn find_claimable(&self, patron_id: &str, item_id: &str) -> LibraryResult<Option<HoldDto>> {
        let res = self.hold_repository.find_ready_by_patron_item(patron_id, item_id).await?;
        Ok(res.as_ref().map(HoldDto::from))
    }

    async fn fulfill_ready(&self, patron_id: &str, item_id: &str) -> LibraryResult<HoldDto> {
        let mut existing = self.hold_repository.find_ready_by_patron_item(patron_id, item_id).await?
            .ok_or_else(|| LibraryError::not_found(format!(
                "no claimable hold for patron {} on item {}", patron_id, item_id).as_str()))?;
        existing.hold_status = HoldStatus::Fulfilled;
        self.hold_repository.update(&existing).await?;
        let hold = HoldDto::from(&existing);
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "hold_fulfilled", "hold", hold.hold_id.as_str(), &HashMap::new(), &hold.clone())?).await?;
        Ok(hold)
    }

    async fn promote_next(&self, item_id: &str) -> LibraryResult<usize> {
        let item = self.catalog_service.find_item_by_id(item_id).await?;
        let mut promoted = 0;
        loop {
            if self.ledger.available_copies(&item).await? < 1 {
                break;
            }
            let pending = self.hold_repository.find_pending_by_item(item_id).await?;
            let mut next = match pending.into_iter().next() {
                Some(next) => next,
                None => break,
            };
            let now = Utc::now().naive_utc();
            next.hold_status = HoldStatus::Ready;
            next.notified_at = Some(now);
            next.expires_at = Some(now + Duration::days(self.hold_ready_days));
            self.hold_repository.update(&next).await?;
            let hold = HoldDto::from(&next);
            info!("hold {} on item {} is ready for patron {}",
                  hold.hold_id, hold.item_id, hold.patron_id);
            // the need-to-notify signal; delivery is the dispatcher's job
            let _ = self.events_publisher.publish(&DomainEvent::updated(
                "hold_ready", "hold", hold.hold_id.as_str(),
                &HashMap::from([("patron_id".to_string(), hold.patron_id.to_string()),
                                   ("item_id".to_string(), hold.item_id.to_string())]),
                &hold.clone())?).await?;
            promoted += 1;
        }
        Ok(promoted)
    }

    async fn expire_ready(&self) -> LibraryResult<usize> {
        let mut expired = 0;
        let mut page: Option<String> = None;
        loop {
            let res = self.hold_repository.query_ready_expired(page.as_deref(), 100).await?;
            for rec in res.records {
                let _guard = match self.lock_manager.acquire(rec.item_id.as_str()).await {
                    Ok(guard) => guard,
                    Err(err) => {
                        warn!("skipping hold expiry for item {}: {}", rec.item_id, err);
                        continue;
                    }
                };
                let mut current = self.hold_repository.get(rec.hold_id.as_str()).await?;
                let now = Utc::now().naive_utc();
                if current.hold_status != HoldStatus::Ready
                    || current.expires_at.map(|at| at >= now).unwrap_or(true) {
                    continue;
                }
                current.hold_status = HoldStatus::Expired;
                self.hold_repository.update(&current).await?;
                let hold = HoldDto::from(&current);
                let _ = self.events_publisher.publish(&DomainEvent::updated(
                    "hold_expired", "hold", hold.hold_id.as_str(), &HashMap::new(), &hold.clone())?).await?;
                expired += 1;
                // the freed earmark cascades to the next waiting patron
                let _ = self.promote_next(current.item_id.as_str()).await?;
            }
            page = res.next_page;
            if page.is_none() {
                break;
            }
        }
        if expired > 0 {
            info!("hold expiry sweep expired {} holds", expired);
        }
        Ok(expired)
    }
}

impl From<&HoldEntity> for HoldDto {
    fn from(other: &HoldEntity) -> HoldDto {
        HoldDto {
            hold_id: other.hold_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            item_id: other.item_id.to_string(),
            patron_id: other.patron_id.to_string(),
            position: other.position,
            hold_status: other.hold_status,
            created_at: other.created_at,
            notified_at: other.notified_at,
            expires_at: other.expires_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&HoldDto> for HoldEntity {
    fn from(other: &HoldDto) -> HoldEntity {
        HoldEntity {
            hold_id: other.hold_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            item_id: other.item_id.to_string(),
            patron_id: other.patron_id.to_string(),
            position: other.position,
            hold_status: other.hold_status,
            created_at: other.created_at,
            notified_at: other.notified_at,
            expires_at: other.expires_at,
            updated_at: other.updated_at,
        }
    }
}
