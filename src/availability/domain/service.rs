use async_trait::async_trait;

use crate::availability::domain::AvailabilityService;
use crate::availability::dto::AvailabilityDto;
use crate::borrow::repository::BorrowRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{AvailabilityStatus, HoldStatus, LibraryResult};
use crate::hold::repository::HoldRepository;
use crate::inventory::ledger::InventoryLedger;

pub(crate) struct AvailabilityServiceImpl {
    catalog_service: Box<dyn CatalogService>,
    borrow_repository: Box<dyn BorrowRepository>,
    hold_repository: Box<dyn HoldRepository>,
    ledger: InventoryLedger,
}

impl AvailabilityServiceImpl {
    pub(crate) fn new(_config: &Configuration, catalog_service: Box<dyn CatalogService>,
                      borrow_repository: Box<dyn BorrowRepository>,
                      hold_repository: Box<dyn HoldRepository>,
                      ledger: InventoryLedger) -> Self {
        Self {
            catalog_service,
            borrow_repository,
            hold_repository,
            ledger,
        }
    }
}

// simple round-robin estimate: holds are served roughly in proportion to
// the number of copies
fn estimated_wait_days(pending_holds: i64, loan_period_days: i64, total_copies: i64) -> i64 {
    (pending_holds * loan_period_days + total_copies - 1) / total_copies
}

#[async_trait]
impl AvailabilityService for AvailabilityServiceImpl {
    async fn availability(&self, item_id: &str, patron_id: Option<&str>) -> LibraryResult<AvailabilityDto> {
        let item = self.catalog_service.find_item_by_id(item_id).await?;
        let snapshot = self.ledger.snapshot(&item).await?;
        let mut dto = AvailabilityDto {
            item_id: item.item_id.to_string(),
            status: AvailabilityStatus::Unavailable,
            total_copies: snapshot.total_copies,
            available_copies: snapshot.available_copies,
            pending_holds: snapshot.pending_holds,
            queue_position: None,
            due_at: None,
            expires_at: None,
            estimated_wait_days: None,
        };
        if let Some(patron_id) = patron_id {
            if let Some(borrow) = self.borrow_repository
                .find_outstanding_by_patron_item(patron_id, item_id).await? {
                dto.status = AvailabilityStatus::BorrowedByYou;
                dto.due_at = Some(borrow.due_at);
                return Ok(dto);
            }
            if let Some(hold) = self.hold_repository
                .find_open_by_patron_item(patron_id, item_id).await? {
                if hold.hold_status == HoldStatus::Ready {
                    dto.status = AvailabilityStatus::OnHoldForYou;
                    dto.expires_at = hold.expires_at;
                } else {
                    // rank among Pending holds; stored positions may have
                    // gaps from cancellations
                    let pending = self.hold_repository.find_pending_by_item(item_id).await?;
                    let rank = pending.iter().filter(|h| h.position <= hold.position).count() as i64;
                    dto.status = AvailabilityStatus::Waiting;
                    dto.queue_position = Some(rank);
                }
                return Ok(dto);
            }
        }
        if snapshot.available_copies > 0 {
            dto.status = AvailabilityStatus::Available;
        } else if snapshot.pending_holds > 0 {
            dto.status = AvailabilityStatus::WaitListed;
            dto.estimated_wait_days = Some(estimated_wait_days(
                snapshot.pending_holds, item.loan_period_days, item.total_copies));
        } else {
            dto.status = AvailabilityStatus::Unavailable;
        }
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;

    use crate::availability::domain::AvailabilityService;
    use crate::availability::domain::service::estimated_wait_days;
    use crate::availability::factory;
    use crate::borrow::domain::BorrowService;
    use crate::borrow::factory::create_borrow_service;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::core::domain::Configuration;
    use crate::core::library::AvailabilityStatus;
    use crate::core::repository::RepositoryStore;
    use crate::hold::domain::HoldService;
    use crate::hold::factory::create_hold_service;
    use crate::items::dto::ItemDto;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn AvailabilityService>> = AsyncOnce::new(async {
                factory::create_availability_service(&Configuration::new("test"), RepositoryStore::InMemory).await
            });
        static ref BORROW_SVC: AsyncOnce<Box<dyn BorrowService>> = AsyncOnce::new(async {
                create_borrow_service(&Configuration::new("test"), RepositoryStore::InMemory).await
            });
        static ref HOLD_SVC: AsyncOnce<Box<dyn HoldService>> = AsyncOnce::new(async {
                create_hold_service(&Configuration::new("test"), RepositoryStore::InMemory).await
            });
        static ref CATALOG_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory).await
            });
    }

    async fn add_item(total_copies: i64, loan_period_days: i64) -> ItemDto {
        let item = ItemDto::new("title", "author", "5-7", total_copies, loan_period_days, 2);
        CATALOG_SVC.get().await.add_item(&item).await.expect("should add item")
    }

    #[tokio::test]
    async fn test_should_compute_estimated_wait_days() {
        assert_eq!(21, estimated_wait_days(1, 21, 1));
        assert_eq!(32, estimated_wait_days(3, 21, 2));
        assert_eq!(7, estimated_wait_days(2, 14, 4));
    }

    #[tokio::test]
    async fn test_should_report_available() {
        let availability_svc = SUT_SVC.get().await.clone();
        let item = add_item(2, 21).await;

        let res = availability_svc.availability(item.item_id.as_str(), None)
            .await.expect("should compute availability");
        assert_eq!(AvailabilityStatus::Available, res.status);
        assert_eq!(2, res.available_copies);
        assert_eq!(0, res.pending_holds);
    }

    #[tokio::test]
    async fn test_should_report_missing_item() {
        let availability_svc = SUT_SVC.get().await.clone();
        let res = availability_svc.availability("no-such-item", None).await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn test_should_report_borrowed_and_wait_listed() {
        let availability_svc = SUT_SVC.get().await.clone();
        let borrow_svc = BORROW_SVC.get().await.clone();
        let hold_svc = HOLD_SVC.get().await.clone();
        let item = add_item(1, 21).await;

        let _ = borrow_svc.borrow("patron-a", item.item_id.as_str()).await.expect("should borrow");
        let borrowed = availability_svc.availability(item.item_id.as_str(), Some("patron-a"))
            .await.expect("should compute availability");
        assert_eq!(AvailabilityStatus::BorrowedByYou, borrowed.status);
        assert!(borrowed.due_at.is_some());

        let _ = hold_svc.reserve("patron-b", item.item_id.as_str()).await.expect("should reserve");
        let waiting = availability_svc.availability(item.item_id.as_str(), Some("patron-b"))
            .await.expect("should compute availability");
        assert_eq!(AvailabilityStatus::Waiting, waiting.status);
        assert_eq!(Some(1), waiting.queue_position);

        let anonymous = availability_svc.availability(item.item_id.as_str(), None)
            .await.expect("should compute availability");
        assert_eq!(AvailabilityStatus::WaitListed, anonymous.status);
        assert_eq!(Some(21), anonymous.estimated_wait_days);
    }

    #[tokio::test]
    async fn test_should_report_earmarked_copy() {
        let availability_svc = SUT_SVC.get().await.clone();
        let borrow_svc = BORROW_SVC.get().await.clone();
        let hold_svc = HOLD_SVC.get().await.clone();
        let item = add_item(1, 21).await;

        let borrow = borrow_svc.borrow("patron-a", item.item_id.as_str()).await.expect("should borrow");
        let _ = hold_svc.reserve("patron-b", item.item_id.as_str()).await.expect("should reserve");
        let _ = borrow_svc.return_item("patron-a", borrow.borrow_id.as_str())
            .await.expect("should return");

        let on_hold = availability_svc.availability(item.item_id.as_str(), Some("patron-b"))
            .await.expect("should compute availability");
        assert_eq!(AvailabilityStatus::OnHoldForYou, on_hold.status);
        assert!(on_hold.expires_at.is_some());

        // the earmarked copy is not generally available, and with nobody
        // left in the queue the anonymous view is Unavailable
        let anonymous = availability_svc.availability(item.item_id.as_str(), None)
            .await.expect("should compute availability");
        assert_eq!(AvailabilityStatus::Unavailable, anonymous.status);
        assert_eq!(0, anonymous.available_copies);
    }
}
