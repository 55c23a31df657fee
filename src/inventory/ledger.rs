use crate::borrow::repository::BorrowRepository;
use crate::core::library::LibraryResult;
use crate::hold::repository::HoldRepository;
use crate::items::dto::ItemDto;

// InventorySnapshot is recomputed on every call and never cached; the
// counts drive the borrow and promotion decisions, so staleness is not
// tolerated.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) struct InventorySnapshot {
    pub total_copies: i64,
    pub active_borrows: i64,
    pub ready_holds: i64,
    pub pending_holds: i64,
    pub available_copies: i64,
}

// InventoryLedger derives per-item copy arithmetic from the borrow and
// hold records. A Ready hold earmarks a copy, so it subtracts from the
// available count the same way an outstanding borrow does.
pub(crate) struct InventoryLedger {
    borrow_repository: Box<dyn BorrowRepository>,
    hold_repository: Box<dyn HoldRepository>,
}

impl InventoryLedger {
    pub(crate) fn new(borrow_repository: Box<dyn BorrowRepository>,
                      hold_repository: Box<dyn HoldRepository>) -> Self {
        Self {
            borrow_repository,
            hold_repository,
        }
    }

    pub async fn pending_holds(&self, item_id: &str) -> LibraryResult<i64> {
        let pending = self.hold_repository.find_pending_by_item(item_id).await?;
        Ok(pending.len() as i64)
    }

    pub async fn available_copies(&self, item: &ItemDto) -> LibraryResult<i64> {
        let active = self.borrow_repository.count_outstanding_by_item(item.item_id.as_str()).await?;
        let ready = self.hold_repository.count_ready_by_item(item.item_id.as_str()).await?;
        Ok(item.total_copies - active - ready)
    }

    pub async fn snapshot(&self, item: &ItemDto) -> LibraryResult<InventorySnapshot> {
        let active = self.borrow_repository.count_outstanding_by_item(item.item_id.as_str()).await?;
        let ready = self.hold_repository.count_ready_by_item(item.item_id.as_str()).await?;
        let pending = self.pending_holds(item.item_id.as_str()).await?;
        Ok(InventorySnapshot {
            total_copies: item.total_copies,
            active_borrows: active,
            ready_holds: ready,
            pending_holds: pending,
            available_copies: item.total_copies - active - ready,
        })
    }
}
