use async_trait::async_trait;
use crate::availability::dto::AvailabilityDto;
use crate::core::library::LibraryResult;

pub mod service;

// Read-only view over the ledger and the patron's own records. Queries do
// not take the item lock; the authoritative decision happens inside the
// locked section at borrow/reserve time.
#[async_trait]
pub(crate) trait AvailabilityService: Sync + Send {
    async fn availability(&self, item_id: &str, patron_id: Option<&str>) -> LibraryResult<AvailabilityDto>;
}
