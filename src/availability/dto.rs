use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::library::AvailabilityStatus;

// AvailabilityDto is the externally visible circulation status of one item,
// optionally personalized for a patron.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct AvailabilityDto {
    pub item_id: String,
    pub status: AvailabilityStatus,
    pub total_copies: i64,
    pub available_copies: i64,
    pub pending_holds: i64,
    // 1-based rank among Pending holds when status is Waiting
    pub queue_position: Option<i64>,
    pub due_at: Option<NaiveDateTime>,
    pub expires_at: Option<NaiveDateTime>,
    // round-robin approximation, not a guarantee
    pub estimated_wait_days: Option<i64>,
}
