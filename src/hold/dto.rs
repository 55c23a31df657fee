use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::HoldStatus;
use crate::utils::date::serializer;

// HoldDto is a data transfer object for the hold service.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct HoldDto {
    pub hold_id: String,
    pub version: i64,
    pub branch_id: String,
    pub item_id: String,
    pub patron_id: String,
    pub position: i64,
    pub hold_status: HoldStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    pub notified_at: Option<NaiveDateTime>,
    pub expires_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl Identifiable for HoldDto {
    fn id(&self) -> String {
        self.hold_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
