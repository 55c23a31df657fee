use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::HoldStatus;
use crate::items::domain::Item;
use crate::utils::date::serializer;

// HoldEntity abstracts one patron's place in an item's wait list. The
// position is an insertion-order tie-break: lower positions are served
// first and gaps left by cancellations are harmless.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct HoldEntity {
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

impl HoldEntity {
    pub fn new(item_id: &str, patron_id: &str, position: i64) -> Self {
        Self {
            hold_id: Uuid::new_v4().to_string(),
            version: 0,
            branch_id: Uuid::new_v4().to_string(),
            item_id: item_id.to_string(),
            patron_id: patron_id.to_string(),
            position,
            hold_status: HoldStatus::Pending,
            created_at: Utc::now().naive_utc(),
            notified_at: None,
            expires_at: None,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn from_patron_item(branch_id: &str, patron_id: &str, item: &dyn Item, position: i64) -> Self {
        Self {
            hold_id: Uuid::new_v4().to_string(),
            version: 0,
            branch_id: branch_id.to_string(),
            item_id: item.id(),
            patron_id: patron_id.to_string(),
            position,
            hold_status: HoldStatus::Pending,
            created_at: Utc::now().naive_utc(),
            notified_at: None,
            expires_at: None,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for HoldEntity {
    fn id(&self) -> String {
        self.hold_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}


#[cfg(test)]
mod tests {
    use crate::core::library::HoldStatus;
    use crate::hold::domain::model::HoldEntity;

    #[tokio::test]
    async fn test_should_build_hold() {
        let hold = HoldEntity::new("item1", "patron1", 1);
        assert_eq!("item1", hold.item_id.as_str());
        assert_eq!("patron1", hold.patron_id.as_str());
        assert_eq!(1, hold.position);
        assert_eq!(HoldStatus::Pending, hold.hold_status);
        assert!(hold.notified_at.is_none());
        assert!(hold.expires_at.is_none());
    }
}
