use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::BorrowStatus;
use crate::items::domain::Item;
use crate::utils::date::serializer;

// BorrowEntity abstracts one patron's loan of one item copy. Records are
// never deleted; the status transitions instead.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BorrowEntity {
    pub borrow_id: String,
    pub version: i64,
    pub branch_id: String,
    pub item_id: String,
    pub patron_id: String,
    pub borrow_status: BorrowStatus,
    #[serde(with = "serializer")]
    pub borrowed_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    pub renewal_count: i64,
    pub returned_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BorrowEntity {
    pub fn new(item_id: &str, patron_id: &str, loan_period_days: i64) -> Self {
        Self {
            borrow_id: Uuid::new_v4().to_string(),
            version: 0,
            branch_id: Uuid::new_v4().to_string(),
            item_id: item_id.to_string(),
            patron_id: patron_id.to_string(),
            borrow_status: BorrowStatus::Active,
            borrowed_at: Utc::now().naive_utc(),
            due_at: Utc::now().naive_utc() + Duration::days(loan_period_days),
            renewal_count: 0,
            returned_at: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn from_patron_item(branch_id: &str, patron_id: &str, item: &dyn Item) -> Self {
        Self {
            borrow_id: Uuid::new_v4().to_string(),
            version: 0,
            branch_id: branch_id.to_string(),
            item_id: item.id(),
            patron_id: patron_id.to_string(),
            borrow_status: BorrowStatus::Active,
            borrowed_at: Utc::now().naive_utc(),
            due_at: Utc::now().naive_utc() + Duration::days(item.loan_period_days()),
            renewal_count: 0,
            returned_at: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BorrowEntity {
    fn id(&self) -> String {
        self.borrow_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
