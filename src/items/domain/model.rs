use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::items::domain::Item;
use crate::utils::date::serializer;

// ItemEntity abstracts a lendable title in the collection; total_copies
// counts the physical or digital copies the branch owns.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct ItemEntity {
    pub item_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub age_group: String,
    pub total_copies: i64,
    pub loan_period_days: i64,
    pub max_renewals: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl ItemEntity {
    pub fn new(title: &str, author: &str, age_group: &str,
               total_copies: i64, loan_period_days: i64, max_renewals: i64) -> Self {
        Self {
            item_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            age_group: age_group.to_string(),
            total_copies,
            loan_period_days,
            max_renewals,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for ItemEntity {
    fn id(&self) -> String {
        self.item_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Item for ItemEntity {
    fn total_copies(&self) -> i64 {
        self.total_copies
    }

    fn loan_period_days(&self) -> i64 {
        self.loan_period_days
    }

    fn max_renewals(&self) -> i64 {
        self.max_renewals
    }
}

#[cfg(test)]
mod tests {
    use crate::items::domain::model::ItemEntity;

    #[tokio::test]
    async fn test_should_build_item() {
        let item = ItemEntity::new("title", "author", "5-7", 3, 21, 2);
        assert_eq!("title", item.title.as_str());
        assert_eq!("author", item.author.as_str());
        assert_eq!(3, item.total_copies);
        assert_eq!(21, item.loan_period_days);
        assert_eq!(2, item.max_renewals);
    }
}
