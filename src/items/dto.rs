use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::items::domain::Item;
use crate::items::domain::model::ItemEntity;
use crate::utils::date::serializer;

// ItemDto is a data transfer object for the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ItemDto {
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

impl ItemDto {
    pub fn new(title: &str, author: &str, age_group: &str,
               total_copies: i64, loan_period_days: i64, max_renewals: i64) -> ItemDto {
        ItemDto {
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

impl Identifiable for ItemDto {
    fn id(&self) -> String {
        self.item_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Item for ItemDto {
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

impl From<&ItemEntity> for ItemDto {
    fn from(other: &ItemEntity) -> ItemDto {
        ItemDto {
            item_id: other.item_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            age_group: other.age_group.to_string(),
            total_copies: other.total_copies,
            loan_period_days: other.loan_period_days,
            max_renewals: other.max_renewals,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&ItemDto> for ItemEntity {
    fn from(other: &ItemDto) -> ItemEntity {
        ItemEntity {
            item_id: other.item_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            age_group: other.age_group.to_string(),
            total_copies: other.total_copies,
            loan_period_days: other.loan_period_days,
            max_renewals: other.max_renewals,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::items::dto::ItemDto;

    #[tokio::test]
    async fn test_should_build_item_dto() {
        let item = ItemDto::new("title", "author", "8-10", 1, 14, 0);
        assert_eq!("title", item.title.as_str());
        assert_eq!(1, item.total_copies);
        assert_eq!(0, item.max_renewals);
    }
}
