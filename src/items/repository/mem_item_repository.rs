use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::items::domain::model::ItemEntity;
use crate::items::repository::ItemRepository;
use crate::utils::date::DATE_FMT;
use crate::utils::store::MemClient;

#[derive(Debug)]
pub(crate) struct MemItemRepository {
    client: MemClient,
    table_name: String,
}

impl MemItemRepository {
    pub(crate) fn new(client: MemClient, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<ItemEntity> for MemItemRepository {
    async fn create(&self, entity: &ItemEntity) -> LibraryResult<usize> {
        let val = serde_json::to_value(entity)?;
        self.client.put_new(self.table_name.as_str(), val).await
    }

    async fn update(&self, entity: &ItemEntity) -> LibraryResult<usize> {
        let mut val = serde_json::to_value(entity)?;
        val["updated_at"] = Value::from(format!("{}", Utc::now().naive_utc().format(DATE_FMT)));
        self.client.update_versioned(self.table_name.as_str(), val).await
    }

    async fn get(&self, id: &str) -> LibraryResult<ItemEntity> {
        let row = self.client.get_row(self.table_name.as_str(), id).await.map_err(
            |_| LibraryError::not_found(format!("item not found for {}", id).as_str()))?;
        serde_json::from_value(row).map_err(LibraryError::from)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.client.delete_row(self.table_name.as_str(), id).await
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<ItemEntity>> {
        let res = self.client.scan(self.table_name.as_str(), predicate, page, page_size).await?;
        let mut records = Vec::with_capacity(res.records.len());
        for row in res.records {
            records.push(serde_json::from_value(row).map_err(LibraryError::from)?);
        }
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

#[async_trait]
impl ItemRepository for MemItemRepository {
    async fn find_by_age_group(&self, age_group: &str,
                               page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<ItemEntity>> {
        let predicate = HashMap::from([("age_group".to_string(), age_group.to_string())]);
        self.query(&predicate, page, page_size).await
    }
}
