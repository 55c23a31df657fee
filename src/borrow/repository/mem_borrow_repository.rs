use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::borrow::domain::model::BorrowEntity;
use crate::borrow::repository::BorrowRepository;
use crate::core::library::{BorrowStatus, LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::date::DATE_FMT;
use crate::utils::store::MemClient;

#[derive(Debug)]
pub(crate) struct MemBorrowRepository {
    client: MemClient,
    table_name: String,
}

impl MemBorrowRepository {
    pub(crate) fn new(client: MemClient, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }

    async fn scan_entities(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BorrowEntity>> {
        let mut records = Vec::new();
        let mut page: Option<String> = None;
        loop {
            let res = self.client.scan(self.table_name.as_str(), predicate, page.as_deref(), 500).await?;
            for row in res.records {
                records.push(serde_json::from_value(row).map_err(LibraryError::from)?);
            }
            page = res.next_page;
            if page.is_none() {
                break;
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl Repository<BorrowEntity> for MemBorrowRepository {
    async fn create(&self, entity: &BorrowEntity) -> LibraryResult<usize> {
        let val = serde_json::to_value(entity)?;
        self.client.put_new(self.table_name.as_str(), val).await
    }

    async fn update(&self, entity: &BorrowEntity) -> LibraryResult<usize> {
        let mut val = serde_json::to_value(entity)?;
        val["updated_at"] = Value::from(format!("{}", Utc::now().naive_utc().format(DATE_FMT)));
        self.client.update_versioned(self.table_name.as_str(), val).await
    }

    async fn get(&self, id: &str) -> LibraryResult<BorrowEntity> {
        let row = self.client.get_row(self.table_name.as_str(), id).await.map_err(
            |_| LibraryError::not_found(format!("borrow not found for {}", id).as_str()))?;
        serde_json::from_value(row).map_err(LibraryError::from)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.client.delete_row(self.table_name.as_str(), id).await
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BorrowEntity>> {
        let res = self.client.scan(self.table_name.as_str(), predicate, page, page_size).await?;
        let mut records = Vec::with_capacity(res.records.len());
        for row in res.records {
            records.push(serde_json::from_value(row).map_err(LibraryError::from)?);
        }
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

#[async_trait]
impl BorrowRepository for MemBorrowRepository {
    async fn find_outstanding_by_patron_item(&self, patron_id: &str,
                                             item_id: &str) -> LibraryResult<Option<BorrowEntity>> {
        let predicate = HashMap::from([
            ("patron_id".to_string(), patron_id.to_string()),
            ("item_id".to_string(), item_id.to_string()),
        ]);
        let records = self.scan_entities(&predicate).await?;
        Ok(records.into_iter().find(|b| b.borrow_status.occupies_copy()))
    }

    async fn count_outstanding_by_item(&self, item_id: &str) -> LibraryResult<i64> {
        let predicate = HashMap::from([("item_id".to_string(), item_id.to_string())]);
        let records = self.scan_entities(&predicate).await?;
        Ok(records.iter().filter(|b| b.borrow_status.occupies_copy()).count() as i64)
    }

    async fn find_outstanding_by_patron(&self, patron_id: &str,
                                        page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BorrowEntity>> {
        let predicate = HashMap::from([("patron_id".to_string(), patron_id.to_string())]);
        let res = self.query(&predicate, page, page_size).await?;
        let records = res.records.into_iter()
            .filter(|b| b.borrow_status.occupies_copy()).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }

    async fn query_overdue(&self, page: Option<&str>,
                           page_size: usize) -> LibraryResult<PaginatedResult<BorrowEntity>> {
        let now = Utc::now().naive_utc();
        let predicate = HashMap::from([
            ("borrow_status".to_string(), BorrowStatus::Active.to_string()),
        ]);
        let res = self.query(&predicate, page, page_size).await?;
        let records = res.records.into_iter()
            .filter(|b| b.due_at < now).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}
