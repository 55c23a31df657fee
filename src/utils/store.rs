use std::cmp;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::Arc;
use lazy_static::lazy_static;
use serde_json::Value;
use tokio::sync::RwLock;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::RepositoryStore;

// A named table of JSON rows keyed by the row's primary-key field. Rows are
// kept in key order so scans paginate deterministically.
#[derive(Debug)]
struct MemTable {
    key_field: String,
    rows: BTreeMap<String, Value>,
}

#[derive(Debug, Default)]
struct MemStore {
    tables: HashMap<String, Arc<RwLock<MemTable>>>,
}

lazy_static! {
    // the process-wide registry backing RepositoryStore::InMemory; every
    // client handle built from it sees the same tables
    static ref SHARED_STORE: Arc<RwLock<MemStore>> =
        Arc::new(RwLock::new(MemStore::default()));
}

#[derive(Debug, Clone)]
pub(crate) struct MemClient {
    store: Arc<RwLock<MemStore>>,
}

pub(crate) async fn build_store_client(store: RepositoryStore) -> MemClient {
    match store {
        RepositoryStore::InMemory => MemClient { store: SHARED_STORE.clone() },
    }
}

pub(crate) async fn create_table(client: &MemClient, table_name: &str, key_field: &str) -> LibraryResult<()> {
    let mut store = client.store.write().await;
    if store.tables.contains_key(table_name) {
        return Err(LibraryError::storage(
            format!("table {} already exists", table_name).as_str(), None, false));
    }
    store.tables.insert(table_name.to_string(), Arc::new(RwLock::new(MemTable {
        key_field: key_field.to_string(),
        rows: BTreeMap::new(),
    })));
    Ok(())
}

pub(crate) async fn delete_table(client: &MemClient, table_name: &str) -> LibraryResult<()> {
    let mut store = client.store.write().await;
    if store.tables.remove(table_name).is_none() {
        return Err(LibraryError::storage(
            format!("table {} does not exist", table_name).as_str(), None, false));
    }
    Ok(())
}

impl MemClient {
    async fn table(&self, table_name: &str) -> LibraryResult<Arc<RwLock<MemTable>>> {
        let store = self.store.read().await;
        store.tables.get(table_name).cloned().ok_or_else(|| LibraryError::storage(
            format!("table {} does not exist", table_name).as_str(), None, false))
    }

    // insert a row, failing when the key is already present
    pub async fn put_new(&self, table_name: &str, row: Value) -> LibraryResult<usize> {
        let table = self.table(table_name).await?;
        let mut table = table.write().await;
        let key = row_key(&table.key_field, &row)?;
        if table.rows.contains_key(key.as_str()) {
            return Err(LibraryError::storage(
                format!("row {} already exists in {}", key, table_name).as_str(),
                Some("ConditionalCheckFailed".to_string()), false));
        }
        table.rows.insert(key, row);
        Ok(1)
    }

    // replace a row guarded by its version; the stored version must match
    // the incoming one, and the write bumps it. This is the storage-level
    // backstop against lost updates.
    pub async fn update_versioned(&self, table_name: &str, mut row: Value) -> LibraryResult<usize> {
        let table = self.table(table_name).await?;
        let mut table = table.write().await;
        let key = row_key(&table.key_field, &row)?;
        let expected = row.get("version").and_then(Value::as_i64).ok_or_else(|| {
            LibraryError::serialization(format!("row {} has no version", key).as_str())
        })?;
        let stored = match table.rows.get(key.as_str()) {
            Some(existing) => existing.get("version").and_then(Value::as_i64).unwrap_or(0),
            None => {
                return Err(LibraryError::not_found(
                    format!("row {} not found in {}", key, table_name).as_str()));
            }
        };
        if stored != expected {
            return Err(LibraryError::storage(
                format!("row {} in {} is stale: version {} != {}", key, table_name, expected, stored).as_str(),
                Some("ConditionalCheckFailed".to_string()), true));
        }
        if let Some(obj) = row.as_object_mut() {
            obj.insert("version".to_string(), Value::from(expected + 1));
        }
        table.rows.insert(key, row);
        Ok(1)
    }

    pub async fn get_row(&self, table_name: &str, key: &str) -> LibraryResult<Value> {
        let table = self.table(table_name).await?;
        let table = table.read().await;
        table.rows.get(key).cloned().ok_or_else(|| LibraryError::not_found(
            format!("row {} not found in {}", key, table_name).as_str()))
    }

    pub async fn delete_row(&self, table_name: &str, key: &str) -> LibraryResult<usize> {
        let table = self.table(table_name).await?;
        let mut table = table.write().await;
        table.rows.remove(key).map(|_| 1).ok_or_else(|| LibraryError::not_found(
            format!("row {} not found in {}", key, table_name).as_str()))
    }

    // key-ordered scan with equality predicate; the page token is the last
    // key of the previous page
    pub async fn scan(&self, table_name: &str, predicate: &HashMap<String, String>,
                      page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<Value>> {
        let limit = cmp::min(page_size, 500);
        let table = self.table(table_name).await?;
        let table = table.read().await;
        let range: Box<dyn Iterator<Item = (&String, &Value)> + '_> = match page {
            Some(last) => Box::new(table.rows.range::<String, _>((Excluded(last.to_string()), Unbounded))),
            None => Box::new(table.rows.iter()),
        };
        let mut records = Vec::new();
        let mut last_key: Option<String> = None;
        for (key, row) in range {
            if !matches_predicate(row, predicate) {
                continue;
            }
            records.push(row.clone());
            last_key = Some(key.to_string());
            if records.len() >= limit {
                break;
            }
        }
        let next_page = if records.len() >= limit { last_key } else { None };
        Ok(PaginatedResult::new(page, page_size, next_page, records))
    }
}

fn row_key(key_field: &str, row: &Value) -> LibraryResult<String> {
    row.get(key_field).and_then(Value::as_str).map(str::to_string).ok_or_else(|| {
        LibraryError::serialization(format!("row has no {} key", key_field).as_str())
    })
}

fn field_str(row: &Value, name: &str) -> Option<String> {
    match row.get(name) {
        Some(Value::String(s)) => Some(s.to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

fn matches_predicate(row: &Value, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(k, v)| field_str(row, k).as_deref() == Some(v.as_str()))
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use serde_json::json;
    use uuid::Uuid;
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;
    use crate::utils::store::{build_store_client, create_table, delete_table, MemClient};

    lazy_static! {
        static ref CLIENT: AsyncOnce<MemClient> = AsyncOnce::new(async {
                let client = build_store_client(RepositoryStore::InMemory).await;
                let _ = delete_table(&client, "scratch").await;
                let _ = create_table(&client, "scratch", "row_id").await;
                client
            });
    }

    fn test_row(id: &str, status: &str) -> serde_json::Value {
        json!({"row_id": id, "version": 0, "status": status})
    }

    #[tokio::test]
    async fn test_should_create_and_get_row() {
        let client = CLIENT.get().await.clone();
        let id = Uuid::new_v4().to_string();
        let size = client.put_new("scratch", test_row(id.as_str(), "open")).await.expect("should put");
        assert_eq!(1, size);
        let row = client.get_row("scratch", id.as_str()).await.expect("should get");
        assert_eq!(Some("open"), row.get("status").and_then(serde_json::Value::as_str));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_row() {
        let client = CLIENT.get().await.clone();
        let id = Uuid::new_v4().to_string();
        let _ = client.put_new("scratch", test_row(id.as_str(), "open")).await.expect("should put");
        let res = client.put_new("scratch", test_row(id.as_str(), "open")).await;
        assert!(matches!(res, Err(LibraryError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_should_update_versioned_row() {
        let client = CLIENT.get().await.clone();
        let id = Uuid::new_v4().to_string();
        let _ = client.put_new("scratch", test_row(id.as_str(), "open")).await.expect("should put");
        let mut row = client.get_row("scratch", id.as_str()).await.expect("should get");
        row["status"] = serde_json::Value::from("closed");
        let _ = client.update_versioned("scratch", row.clone()).await.expect("should update");
        let loaded = client.get_row("scratch", id.as_str()).await.expect("should get");
        assert_eq!(Some(1), loaded.get("version").and_then(serde_json::Value::as_i64));
        assert_eq!(Some("closed"), loaded.get("status").and_then(serde_json::Value::as_str));
        // the first snapshot is now stale
        let res = client.update_versioned("scratch", row).await;
        assert!(matches!(res, Err(LibraryError::Storage { retryable: true, .. })));
    }

    #[tokio::test]
    async fn test_should_delete_row() {
        let client = CLIENT.get().await.clone();
        let id = Uuid::new_v4().to_string();
        let _ = client.put_new("scratch", test_row(id.as_str(), "open")).await.expect("should put");
        let deleted = client.delete_row("scratch", id.as_str()).await.expect("should delete");
        assert_eq!(1, deleted);
        let res = client.get_row("scratch", id.as_str()).await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn test_should_scan_with_pages() {
        let client = CLIENT.get().await.clone();
        let marker = Uuid::new_v4().to_string();
        for _i in 0..25 {
            let id = Uuid::new_v4().to_string();
            let _ = client.put_new("scratch", serde_json::json!({
                "row_id": id, "version": 0, "status": marker,
            })).await.expect("should put");
        }
        let predicate = HashMap::from([("status".to_string(), marker.to_string())]);
        let mut next_page = None;
        let mut total = 0;
        for _i in 0..10 {
            let res = client.scan("scratch", &predicate, next_page.as_deref(), 10)
                .await.expect("should scan");
            total += res.records.len();
            next_page = res.next_page;
            if next_page.is_none() {
                break;
            }
        }
        assert_eq!(25, total);
    }
}
