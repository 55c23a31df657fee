use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;
use lazy_static::lazy_static;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio::time::timeout;
use crate::core::library::{LibraryError, LibraryResult};

lazy_static! {
    // one mutex per item id, shared by every service instance in the process
    static ref ITEM_LOCKS: StdMutex<HashMap<String, Arc<Mutex<()>>>> =
        StdMutex::new(HashMap::new());
}

// ItemLockManager serializes the mutating operations for a single item id.
// Operations on different items proceed independently, and at most one item
// lock is ever held by a request, so no lock ordering is needed.
#[derive(Debug, Clone)]
pub(crate) struct ItemLockManager {
    wait: Duration,
}

// Guard over an item's exclusive section; dropping it releases the section.
#[derive(Debug)]
pub(crate) struct ItemGuard {
    item_id: String,
    _guard: OwnedMutexGuard<()>,
}

impl ItemGuard {
    pub fn item_id(&self) -> &str {
        self.item_id.as_str()
    }
}

impl ItemLockManager {
    pub fn new(wait_millis: u64) -> Self {
        Self { wait: Duration::from_millis(wait_millis) }
    }

    fn entry(item_id: &str) -> Arc<Mutex<()>> {
        let mut locks = match ITEM_LOCKS.lock() {
            Ok(locks) => locks,
            Err(poisoned) => poisoned.into_inner(),
        };
        locks.entry(item_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    // Waits at most the configured bound for the item's exclusive section,
    // then fails with the retryable Busy error to cap tail latency.
    pub async fn acquire(&self, item_id: &str) -> LibraryResult<ItemGuard> {
        let lock = Self::entry(item_id);
        match timeout(self.wait, lock.lock_owned()).await {
            Ok(guard) => Ok(ItemGuard { item_id: item_id.to_string(), _guard: guard }),
            Err(_) => Err(LibraryError::busy(
                format!("item {} is locked by another request", item_id).as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use crate::core::library::LibraryError;
    use crate::core::lock::ItemLockManager;

    #[tokio::test]
    async fn test_should_acquire_and_release() {
        let manager = ItemLockManager::new(100);
        let item_id = Uuid::new_v4().to_string();
        let guard = manager.acquire(item_id.as_str()).await.expect("should acquire");
        assert_eq!(item_id.as_str(), guard.item_id());
        drop(guard);
        let _again = manager.acquire(item_id.as_str()).await.expect("should acquire again");
    }

    #[tokio::test]
    async fn test_should_fail_busy_when_held() {
        let manager = ItemLockManager::new(50);
        let item_id = Uuid::new_v4().to_string();
        let _guard = manager.acquire(item_id.as_str()).await.expect("should acquire");
        let res = manager.acquire(item_id.as_str()).await;
        assert!(matches!(res, Err(LibraryError::Busy { message: _, retryable: true })));
    }

    #[tokio::test]
    async fn test_should_not_block_other_items() {
        let manager = ItemLockManager::new(50);
        let first = Uuid::new_v4().to_string();
        let second = Uuid::new_v4().to_string();
        let _first_guard = manager.acquire(first.as_str()).await.expect("should acquire first");
        let _second_guard = manager.acquire(second.as_str()).await.expect("should acquire second");
    }
}
