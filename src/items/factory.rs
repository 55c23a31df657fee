use crate::core::repository::RepositoryStore;
use crate::items::repository::ItemRepository;
use crate::items::repository::mem_item_repository::MemItemRepository;
use crate::utils::store::{build_store_client, create_table};

pub(crate) async fn create_item_repository(store: RepositoryStore) -> Box<dyn ItemRepository> {
    match store {
        RepositoryStore::InMemory => {
            let client = build_store_client(store).await;
            let _ = create_table(&client, "items", "item_id").await;
            Box::new(MemItemRepository::new(client, "items"))
        }
    }
}
