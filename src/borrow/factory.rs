use crate::borrow::domain::BorrowService;
use crate::borrow::domain::service::BorrowServiceImpl;
use crate::borrow::repository::BorrowRepository;
use crate::borrow::repository::mem_borrow_repository::MemBorrowRepository;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::hold::factory::{create_hold_repository, create_hold_service};
use crate::inventory::ledger::InventoryLedger;
use crate::utils::store::{build_store_client, create_table};

pub(crate) async fn create_borrow_repository(store: RepositoryStore) -> Box<dyn BorrowRepository> {
    match store {
        RepositoryStore::InMemory => {
            let client = build_store_client(store).await;
            let _ = create_table(&client, "borrows", "borrow_id").await;
            Box::new(MemBorrowRepository::new(client, "borrows"))
        }
    }
}

pub(crate) async fn create_borrow_service(config: &Configuration, store: RepositoryStore) -> Box<dyn BorrowService> {
    let borrow_repository = create_borrow_repository(store).await;
    let catalog_svc = create_catalog_service(config, store).await;
    let hold_svc = create_hold_service(config, store).await;
    let ledger = InventoryLedger::new(
        create_borrow_repository(store).await, create_hold_repository(store).await);
    let publisher = create_publisher(store.gateway_publisher()).await;
    Box::new(BorrowServiceImpl::new(config, borrow_repository, catalog_svc, hold_svc, ledger, publisher))
}
