use crate::borrow::factory::create_borrow_repository;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::hold::domain::HoldService;
use crate::hold::domain::service::HoldServiceImpl;
use crate::hold::repository::HoldRepository;
use crate::hold::repository::mem_hold_repository::MemHoldRepository;
use crate::inventory::ledger::InventoryLedger;
use crate::utils::store::{build_store_client, create_table};

pub(crate) async fn create_hold_repository(store: RepositoryStore) -> Box<dyn HoldRepository> {
    match store {
        RepositoryStore::InMemory => {
            let client = build_store_client(store).await;
            let _ = create_table(&client, "holds", "hold_id").await;
            Box::new(MemHoldRepository::new(client, "holds"))
        }
    }
}

pub(crate) async fn create_hold_service(config: &Configuration, store: RepositoryStore) -> Box<dyn HoldService> {
    let hold_repository = create_hold_repository(store).await;
    let catalog_svc = create_catalog_service(config, store).await;
    let ledger = InventoryLedger::new(
        create_borrow_repository(store).await, create_hold_repository(store).await);
    let publisher = create_publisher(store.gateway_publisher()).await;
    Box::new(HoldServiceImpl::new(config, hold_repository, catalog_svc, ledger, publisher))
}
