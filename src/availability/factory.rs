use crate::availability::domain::AvailabilityService;
use crate::availability::domain::service::AvailabilityServiceImpl;
use crate::borrow::factory::create_borrow_repository;
use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::hold::factory::create_hold_repository;
use crate::inventory::ledger::InventoryLedger;

pub(crate) async fn create_availability_service(config: &Configuration, store: RepositoryStore) -> Box<dyn AvailabilityService> {
    let catalog_svc = create_catalog_service(config, store).await;
    let borrow_repo = create_borrow_repository(store).await;
    let hold_repo = create_hold_repository(store).await;
    let ledger = InventoryLedger::new(
        create_borrow_repository(store).await, create_hold_repository(store).await);
    Box::new(AvailabilityServiceImpl::new(config, catalog_svc, borrow_repo, hold_repo, ledger))
}
