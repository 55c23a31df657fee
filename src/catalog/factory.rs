use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::items::factory;

pub(crate) async fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> Box<dyn CatalogService> {
    let item_repo = factory::create_item_repository(store).await;
    let publisher = create_publisher(store.gateway_publisher()).await;
    Box::new(CatalogServiceImpl::new(config, item_repo, publisher))
}
