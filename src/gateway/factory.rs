use crate::core::repository::RepositoryStore;
use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogsPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;
use crate::utils::store::{build_store_client, create_table};

pub(crate) async fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Memory => {
            let client = build_store_client(RepositoryStore::InMemory).await;
            let _ = create_table(&client, "events", "event_id").await;
            Box::new(MemoryPublisher::new(client, "events"))
        }
        GatewayPublisherVia::Logs => {
            Box::new(LogsPublisher::new())
        }
    }
}
