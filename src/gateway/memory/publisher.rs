use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;
use crate::utils::store::MemClient;

// MemoryPublisher appends events to the shared events table so tests and
// the external notification dispatcher can read them back.
#[derive(Debug)]
pub struct MemoryPublisher {
    client: MemClient,
    table_name: String,
}

impl MemoryPublisher {
    pub(crate) fn new(client: MemClient, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn create_topic(&mut self, _topic: &str) -> Result<String, LibraryError> {
        Ok("".to_string())
    }

    async fn get_topics(&mut self) -> Result<Vec<String>, LibraryError> {
        Ok(vec![])
    }

    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let val = serde_json::to_value(event)?;
        self.client.put_new(self.table_name.as_str(), val).await.map(|_| ())
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::{factory, GatewayPublisherVia};

    #[tokio::test]
    async fn test_should_publish_to_memory() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("test-name", "group", "key", &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        let mut publisher = factory::create_publisher(GatewayPublisherVia::Memory).await;
        let _arn = publisher.create_topic(event.name.as_str()).await.expect("should create topic");
        let _ = publisher.publish(&event).await.expect("should publish");
        let topics = publisher.get_topics().await.expect("should get topics");
        assert_eq!(0, topics.len());
    }
}
