use std::collections::HashMap;
use async_trait::async_trait;
use tracing::log::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogsPublisher writes events to the structured log; the external
// notification dispatcher tails them from there.
#[derive(Debug, Default)]
pub struct LogsPublisher {
    topics: HashMap<String, String>,
}

impl LogsPublisher {
    pub(crate) fn new() -> Self {
        Self {
            topics: HashMap::new(),
        }
    }
}

#[async_trait]
impl EventPublisher for LogsPublisher {
    async fn create_topic(&mut self, topic: &str) -> Result<String, LibraryError> {
        self.topics.insert(topic.to_string(), topic.to_string());
        info!("Created topic: {}", topic);
        Ok(topic.to_string())
    }

    async fn get_topics(&mut self) -> Result<Vec<String>, LibraryError> {
        Ok(self.topics.keys().map(|k| k.to_string()).collect())
    }

    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!("{}", json);
        Ok(())
    }
}
