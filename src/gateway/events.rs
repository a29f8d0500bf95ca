use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}

// RecordingPublisher keeps published events in memory so tests can inspect them
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingPublisher {
    events: std::sync::Arc<std::sync::Mutex<Vec<DomainEvent>>>,
}

#[cfg(test)]
impl RecordingPublisher {
    pub(crate) fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.lock()
            .map_err(|err| LibraryError::runtime(format!("poisoned {}", err).as_str(), None))?
            .push(event.clone());
        Ok(())
    }
}
