//! The narrow subscriber interface and dataset-change handler (component
//! F). The bus wire client itself (Kafka consumer group, offset
//! management, dead-letter routing) is an external collaborator; this
//! crate only defines what it hands events to.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use wps_core::{validate_dataset, Dataset};
use wps_store::DatasetStore;

use crate::error::EventError;
use crate::payload::{DatasetDeletionPayload, DatasetUpsertionPayload};

/// One event read from the bus, already split into its type discriminator
/// and raw payload bytes.
#[derive(Debug, Clone)]
pub struct RawEvent {
    pub event_type: String,
    pub payload: Vec<u8>,
}

/// A source of dataset-change events. Implemented by the bus wire client;
/// a test double need only replay a fixed sequence of [`RawEvent`]s.
#[async_trait]
pub trait EventSubscriber: Send + Sync {
    /// Returns the next event, or `None` once the stream is closed.
    async fn next_event(&mut self) -> Result<Option<RawEvent>, EventError>;
}

/// Applies dataset-change events to a [`DatasetStore`], keyed by the two
/// configured event type names. Idempotent: replaying the same upsert or
/// delete event any number of times converges to the same projection.
pub struct DatasetEventHandler<S: DatasetStore> {
    store: Arc<S>,
    upsertion_type: String,
    deletion_type: String,
}

impl<S: DatasetStore> DatasetEventHandler<S> {
    pub fn new(store: Arc<S>, upsertion_type: impl Into<String>, deletion_type: impl Into<String>) -> Self {
        Self { store, upsertion_type: upsertion_type.into(), deletion_type: deletion_type.into() }
    }

    pub async fn handle(&self, event: &RawEvent) -> Result<(), EventError> {
        if event.event_type == self.upsertion_type {
            let payload: DatasetUpsertionPayload = serde_json::from_slice(&event.payload)
                .map_err(|e| EventError::MalformedPayload(e.to_string()))?;
            let dataset: Dataset = payload.into();
            validate_dataset(&dataset).map_err(|e| EventError::MalformedPayload(e.to_string()))?;
            debug!(dataset_id = %dataset.id, "applying dataset upsertion event");
            self.store.upsert(dataset).await?;
        } else if event.event_type == self.deletion_type {
            let payload: DatasetDeletionPayload = serde_json::from_slice(&event.payload)
                .map_err(|e| EventError::MalformedPayload(e.to_string()))?;
            debug!(dataset_id = %payload.accession, "applying dataset deletion event");
            self.store.delete(&payload.accession).await?;
        } else {
            warn!(event_type = %event.event_type, "ignoring event of unconfigured type");
        }
        Ok(())
    }
}

/// Drains `subscriber` until it closes, applying each event through
/// `handler`. A handler error is logged and propagated to the caller,
/// which per configuration decides whether to retry or dead-letter; within
/// this core there is no implicit swallow.
pub async fn drive<S: DatasetStore>(
    mut subscriber: impl EventSubscriber,
    handler: &DatasetEventHandler<S>,
) -> Result<(), EventError> {
    while let Some(event) = subscriber.next_event().await? {
        handler.handle(&event).await?;
    }
    Ok(())
}
