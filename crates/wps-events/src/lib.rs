//! # Work Package Events
//!
//! The dataset-change event adapter (component F): maps the upstream wire
//! shape to [`wps_core::Dataset`] and applies it idempotently to a
//! [`wps_store::DatasetStore`]. The bus wire client (consumer group,
//! offsets, dead-lettering) is an external collaborator behind the
//! [`EventSubscriber`] trait.

mod error;
mod payload;
mod subscriber;

pub use error::EventError;
pub use payload::{DatasetDeletionPayload, DatasetUpsertionPayload};
pub use subscriber::{drive, DatasetEventHandler, EventSubscriber, RawEvent};
