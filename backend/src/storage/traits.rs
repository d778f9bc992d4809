//! # Storage Traits
//!
//! This module defines the storage abstraction that lets the domain layer work
//! with either the SQLite store or the in-memory store without knowing which
//! one it was given.

use anyhow::Result;
use async_trait::async_trait;
use shared::EventKind;

use crate::domain::models::{Event, NewEvent};

/// Trait defining the interface for event storage operations
///
/// Every operation is scoped to one event kind (one table) and one day key.
#[async_trait]
pub trait EventStorage: Send + Sync {
    /// Append an event to the given day. Returns the id the store assigned.
    async fn insert_event(&self, kind: EventKind, day: &str, event: &NewEvent) -> Result<i64>;

    /// All events of the day, ordered by time ascending (ties by id).
    /// An unknown day yields an empty list.
    async fn list_events(&self, kind: EventKind, day: &str) -> Result<Vec<Event>>;

    /// Delete the event matching both id and day.
    /// Returns true if a row was removed, false if nothing matched.
    async fn delete_event(&self, kind: EventKind, day: &str, id: i64) -> Result<bool>;
}
