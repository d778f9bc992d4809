//! In-memory event store.
//!
//! Nothing survives a restart. The log lives behind a lock owned by the store,
//! so concurrent requests never touch it unguarded.

use anyhow::Result;
use async_trait::async_trait;
use shared::EventKind;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::models::{Event, NewEvent};
use crate::storage::traits::EventStorage;

#[derive(Default)]
struct KindLog {
    next_id: i64,
    events: Vec<Event>,
}

#[derive(Default)]
pub struct MemoryEventRepository {
    logs: RwLock<HashMap<EventKind, KindLog>>,
}

impl MemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStorage for MemoryEventRepository {
    async fn insert_event(&self, kind: EventKind, day: &str, event: &NewEvent) -> Result<i64> {
        let mut logs = self.logs.write().await;
        let log = logs.entry(kind).or_default();
        log.next_id += 1;
        let id = log.next_id;
        log.events.push(event.clone().into_event(id, day));
        Ok(id)
    }

    async fn list_events(&self, kind: EventKind, day: &str) -> Result<Vec<Event>> {
        let logs = self.logs.read().await;
        let mut events: Vec<Event> = logs
            .get(&kind)
            .map(|log| log.events.iter().filter(|e| e.day == day).cloned().collect())
            .unwrap_or_default();
        events.sort_by(|a, b| a.time.cmp(&b.time).then(a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn delete_event(&self, kind: EventKind, day: &str, id: i64) -> Result<bool> {
        let mut logs = self.logs.write().await;
        let Some(log) = logs.get_mut(&kind) else {
            return Ok(false);
        };
        match log.events.iter().position(|e| e.id == id && e.day == day) {
            Some(index) => {
                log.events.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
