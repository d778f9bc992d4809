//! # Storage Module
//!
//! Handles persistence of logged events.
//!
//! The domain layer only sees the [`EventStorage`] trait. Two implementations
//! exist:
//!
//! - **SQLite** ([`EventRepository`] over [`DbConnection`]): one table per event
//!   kind, rows identified by SQLite's implicit `ROWID`
//! - **Memory** ([`MemoryEventRepository`]): a lock-guarded log for development
//!   and tests, lost on restart
//!
//! Which one the server uses is decided by configuration at startup.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod traits;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::config::{AppConfig, StorageBackend};

pub use connection::DbConnection;
pub use memory::MemoryEventRepository;
pub use repositories::EventRepository;
pub use traits::EventStorage;

/// Open the event store selected by the configuration
pub async fn open_event_storage(config: &AppConfig) -> Result<Arc<dyn EventStorage>> {
    match config.storage_backend {
        StorageBackend::Sqlite => {
            info!("Using SQLite event store");
            let db = DbConnection::new(&config.database_url).await?;
            Ok(Arc::new(EventRepository::new(db)))
        }
        StorageBackend::Memory => {
            info!("Using in-memory event store");
            Ok(Arc::new(MemoryEventRepository::new()))
        }
    }
}
