//! # Liquid Log Backend
//!
//! Server side of the liquid intake/output tracker. The browser page is plain
//! HTML driven by htmx; every response here is either a full page, an HTML
//! fragment or an empty body with an `HX-Trigger` header.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (axum handlers, HTML renderer)
//!     ↓
//! Domain Layer (date handling, validation, day aggregation)
//!     ↓
//! Storage Layer (SQLite or in-memory event store)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Build the application state from configuration
//! - Set up the router for `/`, `/intake` and `/output`

pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{routing::any, Router};
use shared::EventKind;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{EventService, EventTableService};
use crate::storage::EventStorage;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub event_service: EventService,
    pub event_table_service: EventTableService,
}

/// Initialize the backend with the store selected by the configuration
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up event store");
    let storage = storage::open_event_storage(config).await?;

    Ok(initialize_with_storage(config, storage))
}

/// Wire the domain services around an already opened store
pub fn initialize_with_storage(config: &AppConfig, storage: Arc<dyn EventStorage>) -> AppState {
    info!(
        "Setting up domain model (goal {} ml, display offset {})",
        config.daily_goal_ml, config.display_offset
    );
    let event_service = EventService::new(storage, config.daily_goal_ml, config.display_offset);
    let event_table_service = EventTableService::new(config.display_offset);

    AppState {
        event_service,
        event_table_service,
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", any(io::index_page))
        .route("/intake", io::event_routes(EventKind::Intake))
        .route("/output", io::event_routes(EventKind::Output))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
