//! # REST API Interface Layer
//!
//! HTTP endpoints of the liquid log. Responses are HTML (full page or
//! fragment) or empty bodies carrying an htmx trigger header.
//!
//! ## Endpoints
//!
//! - **GET /**: page shell for a day (`?date=DDMMYYYY`, defaults to today)
//! - **GET /intake, /output**: day log fragment
//! - **POST /intake, /output**: add an event from a form
//! - **DELETE /intake, /output**: delete an event by `id`
//!
//! Client errors come back as `400` with a short plain-text message.

pub mod event_apis;
pub mod index_apis;

pub use event_apis::*;
pub use index_apis::*;
