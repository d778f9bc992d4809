//! # IO Module
//!
//! The boundary between HTTP and the domain: axum handlers that translate
//! requests into domain calls, and the HTML renderer that turns view models
//! into response bodies.

pub mod html;
pub mod rest;

pub use rest::*;
