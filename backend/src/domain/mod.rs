//! # Domain Module
//!
//! Business logic of the liquid log: what a day is, how a day's events add up,
//! and how they are presented.
//!
//! ## Module Organization
//!
//! - **log_date**: `DDMMYYYY` day keys, display offset, time labels
//! - **models**: `Event`, `NewEvent` and the `DayLog` aggregator
//! - **event_service**: input validation and store orchestration
//! - **event_table**: view models for the HTML renderer
//!
//! ## Business Rules
//!
//! - A day is exactly eight digits forming a real date
//! - Amounts are whole millilitres; any integer is accepted
//! - Events of a day are shown in time order with a running subtotal
//! - Intake is measured against a daily goal, output only as a total
//! - Deleting needs both the row id and the day

pub mod event_service;
pub mod event_table;
pub mod log_date;
pub mod models;

pub use event_service::*;
pub use event_table::*;
pub use log_date::LogDate;
