//! Event service: validates raw request input and drives the event store.
use chrono::{FixedOffset, SubsecRound, Utc};
use shared::{CreateEventForm, EventKind};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::log_date::LogDate;
use crate::domain::models::{DayLog, NewEvent};
use crate::error::{AppError, AppResult};
use crate::storage::EventStorage;

#[derive(Clone)]
pub struct EventService {
    storage: Arc<dyn EventStorage>,
    daily_goal: i64,
    display_offset: FixedOffset,
}

impl EventService {
    pub fn new(storage: Arc<dyn EventStorage>, daily_goal: i64, display_offset: FixedOffset) -> Self {
        Self {
            storage,
            daily_goal,
            display_offset,
        }
    }

    /// Parse a `date` query value, rejecting missing or malformed ones
    pub fn parse_date(&self, raw: Option<&str>) -> AppResult<LogDate> {
        raw.and_then(LogDate::parse).ok_or_else(|| {
            warn!("Rejected date parameter {:?}", raw);
            AppError::InvalidDate
        })
    }

    /// Load one kind's events for a day and aggregate them
    pub async fn day_log(&self, kind: EventKind, date: LogDate) -> AppResult<DayLog> {
        let events = self.storage.list_events(kind, &date.key()).await?;
        Ok(DayLog::new(kind, date, events, self.daily_goal))
    }

    /// Validate a submitted form and store the event.
    ///
    /// The amount is checked before the time and must fit in 32 bits. An
    /// empty or missing time means "now"; otherwise it is an `HH:MM` on the
    /// given day in the display offset.
    pub async fn create_event(
        &self,
        kind: EventKind,
        date: LogDate,
        form: &CreateEventForm,
    ) -> AppResult<i64> {
        let amount = form
            .amount
            .as_deref()
            .and_then(|raw| raw.parse::<i32>().ok())
            .map(i64::from)
            .ok_or_else(|| {
                warn!("Amount is in invalid format: {:?}", form.amount);
                AppError::InvalidAmount
            })?;

        let time = match form.time.as_deref() {
            None | Some("") => Utc::now().trunc_subsecs(0),
            Some(raw) => date.at_local_time(raw, &self.display_offset).ok_or_else(|| {
                warn!("Time is in invalid format: {:?}", raw);
                AppError::InvalidTime
            })?,
        };

        let new_event = NewEvent {
            time,
            amount,
            description: form.description.clone().unwrap_or_default(),
        };

        let id = self.storage.insert_event(kind, &date.key(), &new_event).await?;
        info!("Stored {} event {} on {}: {} ml", kind, id, date, amount);
        Ok(id)
    }

    /// Delete an event by its raw `id` query value. Deleting something that
    /// does not exist is not an error.
    pub async fn delete_event(
        &self,
        kind: EventKind,
        date: LogDate,
        raw_id: Option<&str>,
    ) -> AppResult<bool> {
        let id = raw_id
            .and_then(|raw| raw.parse::<i64>().ok())
            .ok_or_else(|| {
                warn!("id should be a number, got {:?}", raw_id);
                AppError::InvalidId
            })?;

        let deleted = self.storage.delete_event(kind, &date.key(), id).await?;
        if deleted {
            info!("Deleted {} event {} on {}", kind, id, date);
        } else {
            info!("No {} event {} on {} to delete", kind, id, date);
        }
        Ok(deleted)
    }
}
