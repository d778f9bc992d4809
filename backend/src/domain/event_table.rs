//! Event table domain logic.
//!
//! Turns aggregated day logs into the view models the HTML renderer consumes.
//! All formatting decisions (local time labels, which summary to show) live
//! here so that rendering stays a plain string-building step.
//!
//! ## Key Responsibilities
//!
//! - **Time Formatting**: Stored UTC timestamps shown in the display offset
//! - **Running Subtotals**: One subtotal per row, taken from the day aggregator
//! - **Summary Selection**: Goal/remaining for intake, day total for output
//! - **Page Shell Data**: Title date and day key for the full page

use chrono::FixedOffset;
use shared::{DayLogView, DaySummary, EventKind, FormattedEvent, IndexPageView};

use crate::domain::log_date::{time_label, LogDate};
use crate::domain::models::DayLog;

#[derive(Clone)]
pub struct EventTableService {
    display_offset: FixedOffset,
}

impl EventTableService {
    pub fn new(display_offset: FixedOffset) -> Self {
        Self { display_offset }
    }

    /// Build the fragment view for one kind's day log
    pub fn day_log_view(&self, log: &DayLog) -> DayLogView {
        let rows = log
            .events
            .iter()
            .zip(log.subtotals())
            .map(|(event, subtotal)| FormattedEvent {
                id: event.id,
                formatted_time: time_label(&event.time, &self.display_offset),
                amount: event.amount,
                description: event.description.clone(),
                subtotal,
            })
            .collect();

        DayLogView {
            kind: log.kind,
            date_key: log.date.key(),
            summary: self.summary(log),
            rows,
        }
    }

    /// Intake is tracked against the goal, output only as a total
    pub fn summary(&self, log: &DayLog) -> DaySummary {
        match log.kind {
            EventKind::Intake => DaySummary::Goal {
                goal: log.goal,
                remaining: log.remaining(),
            },
            EventKind::Output => DaySummary::Total { total: log.total() },
        }
    }

    /// Today in the display offset
    pub fn today(&self) -> LogDate {
        LogDate::today(&self.display_offset)
    }

    /// Build the full page view for a day
    pub fn index_view(&self, date: LogDate) -> IndexPageView {
        IndexPageView {
            title_date: date.title(),
            date_key: date.key(),
        }
    }
}
