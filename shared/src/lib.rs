use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of liquid event. Each kind lives in its own table and has its own route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Liquid taken in (drinks, IV fluids)
    Intake,
    /// Liquid passed out (urine)
    Output,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::Intake, EventKind::Output];

    /// Lowercase name, used as route segment and table name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Intake => "intake",
            EventKind::Output => "output",
        }
    }

    /// Name of the htmx event fired after this kind's log changed
    pub fn update_trigger(&self) -> &'static str {
        match self {
            EventKind::Intake => "intakeUpdate",
            EventKind::Output => "outputUpdate",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query string accepted by the index page and the event endpoints.
///
/// Everything stays a raw string so that validation (and its error messages)
/// happens in one place instead of inside the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventQuery {
    /// Day in `DDMMYYYY` form
    pub date: Option<String>,
    /// Row id, only meaningful for DELETE
    pub id: Option<String>,
}

/// Form body posted by the "Add" form of a day log fragment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEventForm {
    /// Optional `HH:MM` on the requested day; empty means "now"
    #[serde(default)]
    pub time: Option<String>,
    /// Amount in ml, must parse as an integer
    #[serde(default)]
    pub amount: Option<String>,
    /// Free text
    #[serde(default)]
    pub description: Option<String>,
}

/// One formatted row of a day log table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedEvent {
    pub id: i64,
    /// Local time of day, e.g. `09:30 am`
    pub formatted_time: String,
    pub amount: i64,
    pub description: String,
    /// Running total up to and including this row
    pub subtotal: i64,
}

/// Summary shown above a day log table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DaySummary {
    /// Intake view: daily goal and what is left of it
    Goal { goal: i64, remaining: i64 },
    /// Output view: what was passed during the day
    Total { total: i64 },
}

/// Everything needed to render the fragment for one kind on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLogView {
    pub kind: EventKind,
    /// `DDMMYYYY` key of the day
    pub date_key: String,
    pub summary: DaySummary,
    pub rows: Vec<FormattedEvent>,
}

/// Data for the full page shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexPageView {
    /// Human readable date, e.g. `1 Jan 2024`
    pub title_date: String,
    /// `DDMMYYYY` key passed on to the fragment requests
    pub date_key: String,
}
