//! Domain model for a logged liquid event.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored event. The id is assigned by the store and is only unique within
/// one kind's table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    /// `DDMMYYYY` key of the day the event was logged under
    pub day: String,
    pub time: DateTime<Utc>,
    /// Amount in ml
    pub amount: i64,
    pub description: String,
}

/// An event that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub time: DateTime<Utc>,
    pub amount: i64,
    pub description: String,
}

impl NewEvent {
    /// Attach the id handed out by the store
    pub fn into_event(self, id: i64, day: &str) -> Event {
        Event {
            id,
            day: day.to_string(),
            time: self.time,
            amount: self.amount,
            description: self.description,
        }
    }
}
