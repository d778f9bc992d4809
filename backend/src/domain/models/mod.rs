pub mod day_log;
pub mod event;

pub use day_log::DayLog;
pub use event::{Event, NewEvent};
