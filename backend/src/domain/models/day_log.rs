//! Day aggregator: totals and running subtotals over one day's events.
use shared::EventKind;

use crate::domain::log_date::LogDate;
use crate::domain::models::event::Event;

/// One kind's events for one day, in time order, plus the daily goal.
/// Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLog {
    pub kind: EventKind,
    pub date: LogDate,
    pub events: Vec<Event>,
    pub goal: i64,
}

impl DayLog {
    pub fn new(kind: EventKind, date: LogDate, events: Vec<Event>, goal: i64) -> Self {
        Self {
            kind,
            date,
            events,
            goal,
        }
    }

    /// Sum of all amounts of the day
    pub fn total(&self) -> i64 {
        self.events
            .iter()
            .fold(0_i64, |total, e| total.saturating_add(e.amount))
    }

    /// What is left of the goal; negative once the goal is exceeded
    pub fn remaining(&self) -> i64 {
        self.goal.saturating_sub(self.total())
    }

    /// Running prefix sums, one per event
    pub fn subtotals(&self) -> Vec<i64> {
        self.events
            .iter()
            .scan(0_i64, |running, event| {
                *running = running.saturating_add(event.amount);
                Some(*running)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: i64, minute: u32, amount: i64) -> Event {
        Event {
            id,
            day: "01012024".to_string(),
            time: Utc.with_ymd_and_hms(2024, 1, 1, 6, minute, 0).unwrap(),
            amount,
            description: format!("event {}", id),
        }
    }

    fn day_log(amounts: &[i64]) -> DayLog {
        let events = amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| event(i as i64 + 1, i as u32, *amount))
            .collect();
        DayLog::new(
            EventKind::Intake,
            LogDate::parse("01012024").unwrap(),
            events,
            1300,
        )
    }

    #[test]
    fn test_empty_day() {
        let log = day_log(&[]);
        assert_eq!(log.total(), 0);
        assert_eq!(log.remaining(), 1300);
        assert!(log.subtotals().is_empty());
    }

    #[test]
    fn test_running_subtotals() {
        let log = day_log(&[50, 200, 150]);
        assert_eq!(log.subtotals(), vec![50, 250, 400]);
        assert_eq!(log.total(), 400);
        assert_eq!(log.remaining(), 900);
    }

    #[test]
    fn test_remaining_goes_negative_past_goal() {
        let log = day_log(&[1000, 500]);
        assert_eq!(log.remaining(), -200);
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        let log = day_log(&[i64::MAX, 1]);
        assert_eq!(log.total(), i64::MAX);
        assert_eq!(log.subtotals(), vec![i64::MAX, i64::MAX]);
        assert_eq!(log.remaining(), 1300 - i64::MAX);

        let log = day_log(&[i64::MIN]);
        assert_eq!(log.remaining(), i64::MAX);
    }

    #[test]
    fn test_totals_agree_for_many_shapes() {
        let cases: Vec<Vec<i64>> = vec![
            vec![1],
            vec![0, 0, 0],
            vec![300, -50, 120],
            vec![1300],
            (1..=40).map(|n| n * 7).collect(),
        ];
        for amounts in cases {
            let log = day_log(&amounts);
            let sum: i64 = amounts.iter().sum();
            assert_eq!(log.remaining(), log.goal - sum);
            assert_eq!(log.subtotals().last().copied(), Some(log.total()));
            assert_eq!(log.subtotals().len(), amounts.len());
        }
    }
}
