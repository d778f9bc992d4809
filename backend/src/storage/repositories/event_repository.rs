use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::EventKind;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::{Event, NewEvent};
use crate::storage::connection::DbConnection;
use crate::storage::traits::EventStorage;

/// SQLite repository for intake and output events.
///
/// The table name comes from `EventKind::as_str`, never from request input.
#[derive(Clone)]
pub struct EventRepository {
    db: DbConnection,
}

impl EventRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn map_row(row: &SqliteRow) -> Result<Event> {
        Ok(Event {
            id: row.try_get("id")?,
            day: row.try_get("day")?,
            time: row.try_get::<DateTime<Utc>, _>("time")?,
            amount: row.try_get("amount")?,
            description: row
                .try_get::<Option<String>, _>("description")?
                .unwrap_or_default(),
        })
    }
}

#[async_trait]
impl EventStorage for EventRepository {
    async fn insert_event(&self, kind: EventKind, day: &str, event: &NewEvent) -> Result<i64> {
        let result = sqlx::query(&format!(
            "INSERT INTO {} (day, time, amount, description) VALUES (?, ?, ?, ?)",
            kind.as_str()
        ))
        .bind(day)
        .bind(event.time)
        .bind(event.amount)
        .bind(&event.description)
        .execute(self.db.pool())
        .await
        .with_context(|| format!("couldn't insert {} record", kind))?;

        Ok(result.last_insert_rowid())
    }

    async fn list_events(&self, kind: EventKind, day: &str) -> Result<Vec<Event>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT ROWID AS id, day, time, amount, description
            FROM {}
            WHERE day = ?
            ORDER BY time, ROWID
            "#,
            kind.as_str()
        ))
        .bind(day)
        .fetch_all(self.db.pool())
        .await
        .with_context(|| format!("couldn't query {} records", kind))?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn delete_event(&self, kind: EventKind, day: &str, id: i64) -> Result<bool> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE ROWID = ? AND day = ?",
            kind.as_str()
        ))
        .bind(id)
        .bind(day)
        .execute(self.db.pool())
        .await
        .with_context(|| format!("couldn't delete {} record", kind))?;

        Ok(result.rows_affected() > 0)
    }
}
