use anyhow::{Context, Result};
use shared::EventKind;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

// Database URL used when DATABASE_URL is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite:intake.db";

/// DbConnection manages the SQLite pool and the schema
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (creating the file if needed) the database and set up the schema
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid database url '{}'", url))?
            .create_if_missing(true);

        // Keep one connection open so a shared in-memory database outlives idle periods
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .connect_with(options)
            .await
            .with_context(|| format!("couldn't open database '{}'", url))?;

        Self::setup_schema(&pool).await?;
        info!("Database ready at {}", url);

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a private in-memory database, one per call
    pub async fn init_in_memory(name: &str) -> Result<Self> {
        let url = format!("sqlite:file:memdb_{}?mode=memory&cache=shared", name);
        Self::new(&url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// One table per event kind, keyed by the implicit ROWID
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        for kind in EventKind::ALL {
            let table = kind.as_str();

            sqlx::query(&format!(
                r#"
                CREATE TABLE IF NOT EXISTS {table} (
                    day TEXT,
                    time TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    amount INTEGER,
                    description TEXT
                );
                "#
            ))
            .execute(pool)
            .await
            .with_context(|| format!("couldn't create table {}", table))?;

            sqlx::query(&format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_day ON {table}(day);"
            ))
            .execute(pool)
            .await
            .with_context(|| format!("couldn't create index on {}", table))?;
        }

        Ok(())
    }
}
