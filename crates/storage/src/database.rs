//! Connection handle on the call-logging database.

use std::time::Duration;

use call_ledger_core::PG_POOL_ACQUIRE_TIMEOUT_SECS;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::StorageError;
use crate::introspect::{schema_report, SchemaReport};
use crate::migrations::run_migrations;

#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect without touching the schema. Migration is a separate,
    /// explicit step so `status` can inspect a database it would change.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .connect(database_url)
            .await?;
        tracing::info!(max_connections, "Connected to PostgreSQL");
        Ok(Self { pool })
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Replay the idempotent migration batch.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        run_migrations(&self.pool).await
    }

    /// Snapshot the schema state without modifying it.
    pub async fn schema_report(&self) -> Result<SchemaReport, StorageError> {
        schema_report(&self.pool).await
    }
}
