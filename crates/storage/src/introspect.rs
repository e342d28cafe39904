//! Read-only catalog queries behind `call-ledger status`.
//!
//! Everything here answers "how far is this database from the current
//! schema" without modifying anything, so `status` is safe to point at
//! production.

use call_ledger_core::{
    ANALYTICS_COLUMNS, TABLE_ACTIVE_CALLS, TABLE_CALL_LOGS, TABLE_CALL_TRANSCRIPTS,
};
use serde::Serialize;
use sqlx::{PgPool, Row};

use crate::error::StorageError;

/// One row-level-security policy as reported by `pg_policies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyInfo {
    pub name: String,
    /// Command the policy applies to: SELECT, INSERT, UPDATE, DELETE, or ALL.
    pub command: String,
    pub roles: Vec<String>,
}

/// Presence and security state of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub table: String,
    pub exists: bool,
    pub rls_enabled: bool,
    pub policies: Vec<PolicyInfo>,
}

/// Snapshot of how far the database is from the current schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    pub call_logs: TableReport,
    /// Analytics columns a migration run would still add to `call_logs`.
    pub missing_analytics_columns: Vec<String>,
    pub call_transcripts: TableReport,
    pub active_calls: TableReport,
}

impl SchemaReport {
    /// True when a `migrate` run would be a pure no-op.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.call_logs.exists
            && self.missing_analytics_columns.is_empty()
            && self.call_transcripts.exists
            && self.call_transcripts.rls_enabled
            && self.active_calls.exists
            && self.active_calls.rls_enabled
    }
}

pub async fn table_exists(pool: &PgPool, table: &str) -> Result<bool, StorageError> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = 'public' AND table_name = $1
        )",
    )
    .bind(table)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

pub async fn column_exists(pool: &PgPool, table: &str, column: &str) -> Result<bool, StorageError> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT 1 FROM information_schema.columns
            WHERE table_schema = 'public' AND table_name = $1 AND column_name = $2
        )",
    )
    .bind(table)
    .bind(column)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

/// Whether row-level security is enabled. False for missing tables.
pub async fn rls_enabled(pool: &PgPool, table: &str) -> Result<bool, StorageError> {
    let enabled: Option<bool> = sqlx::query_scalar(
        "SELECT relrowsecurity FROM pg_class WHERE oid = to_regclass('public.' || $1)",
    )
    .bind(table)
    .fetch_optional(pool)
    .await?;
    Ok(enabled.unwrap_or(false))
}

/// Policies attached to a table, ordered by name.
pub async fn policies(pool: &PgPool, table: &str) -> Result<Vec<PolicyInfo>, StorageError> {
    let rows = sqlx::query(
        "SELECT policyname::text AS name, cmd::text AS command, roles::text[] AS roles
         FROM pg_policies
         WHERE schemaname = 'public' AND tablename = $1
         ORDER BY policyname",
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(PolicyInfo {
                name: row.try_get("name")?,
                command: row.try_get("command")?,
                roles: row.try_get("roles")?,
            })
        })
        .collect()
}

/// Aggregate the catalog queries into one serializable snapshot.
pub async fn schema_report(pool: &PgPool) -> Result<SchemaReport, StorageError> {
    let call_logs = table_report(pool, TABLE_CALL_LOGS).await?;

    let mut missing = Vec::new();
    if call_logs.exists {
        for col in ANALYTICS_COLUMNS {
            if !column_exists(pool, TABLE_CALL_LOGS, col.name).await? {
                missing.push(col.name.to_owned());
            }
        }
    } else {
        missing.extend(ANALYTICS_COLUMNS.iter().map(|c| c.name.to_owned()));
    }

    Ok(SchemaReport {
        call_logs,
        missing_analytics_columns: missing,
        call_transcripts: table_report(pool, TABLE_CALL_TRANSCRIPTS).await?,
        active_calls: table_report(pool, TABLE_ACTIVE_CALLS).await?,
    })
}

async fn table_report(pool: &PgPool, table: &str) -> Result<TableReport, StorageError> {
    Ok(TableReport {
        table: table.to_owned(),
        exists: table_exists(pool, table).await?,
        rls_enabled: rls_enabled(pool, table).await?,
        policies: policies(pool, table).await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(table: &str, rls: bool) -> TableReport {
        TableReport {
            table: table.to_owned(),
            exists: true,
            rls_enabled: rls,
            policies: Vec::new(),
        }
    }

    fn current_report() -> SchemaReport {
        SchemaReport {
            call_logs: present("call_logs", false),
            missing_analytics_columns: Vec::new(),
            call_transcripts: present("call_transcripts", true),
            active_calls: present("active_calls", true),
        }
    }

    #[test]
    fn fully_migrated_schema_is_current() {
        assert!(current_report().is_current());
    }

    #[test]
    fn missing_columns_mean_not_current() {
        let mut report = current_report();
        report.missing_analytics_columns.push("sentiment".to_owned());
        assert!(!report.is_current());
    }

    #[test]
    fn disabled_rls_means_not_current() {
        let mut report = current_report();
        report.active_calls.rls_enabled = false;
        assert!(!report.is_current());
    }

    #[test]
    fn missing_table_means_not_current() {
        let mut report = current_report();
        report.call_transcripts.exists = false;
        report.call_transcripts.rls_enabled = false;
        assert!(!report.is_current());
    }
}
