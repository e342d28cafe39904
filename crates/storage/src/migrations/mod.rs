//! Idempotent schema migrations for the call-logging database.
//!
//! There is no version bookkeeping table. Every statement guards itself
//! (`IF NOT EXISTS` on columns, tables, and indexes; drop-then-create for
//! policies), so the whole batch is safe to replay against a database in
//! any prior state. Statements execute one at a time, in written order,
//! with no wrapping transaction; a mid-batch failure leaves a partially
//! upgraded schema that a re-run completes.

mod v1;
mod v2;

use sqlx::PgPool;

use crate::error::StorageError;

/// Bring the database to the current schema.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StorageError> {
    tracing::info!("Applying base call_logs schema");
    execute_all(pool, &v1::statements()).await?;

    tracing::info!("Applying analytics columns, transcripts, and live-call state");
    execute_all(pool, &v2::statements()).await?;

    tracing::info!("Schema migrations completed");
    Ok(())
}

async fn execute_all(pool: &PgPool, statements: &[String]) -> Result<(), StorageError> {
    for sql in statements {
        sqlx::query(sql).execute(pool).await.map_err(|err| {
            StorageError::Migration(format!("{err}; statement: {}", first_line(sql)))
        })?;
    }
    Ok(())
}

fn first_line(sql: &str) -> &str {
    sql.trim_start().lines().next().unwrap_or_default().trim_end()
}

#[cfg(test)]
mod tests {
    use call_ledger_core::ANALYTICS_COLUMNS;

    use super::*;

    fn all_statements() -> Vec<String> {
        let mut stmts = v1::statements();
        stmts.extend(v2::statements());
        stmts
    }

    fn normalized(sql: &str) -> String {
        sql.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn tables_and_indexes_are_guarded() {
        for sql in all_statements() {
            let flat = normalized(&sql);
            if flat.starts_with("CREATE TABLE") || flat.starts_with("CREATE INDEX") {
                assert!(flat.contains("IF NOT EXISTS"), "unguarded statement: {flat}");
            }
        }
    }

    #[test]
    fn column_adds_are_guarded() {
        for sql in all_statements() {
            let flat = normalized(&sql);
            if flat.contains("ADD COLUMN") {
                assert!(flat.contains("ADD COLUMN IF NOT EXISTS"), "unguarded column add: {flat}");
            }
        }
    }

    #[test]
    fn every_policy_is_dropped_before_create() {
        let stmts: Vec<String> = all_statements().iter().map(|s| normalized(s)).collect();
        let mut creates = 0;
        for (i, flat) in stmts.iter().enumerate() {
            if !flat.starts_with("CREATE POLICY") {
                continue;
            }
            creates += 1;
            let name = flat.split_whitespace().nth(2).unwrap();
            let prev = i.checked_sub(1).map(|p| stmts[p].as_str()).unwrap_or_default();
            assert!(
                prev.starts_with(&format!("DROP POLICY IF EXISTS {name} ")),
                "policy {name} is not dropped immediately before creation"
            );
        }
        assert_eq!(creates, 3, "expected exactly three access policies");
    }

    #[test]
    fn upgrade_covers_every_analytics_column() {
        let stmts = v2::statements();
        for col in ANALYTICS_COLUMNS {
            let expected =
                format!("ALTER TABLE call_logs ADD COLUMN IF NOT EXISTS {} {}", col.name, col.sql_type);
            assert!(
                stmts.iter().any(|s| normalized(s) == expected),
                "missing column add for {}",
                col.name
            );
        }
    }

    #[test]
    fn transcripts_get_no_update_or_delete_policy() {
        for sql in v2::statements() {
            let flat = normalized(&sql);
            if flat.starts_with("CREATE POLICY") && flat.contains("ON call_transcripts") {
                assert!(
                    flat.contains("FOR INSERT") || flat.contains("FOR SELECT"),
                    "unexpected transcript policy: {flat}"
                );
            }
        }
    }

    #[test]
    fn policies_target_the_anon_role() {
        for sql in all_statements() {
            let flat = normalized(&sql);
            if flat.starts_with("CREATE POLICY") {
                assert!(flat.contains("TO anon"), "policy not scoped to anon: {flat}");
            }
        }
    }

    #[test]
    fn role_constraint_matches_the_domain_enum() {
        use call_ledger_core::TranscriptRole;

        let table = v2::statements()
            .iter()
            .map(|s| normalized(s))
            .find(|s| s.starts_with("CREATE TABLE IF NOT EXISTS call_transcripts"))
            .expect("transcripts table statement");
        let expected = format!(
            "CHECK (role IN ('{}', '{}'))",
            TranscriptRole::User,
            TranscriptRole::Assistant
        );
        assert!(table.contains(&expected), "role CHECK drifted from TranscriptRole: {table}");
    }

    #[test]
    fn rls_is_enabled_on_both_new_tables() {
        let stmts: Vec<String> = v2::statements().iter().map(|s| normalized(s)).collect();
        for table in ["call_transcripts", "active_calls"] {
            assert!(
                stmts.iter().any(|s| s == &format!("ALTER TABLE {table} ENABLE ROW LEVEL SECURITY")),
                "row-level security not enabled on {table}"
            );
        }
    }
}
