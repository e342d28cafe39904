//! The upgrade batch: analytics columns on `call_logs`, plus the
//! `call_transcripts` and `active_calls` tables with row-level security
//! for the anonymous role.
//!
//! Policies are dropped before they are created, so the final definition
//! always matches this file regardless of what was there before. Everything
//! else rides on native `IF NOT EXISTS` guards.

use call_ledger_core::{ANALYTICS_COLUMNS, DEFAULT_CALL_STATUS};

pub(crate) fn statements() -> Vec<String> {
    let mut stmts = Vec::new();

    for col in ANALYTICS_COLUMNS {
        stmts.push(format!(
            "ALTER TABLE call_logs ADD COLUMN IF NOT EXISTS {} {}",
            col.name, col.sql_type
        ));
    }

    // One row per utterance, append-only. call_room_id is a foreign key by
    // convention only; the call session lives in active_calls.
    stmts.push(
        r#"
        CREATE TABLE IF NOT EXISTS call_transcripts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            call_room_id TEXT NOT NULL,
            phone TEXT,
            role TEXT NOT NULL CHECK (role IN ('user', 'assistant')),
            content TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#
        .to_owned(),
    );
    stmts.push(
        "CREATE INDEX IF NOT EXISTS idx_call_transcripts_room ON call_transcripts (call_room_id)"
            .to_owned(),
    );
    stmts.push(
        "CREATE INDEX IF NOT EXISTS idx_call_transcripts_phone ON call_transcripts (phone)"
            .to_owned(),
    );

    // Supabase ships the anon role; vanilla PostgreSQL does not, and
    // CREATE POLICY ... TO anon errors when the role is absent.
    stmts.push(
        r#"
        DO $$ BEGIN
            IF NOT EXISTS (SELECT 1 FROM pg_roles WHERE rolname = 'anon') THEN
                CREATE ROLE anon NOLOGIN;
            END IF;
        END $$
        "#
        .to_owned(),
    );

    stmts.push("ALTER TABLE call_transcripts ENABLE ROW LEVEL SECURITY".to_owned());
    stmts.push("DROP POLICY IF EXISTS call_transcripts_anon_insert ON call_transcripts".to_owned());
    stmts.push(
        "CREATE POLICY call_transcripts_anon_insert ON call_transcripts \
         FOR INSERT TO anon WITH CHECK (true)"
            .to_owned(),
    );
    stmts.push("DROP POLICY IF EXISTS call_transcripts_anon_select ON call_transcripts".to_owned());
    stmts.push(
        "CREATE POLICY call_transcripts_anon_select ON call_transcripts \
         FOR SELECT TO anon USING (true)"
            .to_owned(),
    );
    // No UPDATE/DELETE policy here: with row-level security enabled, anon
    // can append and read transcripts but never rewrite them.

    stmts.push(format!(
        r#"
        CREATE TABLE IF NOT EXISTS active_calls (
            room_id TEXT PRIMARY KEY,
            phone TEXT,
            caller_name TEXT,
            status TEXT DEFAULT '{DEFAULT_CALL_STATUS}',
            started_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            last_updated TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#
    ));
    stmts.push("ALTER TABLE active_calls ENABLE ROW LEVEL SECURITY".to_owned());
    stmts.push("DROP POLICY IF EXISTS active_calls_anon_all ON active_calls".to_owned());
    stmts.push(
        "CREATE POLICY active_calls_anon_all ON active_calls \
         FOR ALL TO anon USING (true) WITH CHECK (true)"
            .to_owned(),
    );

    stmts
}
