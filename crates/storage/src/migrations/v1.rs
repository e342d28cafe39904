//! Base schema: `call_logs` as the first deployment created it.
//!
//! Kept so a fresh database can be brought all the way up by one run; on a
//! database that already has the table this whole batch is a no-op.

pub(crate) fn statements() -> Vec<String> {
    vec![
        r#"
        CREATE TABLE IF NOT EXISTS call_logs (
            id BIGSERIAL PRIMARY KEY,
            phone_number TEXT,
            caller_name TEXT,
            duration_seconds INTEGER,
            transcript TEXT,
            summary TEXT,
            recording_url TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#
        .to_owned(),
        "CREATE INDEX IF NOT EXISTS idx_call_logs_created ON call_logs (created_at DESC)"
            .to_owned(),
        "CREATE INDEX IF NOT EXISTS idx_call_logs_phone ON call_logs (phone_number)".to_owned(),
    ]
}
