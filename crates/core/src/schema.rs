//! Catalog of the call-logging schema.
//!
//! Single source of truth for table names and the analytics columns the
//! upgrade adds to `call_logs`. The migration runner generates its ALTER
//! statements from [`ANALYTICS_COLUMNS`] and the status report checks the
//! same array, so the two cannot drift.

pub const TABLE_CALL_LOGS: &str = "call_logs";
pub const TABLE_CALL_TRANSCRIPTS: &str = "call_transcripts";
pub const TABLE_ACTIVE_CALLS: &str = "active_calls";

/// Status a new `active_calls` row starts in when the writer names none.
/// Later transitions (active, ended, ...) are driven entirely by the
/// call-handling application; the schema does not constrain them.
pub const DEFAULT_CALL_STATUS: &str = "ringing";

/// One analytics column added to `call_logs` by the upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsColumn {
    pub name: &'static str,
    /// Column type plus any default, exactly as it appears in the
    /// ALTER TABLE statement.
    pub sql_type: &'static str,
}

/// The eight analytics columns, in migration order.
///
/// None carry CHECK constraints — validity is the writer's responsibility.
/// All are nullable or defaulted so pre-existing rows remain valid.
pub const ANALYTICS_COLUMNS: [AnalyticsColumn; 8] = [
    AnalyticsColumn { name: "sentiment", sql_type: "TEXT" },
    AnalyticsColumn { name: "estimated_cost_usd", sql_type: "NUMERIC(10,5)" },
    AnalyticsColumn { name: "call_date", sql_type: "DATE" },
    AnalyticsColumn { name: "call_hour", sql_type: "INTEGER" },
    AnalyticsColumn { name: "call_day_of_week", sql_type: "TEXT" },
    AnalyticsColumn { name: "was_booked", sql_type: "BOOLEAN DEFAULT FALSE" },
    AnalyticsColumn { name: "interrupt_count", sql_type: "INTEGER DEFAULT 0" },
    AnalyticsColumn { name: "audio_codec", sql_type: "TEXT" },
];
