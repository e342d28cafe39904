//! Shared constants for call-ledger.

/// PostgreSQL connection pool: maximum connections.
///
/// The migration and status paths are sequential; a small pool is plenty.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 8;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the pool size.
pub const ENV_MAX_CONNECTIONS: &str = "CALL_LEDGER_MAX_CONNECTIONS";

/// Environment variable naming the target database.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
