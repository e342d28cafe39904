pub(crate) mod migrate;
pub(crate) mod status;

use anyhow::Context;
use call_ledger_core::{env_parse_with_default, ENV_MAX_CONNECTIONS, PG_POOL_MAX_CONNECTIONS};
use call_ledger_storage::Database;

pub(crate) async fn connect() -> anyhow::Result<Database> {
    let url = crate::database_url()?;
    let max_connections = env_parse_with_default(ENV_MAX_CONNECTIONS, PG_POOL_MAX_CONNECTIONS);
    Database::connect(&url, max_connections).await.context("failed to connect to PostgreSQL")
}
