//! Apply the schema migrations.
//!
//! Safe against any starting state: a fresh database, a v1 deployment, or
//! an already-upgraded one. Re-running after a mid-batch failure completes
//! the upgrade.

use anyhow::Context;

pub(crate) async fn run() -> anyhow::Result<()> {
    let db = super::connect().await?;
    db.migrate().await.context("schema migration failed")?;
    println!("Schema is up to date.");
    Ok(())
}
