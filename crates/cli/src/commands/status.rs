//! Report schema state as JSON without modifying anything.

pub(crate) async fn run() -> anyhow::Result<()> {
    let db = super::connect().await?;
    let report = db.schema_report().await?;

    if report.is_current() {
        tracing::info!("Schema is current");
    } else {
        tracing::warn!("Schema is behind; run `call-ledger migrate`");
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
