//! Dashboard chart export.

use anyhow::Context;
use cms_chart::Dashboard;
use cms_records::Snapshot;
use log::info;
use std::path::Path;

/// Build the dashboard from a snapshot and write it as JSON.
///
/// Writes to `output` when given, otherwise to stdout.
pub fn run_dashboard(snapshot: &Snapshot, output: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    let dashboard = Dashboard::build(snapshot).context("failed to aggregate records")?;
    let json = dashboard.to_json(pretty)?;

    match output {
        Some(path) => {
            std::fs::write(path, &json).with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                "Dashboard for {} cities written to {}",
                dashboard.summary.city_count,
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}
