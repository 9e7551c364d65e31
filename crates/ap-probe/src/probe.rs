//! One probe run: fetch the configured page and report on it.

use std::io::Write;

use crate::client::AssetClient;
use crate::config::ProbeConfig;
use crate::error::ProbeResult;
use crate::report;

/// Send the single asset search request and write the report to `out`.
///
/// Transport failures propagate. Error statuses and non-JSON bodies are
/// reported and count as a completed run.
pub async fn run<W: Write>(config: &ProbeConfig, out: &mut W) -> ProbeResult<()> {
    let client = AssetClient::new(config)?;
    let response = client.fetch_page().await?;
    report::write_report(out, response.status, &response.body)?;
    out.flush()?;
    Ok(())
}
