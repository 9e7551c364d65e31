//! Asset probe — prints the shape of one asset search response.
//!
//! Usage: `ap-probe [config.toml]`. The API key comes from the config
//! file or `ASSET_PROBE_API_KEY`. Logs go to stderr, the report to stdout.

use tracing_subscriber::EnvFilter;

use ap_probe::config::ProbeConfig;
use ap_probe::probe;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ap-probe starting");

    let config_path = std::env::args().nth(1);
    let config = ProbeConfig::load(config_path.as_deref())?;
    tracing::info!(
        base_url = %config.base_url,
        page_size = config.page_size,
        page = config.page,
        "config loaded"
    );

    let mut stdout = std::io::stdout();
    probe::run(&config, &mut stdout).await?;

    tracing::info!("ap-probe finished");
    Ok(())
}
