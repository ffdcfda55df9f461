//! ITSM Console - Main Entry Point

use console::{init_logging, run, ConsoleConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::load()?;
    init_logging(&config)?;

    info!("=== ITSM Console v{} ===", env!("CARGO_PKG_VERSION"));
    run(config)?;

    Ok(())
}
