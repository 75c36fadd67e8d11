//! Library Catalog - sample session
//!
//! Runs the demonstration script against an in-memory catalog.

use library_catalog::{config::AppConfig, demo, logging};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    logging::init(&config.logging)?;

    tracing::info!("Starting Library Catalog v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    demo::run(&mut stdout.lock(), config.demo.today())?;

    Ok(())
}
