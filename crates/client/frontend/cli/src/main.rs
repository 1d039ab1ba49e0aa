//! Terminal client entry point.
use anyhow::Result;
use client_frontend_cli::{CliApp, CliConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    logging::setup_logging()?;

    CliApp::new(config).run()
}
