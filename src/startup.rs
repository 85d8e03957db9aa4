//! # The Main Entry Point of Monitoring
//!
//! Loads the configuration, opens the HTTP session and hands both to the
//! monitor loop, which runs until the process is stopped.
//!
//! # Steps:
//! 1. Loads the configuration
//! 2. Builds the album source
//! 3. Seeds the known albums
//! 4. Polls for new albums forever
//!
use crate::{api_client, configuration, process};
use anyhow::Context;
use std::time::Duration;
use tracing::info;

pub async fn run(cfg_file: &str, poll_interval: Duration) -> anyhow::Result<()> {
    println!("\x1b[1m\x1b[34mStarting album monitoring...\x1b[0m");

    let config = configuration::get_configuration(cfg_file)
        .with_context(|| format!("Unable to load configuration from '{}'", cfg_file))?;

    let source = api_client::HttpAlbumSource::new(&config.server.url, config.server.timeout())
        .context("Unable to create the HTTP client")?;

    info!(
        url = %source.url(),
        interval_secs = poll_interval.as_secs(),
        "monitoring albums"
    );

    process::Monitor::new(source, poll_interval).run().await;
    Ok(())
}
