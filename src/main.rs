// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use clap::Parser;
use keypad_router::config::resolve_config;
use keypad_router::observability::init_logging;
use keypad_router::service::Service;
use tokio_util::sync::CancellationToken;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.map(Into::into)).context("Failed to set up logging")?;

    match &cli.config {
        Some(path) => tracing::info!(path = %path.display(), "Loading config"),
        None => tracing::info!("No config file given, using built-in defaults"),
    }
    let config = resolve_config(cli.config.as_deref(), &cli.overrides())?;

    let shutdown = CancellationToken::new();
    let on_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => on_signal.cancel(),
            Err(error) => tracing::error!(%error, "Unable to listen for ctrl-c"),
        }
    });

    Service::new(&config)
        .run(shutdown)
        .await
        .context("Router task panicked")?;

    Ok(())
}
