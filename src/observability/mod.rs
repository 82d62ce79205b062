// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Message types live in [`messages`], grouped by subsystem, so log lines are
//! not scattered as string literals through the router. [`init_logging`]
//! installs the global `tracing` subscriber used by the binary.
//!
//! # Usage
//!
//! ```rust
//! use keypad_router::observability::messages::router::PublishFailed;
//! use keypad_router::observability::messages::StructuredLog;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "broker gone");
//! PublishFailed { topic: "mx-blue/arr/pressed", error: &error }.log();
//! ```

pub mod messages;

use tracing::metadata::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` directives are honoured; `level`, when given, is added as the
/// default directive on top of them. Without either, `info` is used.
pub fn init_logging(level: Option<tracing::Level>) -> Result<(), tracing_subscriber::util::TryInitError> {
    let default = LevelFilter::from_level(level.unwrap_or(tracing::Level::INFO));
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    let filter = match level {
        Some(level) => filter.add_directive(LevelFilter::from_level(level).into()),
        None => filter,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
}
