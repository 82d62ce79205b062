// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use clap::{Parser, ValueEnum};
use keypad_router::config::Overrides;
use std::path::PathBuf;
use std::time::Duration;

/// Route keypad, buzzer and announce messages between an MQTT broker and the
/// mx-blue keypad.
#[derive(Debug, Parser)]
#[command(name = "keypad-router")]
#[command(author, version, about)]
pub struct Cli {
    /// YAML config file. Built-in defaults are used when omitted
    #[arg(short, long, env = "KEYPAD_ROUTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level, combined with RUST_LOG directives
    #[arg(short, long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Override the broker host from the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Override the broker port from the config file
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Re-publish the color frames this often, e.g. "1s" or "500ms"
    #[arg(long, value_parser = humantime::parse_duration)]
    pub interval: Option<Duration>,
}

impl Cli {
    /// Command line values that replace those from the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            refresh_interval: self.interval,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
