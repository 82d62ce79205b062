// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the router configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the expected schema.
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration parsed but failed validation.
    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single problem found while validating a configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required string field is empty
    EmptyField {
        /// Dotted path of the field, e.g. `topics.keypad`
        field: &'static str,
    },
    /// The broker port is zero
    InvalidPort,
    /// A per-key color override addresses a key that does not exist
    KeyOutOfRange {
        palette: &'static str,
        index: u8,
        key_count: usize,
    },
    /// A palette color is not a 6-digit hex value
    MalformedColor {
        palette: &'static str,
        value: String,
    },
    /// Key actions are configured for a key that does not exist
    ActionKeyOutOfRange { index: u8, key_count: usize },
    /// A key action has no topic to publish to
    EmptyActionTopic { index: u8 },
    /// The refresh interval is zero
    ZeroRefreshInterval,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyField { field } => {
                write!(f, "Field '{}' must not be empty", field)
            }
            ValidationError::InvalidPort => write!(f, "Broker port must not be 0"),
            ValidationError::KeyOutOfRange {
                palette,
                index,
                key_count,
            } => {
                write!(
                    f,
                    "Palette '{}' overrides key {} but the keypad only has {} keys",
                    palette, index, key_count
                )
            }
            ValidationError::MalformedColor { palette, value } => {
                write!(
                    f,
                    "Palette '{}' contains malformed color '{}'",
                    palette, value
                )
            }
            ValidationError::ActionKeyOutOfRange { index, key_count } => {
                write!(
                    f,
                    "Actions configured for key {} but the keypad only has {} keys",
                    index, key_count
                )
            }
            ValidationError::EmptyActionTopic { index } => {
                write!(f, "Action for key {} has an empty topic", index)
            }
            ValidationError::ZeroRefreshInterval => {
                write!(f, "Refresh interval must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
