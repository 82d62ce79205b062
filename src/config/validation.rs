// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Validation runs once at startup, before the broker connection is opened.
//! Every check runs and all problems are returned together so a broken
//! config file can be fixed in one pass.
//!
//! # Checks
//!
//! 1. **Broker**: host is set, port is not 0, client id prefix is set
//! 2. **Topics**: every subscribed and published topic is non-empty, and the
//!    announce prefix is non-empty (an empty prefix would match every message)
//! 3. **Palettes**: every color is 6-digit hex and every per-key override
//!    addresses a key that exists
//! 4. **Buzzer**: forwarding needs a command topic
//! 5. **Key actions**: only for existing keys, each with a topic
//! 6. **Refresh**: the interval, when set, is not zero
//!
//! # Example
//! ```rust
//! use keypad_router::config::{validate_config, Config};
//!
//! let mut config = Config::default();
//! config.broker.port = 0;
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(errors.len(), 1);
//! ```

use crate::config::Config;
use crate::errors::ValidationError;
use crate::frame::{Palette, Rgb};
use crate::keypad::KEY_COUNT;

/// Validates a configuration, accumulating every problem found.
///
/// # Returns
///
/// * `Ok(())` - Configuration is usable
/// * `Err(Vec<ValidationError>)` - All validation errors found
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_broker(config, &mut errors);
    validate_topics(config, &mut errors);
    validate_palette("released", &config.colors.released, &mut errors);
    validate_palette("pressed", &config.colors.pressed, &mut errors);
    validate_buzzer(config, &mut errors);
    validate_actions(config, &mut errors);

    if config.refresh_interval.is_some_and(|interval| interval.is_zero()) {
        errors.push(ValidationError::ZeroRefreshInterval);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn require_non_empty(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::EmptyField { field });
    }
}

fn validate_broker(config: &Config, errors: &mut Vec<ValidationError>) {
    require_non_empty("broker.host", &config.broker.host, errors);
    if config.broker.port == 0 {
        errors.push(ValidationError::InvalidPort);
    }
    if config.broker.client_id.is_none() {
        require_non_empty("broker.client_id_prefix", &config.broker.client_id_prefix, errors);
    }
}

fn validate_topics(config: &Config, errors: &mut Vec<ValidationError>) {
    let topics = &config.topics;
    require_non_empty("topics.keypad", &topics.keypad, errors);
    require_non_empty("topics.buzzer", &topics.buzzer, errors);
    require_non_empty("topics.announce", &topics.announce, errors);
    require_non_empty("topics.released", &topics.released, errors);
    require_non_empty("topics.pressed", &topics.pressed, errors);
    require_non_empty("announce_prefix", &config.announce_prefix, errors);
}

fn validate_palette(name: &'static str, palette: &Palette, errors: &mut Vec<ValidationError>) {
    let colors = std::iter::once(&palette.default).chain(palette.keys.values());
    for value in colors {
        if Rgb::from_hex(value).is_err() {
            errors.push(ValidationError::MalformedColor {
                palette: name,
                value: value.clone(),
            });
        }
    }

    for &index in palette.keys.keys() {
        if index as usize >= KEY_COUNT {
            errors.push(ValidationError::KeyOutOfRange {
                palette: name,
                index,
                key_count: KEY_COUNT,
            });
        }
    }
}

fn validate_buzzer(config: &Config, errors: &mut Vec<ValidationError>) {
    if config.buzzer.forward {
        require_non_empty("buzzer.command_topic", &config.buzzer.command_topic, errors);
    }
}

fn validate_actions(config: &Config, errors: &mut Vec<ValidationError>) {
    for (&index, actions) in &config.actions {
        if index as usize >= KEY_COUNT {
            errors.push(ValidationError::ActionKeyOutOfRange {
                index,
                key_count: KEY_COUNT,
            });
        }

        let mut all = actions.on_press.iter().chain(&actions.on_release);
        if all.any(|action| action.topic.trim().is_empty()) {
            errors.push(ValidationError::EmptyActionTopic { index });
        }
    }
}
