// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::*;
use crate::errors::ConfigError;
use crate::frame::Palette;
use crate::keypad::KeyAction;
use rand::Rng;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for the router.
///
/// Every section is optional. A missing section (or a missing file) falls
/// back to the built-in defaults in [`crate::config::consts`].
///
/// # Example
/// ```yaml
/// broker:
///   host: mqtt.subraum.c3pb.de
///   port: 1883
/// topics:
///   keypad: mx-blue/arr/out
///   buzzer: xuhaktu/buzzer
///   announce: /unicorn
/// announce_prefix: mx-blue.connect
/// colors:
///   released:
///     default: "00ff00"
///     keys:
///       12: "ff0000"
/// buzzer:
///   forward: true
/// refresh_interval: 30s
/// actions:
///   4:
///     on_press:
///       - topic: lights/hall
///         payload: toggle
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub broker: BrokerConfig,
    pub topics: TopicConfig,
    pub announce_prefix: String,
    pub colors: ColorConfig,
    pub buzzer: BuzzerConfig,
    /// Re-publish both color frames this often. Disabled when unset.
    #[serde(with = "humantime_serde")]
    pub refresh_interval: Option<Duration>,
    /// Per-key messages published on key transitions
    pub actions: BTreeMap<u8, KeyActions>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            broker: BrokerConfig::default(),
            topics: TopicConfig::default(),
            announce_prefix: DEFAULT_ANNOUNCE_PREFIX.to_string(),
            colors: ColorConfig::default(),
            buzzer: BuzzerConfig::default(),
            refresh_interval: None,
            actions: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Replace file values with the ones given on the command line.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(host) = &overrides.host {
            self.broker.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.broker.port = port;
        }
        if let Some(interval) = overrides.refresh_interval {
            self.refresh_interval = Some(interval);
        }
    }

    /// Messages to publish for a key transition. Empty for keys without actions.
    pub fn key_actions(&self, index: u8, action: KeyAction) -> &[PublishAction] {
        self.actions
            .get(&index)
            .map(|actions| actions.for_action(action))
            .unwrap_or_default()
    }
}

/// Settings that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub refresh_interval: Option<Duration>,
}

/// Broker connection settings. The connection is anonymous.
///
/// # Fields
/// * `host` / `port` - Broker address
/// * `client_id_prefix` - Generated ids look like `<prefix>-<0..=100>`
/// * `client_id` - Fixed id, skips generation when set
/// * `keep_alive_secs` - MQTT keep-alive interval
/// * `reconnect_delay_ms` - Pause after a connection error
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    pub client_id_prefix: String,
    pub client_id: Option<String>,
    pub keep_alive_secs: u64,
    pub reconnect_delay_ms: u64,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_BROKER_HOST.to_string(),
            port: DEFAULT_BROKER_PORT,
            client_id_prefix: DEFAULT_CLIENT_ID_PREFIX.to_string(),
            client_id: None,
            keep_alive_secs: DEFAULT_KEEP_ALIVE.as_secs(),
            reconnect_delay_ms: DEFAULT_RECONNECT_DELAY.as_millis() as u64,
        }
    }
}

impl BrokerConfig {
    /// The configured client id, or a fresh `<prefix>-<n>` with `n` in `0..=100`.
    pub fn resolve_client_id(&self) -> String {
        match &self.client_id {
            Some(id) => id.clone(),
            None => {
                let suffix = rand::thread_rng().gen_range(0..=CLIENT_ID_SUFFIX_MAX);
                format!("{}-{}", self.client_id_prefix, suffix)
            }
        }
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs)
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }
}

/// Topic names. The first three are subscribed, the LED topics are published.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    pub keypad: String,
    pub buzzer: String,
    pub announce: String,
    pub released: String,
    pub pressed: String,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            keypad: DEFAULT_KEYPAD_TOPIC.to_string(),
            buzzer: DEFAULT_BUZZER_TOPIC.to_string(),
            announce: DEFAULT_ANNOUNCE_TOPIC.to_string(),
            released: DEFAULT_RELEASED_TOPIC.to_string(),
            pressed: DEFAULT_PRESSED_TOPIC.to_string(),
        }
    }
}

impl TopicConfig {
    pub fn subscriptions(&self) -> [&str; 3] {
        [&self.keypad, &self.buzzer, &self.announce]
    }
}

/// Palettes for the two LED topics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub released: Palette,
    pub pressed: Palette,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            released: Palette::default_released(),
            pressed: Palette::default_pressed(),
        }
    }
}

/// Buzzer forwarding. Off by default: a `+0` on the buzzer topic is only logged.
///
/// When `forward` is set the router publishes
/// `{"args": <args>, "user": <user>}` to `command_topic`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuzzerConfig {
    pub forward: bool,
    pub command_topic: String,
    pub args: String,
    pub user: String,
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self {
            forward: false,
            command_topic: DEFAULT_BUZZ_COMMAND_TOPIC.to_string(),
            args: DEFAULT_BUZZ_ARGS.to_string(),
            user: DEFAULT_BUZZ_USER.to_string(),
        }
    }
}

/// A message published when a key changes state. The payload is sent as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublishAction {
    pub topic: String,
    pub payload: String,
}

/// Messages published when one key is pressed or released.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyActions {
    pub on_press: Vec<PublishAction>,
    pub on_release: Vec<PublishAction>,
}

impl KeyActions {
    pub fn for_action(&self, action: KeyAction) -> &[PublishAction] {
        match action {
            KeyAction::Pressed => &self.on_press,
            KeyAction::Released => &self.on_release,
        }
    }
}

/// Load a config from a YAML file
///
/// An empty file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a config from a YAML file
///
/// All validation problems are reported together.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

/// Load `path` (or the defaults when there is none), apply `overrides`,
/// then validate the result.
pub fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<Config, ConfigError> {
    let mut cfg = match path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    cfg.apply_overrides(overrides);
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}
