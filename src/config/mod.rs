// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_config, load_config, resolve_config, BrokerConfig, BuzzerConfig,
    ColorConfig, Config, KeyActions, Overrides, PublishAction, TopicConfig,
};
pub use validation::validate_config;
