// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod frame;
mod keypad;
mod publish;

pub use config::{ConfigError, ValidationError};
pub use frame::FrameError;
pub use keypad::KeyEventError;
pub use publish::PublishError;
