// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors decoding a keystroke payload from the keypad.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyEventError {
    #[error("Keystroke payload is not valid UTF-8")]
    NotUtf8,

    #[error("Keystroke payload '{0}' is not a signed key number")]
    NotANumber(String),

    #[error("Key index {index} is out of range (keypad has {key_count} keys)")]
    OutOfRange { index: u32, key_count: usize },
}
