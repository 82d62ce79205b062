// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Keystroke events emitted by the keypad.
//!
//! The pad reports each key transition as a signed decimal key number:
//! `+7` means key 7 went down, `-7` means it came back up. Keys are numbered
//! row by row, `0..25`.

use std::fmt;

use crate::errors::KeyEventError;

/// Number of keys (and LEDs) on the pad.
pub const KEY_COUNT: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub index: u8,
    pub action: KeyAction,
}

impl KeyEvent {
    pub fn parse(payload: &[u8]) -> Result<Self, KeyEventError> {
        let text = std::str::from_utf8(payload)
            .map_err(|_| KeyEventError::NotUtf8)?
            .trim();

        let (action, digits) = match text.strip_prefix('-') {
            Some(rest) => (KeyAction::Released, rest),
            None => (KeyAction::Pressed, text.strip_prefix('+').unwrap_or(text)),
        };

        // `u32::from_str` would accept a second sign, reject it up front
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KeyEventError::NotANumber(text.to_string()));
        }

        let index: u32 = digits
            .parse()
            .map_err(|_| KeyEventError::NotANumber(text.to_string()))?;

        if index as usize >= KEY_COUNT {
            return Err(KeyEventError::OutOfRange {
                index,
                key_count: KEY_COUNT,
            });
        }

        Ok(Self {
            index: index as u8,
            action,
        })
    }

    /// Row and column of the key on the 5x5 pad.
    pub fn position(&self) -> (u8, u8) {
        (self.index / 5, self.index % 5)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.action {
            KeyAction::Pressed => "pressed",
            KeyAction::Released => "released",
        };
        write!(f, "key {} {}", self.index, action)
    }
}
