// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::config::consts::{DEFAULT_PRESSED_COLOR, DEFAULT_RELEASED_COLOR};
use crate::errors::FrameError;
use crate::frame::{LedFrame, Rgb};
use crate::keypad::KEY_COUNT;

/// Color assignment for every key on the pad.
///
/// Colors are kept as hex strings exactly as configured and only decoded when
/// a frame is built, so a bad value surfaces as a [`FrameError`] at publish
/// time instead of being silently replaced.
///
/// # Example
/// ```yaml
/// default: "00ff00"
/// keys:
///   12: "ff0000"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Palette {
    pub default: String,
    #[serde(default)]
    pub keys: BTreeMap<u8, String>,
}

impl Palette {
    pub fn uniform(color: impl Into<String>) -> Self {
        Self {
            default: color.into(),
            keys: BTreeMap::new(),
        }
    }

    /// Palette sent on the `released` LED topic.
    pub fn default_released() -> Self {
        Self::uniform(DEFAULT_RELEASED_COLOR)
    }

    /// Palette sent on the `pressed` LED topic.
    pub fn default_pressed() -> Self {
        Self::uniform(DEFAULT_PRESSED_COLOR)
    }

    pub fn with_key(mut self, index: u8, color: impl Into<String>) -> Self {
        self.keys.insert(index, color.into());
        self
    }

    /// Expand into one color per key.
    pub fn resolve(&self) -> Result<Vec<Rgb>, FrameError> {
        let default = Rgb::from_hex(&self.default)?;
        let mut colors = vec![default; KEY_COUNT];

        for (&index, hex) in &self.keys {
            let slot = colors
                .get_mut(index as usize)
                .ok_or(FrameError::SlotOutOfRange {
                    index,
                    slots: KEY_COUNT,
                })?;
            *slot = Rgb::from_hex(hex)?;
        }

        Ok(colors)
    }

    /// A frame covering the whole keypad, starting at LED 0.
    pub fn to_frame(&self) -> Result<LedFrame, FrameError> {
        Ok(LedFrame::new(0, self.resolve()?))
    }
}
