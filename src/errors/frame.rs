// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for LED color parsing and frame encoding.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The color string is not exactly six hex digits.
    #[error("Invalid hex color '{0}': expected 6 hex digits")]
    InvalidHex(String),

    /// The frame addresses more LEDs than the header can describe.
    #[error("Frame has {0} colors, header count is limited to 65535")]
    TooManyColors(usize),

    /// A palette override addresses a slot past the end of the frame.
    #[error("Color slot {index} is out of range for a {slots}-slot frame")]
    SlotOutOfRange { index: u8, slots: usize },
}
