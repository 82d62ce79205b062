// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::FrameError;
use crate::frame::Rgb;

/// Size of the `(offset, count)` header in bytes.
pub const FRAME_HEADER_LEN: usize = 4;

/// A run of LED colors starting at `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedFrame {
    pub offset: u16,
    pub colors: Vec<Rgb>,
}

impl LedFrame {
    pub fn new(offset: u16, colors: Vec<Rgb>) -> Self {
        Self { offset, colors }
    }

    /// A frame of `count` LEDs all set to `color`, starting at offset 0.
    pub fn uniform(color: Rgb, count: usize) -> Self {
        Self::new(0, vec![color; count])
    }

    /// Build a frame from hex color strings, one per LED slot.
    ///
    /// Fails on the first slot that is not valid hex.
    pub fn from_hex_slots<S: AsRef<str>>(offset: u16, slots: &[S]) -> Result<Self, FrameError> {
        let colors = slots
            .iter()
            .map(|slot| Rgb::from_hex(slot.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(offset, colors))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Encode the frame into its wire representation.
    pub fn encode(&self) -> Result<Vec<u8>, FrameError> {
        let count = u16::try_from(self.colors.len())
            .map_err(|_| FrameError::TooManyColors(self.colors.len()))?;

        let mut bytes = Vec::with_capacity(FRAME_HEADER_LEN + 3 * self.colors.len());
        bytes.extend_from_slice(&self.offset.to_be_bytes());
        bytes.extend_from_slice(&count.to_be_bytes());
        bytes.extend(self.colors.iter().flat_map(|c| c.as_bytes()));
        Ok(bytes)
    }
}
