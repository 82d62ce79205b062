// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! LED color frames for the keypad matrix.
//!
//! A frame addresses a contiguous range of LEDs. On the wire it is a 4-byte
//! big-endian header `(offset: u16, count: u16)` followed by `count` RGB
//! triples:
//!
//! ```text
//! +--------+--------+-----+-----+-----+-----+-----+-----+-----
//! | offset | count  |  r0 |  g0 |  b0 |  r1 |  g1 |  b1 | ...
//! | u16 BE | u16 BE |  u8 |  u8 |  u8 |  u8 |  u8 |  u8 |
//! +--------+--------+-----+-----+-----+-----+-----+-----+-----
//! ```

mod color;
mod led_frame;
mod palette;

pub use color::Rgb;
pub use led_frame::{LedFrame, FRAME_HEADER_LEN};
pub use palette::Palette;
