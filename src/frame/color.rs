// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::errors::FrameError;

/// A single LED color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0x00, 0x00, 0x00]);

    /// Parse a color from six hex digits, e.g. `"00ff00"` or `"#00FF00"`.
    pub fn from_hex(value: &str) -> Result<Self, FrameError> {
        let digits = value.strip_prefix('#').unwrap_or(value);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FrameError::InvalidHex(value.to_string()));
        }

        let mut rgb = [0u8; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| FrameError::InvalidHex(value.to_string()))?;
        }

        Ok(Self(rgb))
    }

    pub fn as_bytes(&self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_table_driven() {
        struct TestCase {
            input: &'static str,
            expected: Option<[u8; 3]>,
        }

        let test_cases = vec![
            TestCase { input: "00ff00", expected: Some([0x00, 0xff, 0x00]) },
            TestCase { input: "101010", expected: Some([0x10, 0x10, 0x10]) },
            TestCase { input: "#A0b1C2", expected: Some([0xa0, 0xb1, 0xc2]) },
            TestCase { input: "000000", expected: Some([0, 0, 0]) },
            TestCase { input: "00ff0", expected: None },
            TestCase { input: "00ff000", expected: None },
            TestCase { input: "zzzzzz", expected: None },
            TestCase { input: "", expected: None },
            TestCase { input: "+0ff00", expected: None },
            TestCase { input: "ÿÿÿ", expected: None },
        ];

        for case in test_cases {
            let result = Rgb::from_hex(case.input);
            match case.expected {
                Some(bytes) => assert_eq!(result, Ok(Rgb(bytes)), "input {:?}", case.input),
                None => assert_eq!(
                    result,
                    Err(FrameError::InvalidHex(case.input.to_string())),
                    "input {:?}",
                    case.input
                ),
            }
        }
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb([0xAB, 0x01, 0xFF]).to_string(), "ab01ff");
    }
}
