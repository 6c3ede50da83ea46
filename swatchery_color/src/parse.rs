// Copyright 2025 the Swatchery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hex parsing and string formatting for [`Rgba`].

use alloc::format;
use alloc::string::String;

use libm::round;

use crate::Rgba;

impl Rgba {
    /// Parses a hex string (with or without `#`; 3, 6, or 8 digits).
    ///
    /// 8-digit hex is interpreted as RRGGBBAA; 3 and 6-digit forms are fully
    /// opaque. Returns `None` for any other length or any non-hex digit.
    ///
    /// ```rust
    /// use swatchery_color::Rgba;
    ///
    /// let c = Rgba::from_hex("#80ff0080").unwrap();
    /// assert_eq!(c.a, 128.0 / 255.0);
    /// assert!(Rgba::from_hex("not a color").is_none());
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |range: core::ops::Range<usize>| u8::from_str_radix(&stripped[range], 16).ok();
        match stripped.len() {
            3 => {
                // Shorthand digits expand to doubled form: f -> ff.
                let r = byte(0..1)?;
                let g = byte(1..2)?;
                let b = byte(2..3)?;
                Some(Self::from_rgba8(r * 17, g * 17, b * 17, 255))
            }
            6 => Some(Self::from_rgba8(byte(0..2)?, byte(2..4)?, byte(4..6)?, 255)),
            8 => Some(Self::from_rgba8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => None,
        }
    }

    /// Creates a color from 0–255 channel values.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: f64::from(a) / 255.0,
        }
    }

    /// Returns the channels as 0–255 values, rounding to nearest.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "rounded and in 0..=255")]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            round(self.r.clamp(0.0, 1.0) * 255.0) as u8,
            round(self.g.clamp(0.0, 1.0) * 255.0) as u8,
            round(self.b.clamp(0.0, 1.0) * 255.0) as u8,
            round(self.a.clamp(0.0, 1.0) * 255.0) as u8,
        ]
    }

    /// Formats as lowercase hex with a leading `#`.
    ///
    /// Produces 6 digits when fully opaque and 8 digits otherwise.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Formats as a CSS color string, `rgb(...)` when opaque and
    /// `rgba(...)` otherwise, with alpha rounded to two decimals.
    #[must_use]
    pub fn to_css(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        if self.a >= 1.0 {
            format!("rgb({r}, {g}, {b})")
        } else {
            let a = round(self.a * 100.0) / 100.0;
            format!("rgba({r}, {g}, {b}, {a})")
        }
    }
}
