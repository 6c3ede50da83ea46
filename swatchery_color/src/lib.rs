// Copyright 2025 the Swatchery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=swatchery_color --heading-base-level=0

//! Swatchery Color: the color model shared by the Swatchery crates.
//!
//! This crate provides three small color records and the conversions between
//! them:
//!
//! - [`Hsl`]: hue/saturation/lightness/alpha, the representation the picker
//!   state stores.
//! - [`Hsv`]: hue/saturation/value/alpha, the representation the
//!   saturation/value surface maps pointer positions into.
//! - [`Rgba`]: red/green/blue/alpha, the representation rendering
//!   collaborators consume and hex input arrives in.
//!
//! Hue is measured in degrees (0–360); every other channel is a normalized
//! `f64` in 0–1. Constructors clamp their inputs into these ranges, so a
//! value built through this crate's API is always in range.
//!
//! Conversions are direct arithmetic; there is no color management, gamma
//! handling, or wide-gamut support here. The [`Rgba`] hex and CSS formatting
//! helpers exist for the picker's external boundary (hex strings in,
//! `rgba(...)` swatch values out) and do not feed back into the model.
//!
//! ## Minimal example
//!
//! ```rust
//! use swatchery_color::{Hsl, Rgba};
//!
//! // External input arrives as hex and is normalized to HSL.
//! let red = Rgba::from_hex("#ff0000").unwrap().to_hsl();
//! assert_eq!(red.h, 0.0);
//! assert_eq!(red.l, 0.5);
//!
//! // The stored color converts back out for a swatch.
//! assert_eq!(red.to_rgba().to_css(), "rgb(255, 0, 0)");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod parse;

use libm::{fabs, fmod};

/// A color in hue/saturation/lightness form with an alpha channel.
///
/// `h` is in degrees (0–360); `s`, `l`, and `a` are normalized to 0–1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, 0–360.
    pub h: f64,
    /// Saturation, 0–1.
    pub s: f64,
    /// Lightness, 0–1.
    pub l: f64,
    /// Alpha, 0–1.
    pub a: f64,
}

/// A color in hue/saturation/value form with an alpha channel.
///
/// `h` is in degrees (0–360); `s`, `v`, and `a` are normalized to 0–1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, 0–360.
    pub h: f64,
    /// Saturation, 0–1.
    pub s: f64,
    /// Value (brightness), 0–1.
    pub v: f64,
    /// Alpha, 0–1.
    pub a: f64,
}

/// A color in red/green/blue form with an alpha channel, all channels 0–1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    /// Red, 0–1.
    pub r: f64,
    /// Green, 0–1.
    pub g: f64,
    /// Blue, 0–1.
    pub b: f64,
    /// Alpha, 0–1.
    pub a: f64,
}

impl Hsl {
    /// Opaque white, the default picker color.
    pub const WHITE: Self = Self {
        h: 0.0,
        s: 0.0,
        l: 1.0,
        a: 1.0,
    };

    /// Creates an HSL color, clamping each channel into its declared range.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: h.clamp(0.0, 360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Converts to HSV, preserving hue and alpha.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        let v = self.l + self.s * self.l.min(1.0 - self.l);
        let s = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - self.l / v) };
        Hsv {
            h: self.h,
            s,
            v,
            a: self.a,
        }
    }

    /// Converts to RGBA, preserving alpha.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        // Wrap hue into [0, 360) so 360 maps like 0.
        let h = fmod(fmod(self.h, 360.0) + 360.0, 360.0);
        let c = (1.0 - fabs(2.0 * self.l - 1.0)) * self.s;
        let hp = h / 60.0;
        let x = c * (1.0 - fabs(fmod(hp, 2.0) - 1.0));
        let (r1, g1, b1) = if hp < 1.0 {
            (c, x, 0.0)
        } else if hp < 2.0 {
            (x, c, 0.0)
        } else if hp < 3.0 {
            (0.0, c, x)
        } else if hp < 4.0 {
            (0.0, x, c)
        } else if hp < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };
        let m = self.l - c / 2.0;
        Rgba {
            r: r1 + m,
            g: g1 + m,
            b: b1 + m,
            a: self.a,
        }
    }
}

impl Default for Hsl {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Hsv {
    /// Creates an HSV color, clamping each channel into its declared range.
    #[must_use]
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self {
            h: h.clamp(0.0, 360.0),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Converts to HSL, preserving hue and alpha.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let l = self.v * (1.0 - self.s / 2.0);
        let s = if l <= 0.0 || l >= 1.0 {
            0.0
        } else {
            (self.v - l) / l.min(1.0 - l)
        };
        Hsl {
            h: self.h,
            s,
            l,
            a: self.a,
        }
    }
}

impl Rgba {
    /// Creates an RGBA color, clamping each channel to 0–1.
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Converts to HSL, preserving alpha.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;
        if max == min {
            // Achromatic; hue is arbitrary and reported as 0.
            return Hsl {
                h: 0.0,
                s: 0.0,
                l,
                a: self.a,
            };
        }
        let d = max - min;
        let s = d / (1.0 - fabs(2.0 * l - 1.0));
        let mut h = if max == self.r {
            (self.g - self.b) / d
        } else if max == self.g {
            (self.b - self.r) / d + 2.0
        } else {
            (self.r - self.g) / d + 4.0
        } * 60.0;
        if h < 0.0 {
            h += 360.0;
        }
        Hsl {
            h,
            s,
            l,
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        fabs(a - b) < 1e-9
    }

    #[test]
    fn white_round_trips_through_every_space() {
        let white = Hsl::WHITE;
        let rgba = white.to_rgba();
        assert!(close(rgba.r, 1.0) && close(rgba.g, 1.0) && close(rgba.b, 1.0));
        assert_eq!(rgba.a, 1.0);

        let back = rgba.to_hsl();
        assert!(close(back.l, 1.0));
        assert!(close(back.s, 0.0));
    }

    #[test]
    fn primary_red_converts_exactly() {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0).to_hsl();
        assert!(close(red.h, 0.0));
        assert!(close(red.s, 1.0));
        assert!(close(red.l, 0.5));
    }

    #[test]
    fn hue_survives_hsv_hsl_round_trip() {
        let hsv = Hsv::new(210.0, 0.4, 0.8, 0.5);
        let hsl = hsv.to_hsl();
        assert_eq!(hsl.h, 210.0);
        assert_eq!(hsl.a, 0.5);

        let back = hsl.to_hsv();
        assert!(close(back.s, hsv.s));
        assert!(close(back.v, hsv.v));
    }

    #[test]
    fn fully_bright_desaturated_hsv_is_white() {
        let hsl = Hsv::new(123.0, 0.0, 1.0, 1.0).to_hsl();
        assert!(close(hsl.l, 1.0));
        assert!(close(hsl.s, 0.0));
    }

    #[test]
    fn black_hsv_has_zero_lightness() {
        let hsl = Hsv::new(0.0, 0.0, 0.0, 1.0).to_hsl();
        assert!(close(hsl.l, 0.0));
        assert!(close(hsl.s, 0.0));
    }

    #[test]
    fn constructors_clamp_out_of_range_channels() {
        let hsl = Hsl::new(400.0, -0.5, 1.5, 2.0);
        assert_eq!(hsl.h, 360.0);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.l, 1.0);
        assert_eq!(hsl.a, 1.0);

        let rgba = Rgba::new(-1.0, 0.5, 3.0, -0.1);
        assert_eq!(rgba.r, 0.0);
        assert_eq!(rgba.b, 1.0);
        assert_eq!(rgba.a, 0.0);
    }

    #[test]
    fn hue_360_maps_like_zero() {
        let a = Hsl::new(360.0, 1.0, 0.5, 1.0).to_rgba();
        let b = Hsl::new(0.0, 1.0, 0.5, 1.0).to_rgba();
        assert!(close(a.r, b.r) && close(a.g, b.g) && close(a.b, b.b));
    }

    #[test]
    fn mid_green_round_trips_rgb_hsl_rgb() {
        let rgba = Rgba::new(0.2, 0.6, 0.3, 1.0);
        let back = rgba.to_hsl().to_rgba();
        assert!(close(back.r, rgba.r));
        assert!(close(back.g, rgba.g));
        assert!(close(back.b, rgba.b));
    }
}
