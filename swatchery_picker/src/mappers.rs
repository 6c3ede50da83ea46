// Copyright 2025 the Swatchery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure position-to-channel mappers and the clamping helper.
//!
//! Each mapper converts a resolved pointer position ([`Boundaries`]) into a
//! channel value for its surface. Their edge policies differ on purpose and
//! the differences are part of the observable behavior:
//!
//! - Saturation/value updates only while the pointer is in bounds; an
//!   out-of-bounds move during a drag leaves the color untouched.
//! - Hue is valid strictly inside `0 < left < width`; both edges produce no
//!   update.
//! - Alpha clamps `left` into `[0, width]` instead of rejecting it.
//!
//! Indicator positions are computed separately from channel values and are
//! tolerant of out-of-bounds pointers, so the indicator keeps tracking a
//! drag even while the color value holds still.

use swatchery_color::{Hsl, Hsv};

use crate::surface::Boundaries;

/// Bounds `value` to `[min, max]`.
#[must_use]
pub fn between(min: f64, max: f64, value: f64) -> f64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Maps an in-bounds pointer position to `(saturation, brightness)` in
/// percent (0–100 each). Returns `None` when the pointer is out of bounds.
#[must_use]
pub fn saturation_value(b: &Boundaries) -> Option<(f64, f64)> {
    if !b.is_in_bounds {
        return None;
    }
    let saturation = b.left * 100.0 / b.container_width;
    let brightness = 100.0 - b.top * 100.0 / b.container_height;
    Some((saturation, brightness))
}

/// Recomposes a full color from percent `saturation`/`brightness` while
/// preserving the current hue.
///
/// The recomposition goes through HSV without an alpha channel, so the
/// result is opaque.
#[must_use]
pub fn recompose(current: Hsl, saturation: f64, brightness: f64) -> Hsl {
    Hsv::new(current.h, saturation / 100.0, brightness / 100.0, 1.0).to_hsl()
}

/// Maps a pointer position to a hue in degrees.
///
/// Valid strictly inside the bar: `left == 0` and `left == width` both
/// return `None` and produce no update.
#[must_use]
pub fn hue(b: &Boundaries) -> Option<f64> {
    if b.left > 0.0 && b.left < b.container_width {
        let percent = b.left * 100.0 / b.container_width;
        Some(360.0 * percent / 100.0)
    } else {
        None
    }
}

/// Maps a pointer position to an alpha in `[0, 1]`, clamping out-of-range
/// positions to the nearer edge.
#[must_use]
pub fn alpha(b: &Boundaries) -> f64 {
    (between(0.0, b.container_width, b.left) * 100.0 / b.container_width) / 100.0
}

/// Indicator x relative to the surface origin.
///
/// Clamps the absolute pointer coordinate to `[0, container_left + width]`
/// before subtracting the container's left edge, matching the tolerant
/// behavior of indicator tracking.
#[must_use]
pub fn indicator_left(b: &Boundaries) -> f64 {
    let raw = b.container_left + b.left;
    between(0.0, b.container_width + b.container_left, raw) - b.container_left
}

/// Indicator y relative to the surface origin; see [`indicator_left`].
#[must_use]
pub fn indicator_top(b: &Boundaries) -> f64 {
    let raw = b.container_top + b.top;
    between(0.0, b.container_height + b.container_top, raw) - b.container_top
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Surface, SurfaceRects};
    use kurbo::{Point, Rect};

    fn bounds(rect: Rect, x: f64, y: f64) -> Boundaries {
        let mut rects = SurfaceRects::new();
        rects.capture(Surface::Saturation, rect);
        Boundaries::resolve(&rects, Surface::Saturation, Point::new(x, y)).unwrap()
    }

    #[test]
    fn between_clamps_and_passes_through() {
        assert_eq!(between(0.0, 10.0, -5.0), 0.0);
        assert_eq!(between(0.0, 10.0, 15.0), 10.0);
        assert_eq!(between(0.0, 10.0, 7.0), 7.0);
    }

    #[test]
    fn between_is_idempotent() {
        for v in [-3.0, 0.0, 4.5, 10.0, 99.0] {
            let once = between(0.0, 10.0, v);
            assert_eq!(between(0.0, 10.0, once), once);
            assert!((0.0..=10.0).contains(&once));
        }
    }

    #[test]
    fn saturation_value_spans_percent_range() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);

        let (s, v) = saturation_value(&bounds(rect, 0.0, 100.0)).unwrap();
        assert_eq!((s, v), (0.0, 0.0));

        let (s, v) = saturation_value(&bounds(rect, 200.0, 0.0)).unwrap();
        assert_eq!((s, v), (100.0, 100.0));

        let (s, v) = saturation_value(&bounds(rect, 50.0, 25.0)).unwrap();
        assert_eq!((s, v), (25.0, 75.0));
    }

    #[test]
    fn saturation_value_stays_in_range_whenever_in_bounds() {
        let rect = Rect::new(5.0, 7.0, 205.0, 87.0);
        for x in 0..=20 {
            for y in 0..=8 {
                let b = bounds(rect, 5.0 + f64::from(x) * 10.0, 7.0 + f64::from(y) * 10.0);
                assert!(b.is_in_bounds);
                let (s, v) = saturation_value(&b).unwrap();
                assert!((0.0..=100.0).contains(&s), "saturation {s} out of range");
                assert!((0.0..=100.0).contains(&v), "brightness {v} out of range");
            }
        }
    }

    #[test]
    fn saturation_value_rejects_out_of_bounds() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(saturation_value(&bounds(rect, -1.0, 50.0)).is_none());
        assert!(saturation_value(&bounds(rect, 50.0, 101.0)).is_none());
    }

    #[test]
    fn recompose_keeps_hue_and_is_opaque() {
        let current = Hsl::new(200.0, 0.3, 0.4, 0.25);
        let next = recompose(current, 50.0, 80.0);
        assert_eq!(next.h, 200.0);
        assert_eq!(next.a, 1.0);
    }

    #[test]
    fn hue_excludes_both_edges() {
        let rect = Rect::new(0.0, 0.0, 200.0, 20.0);
        assert_eq!(hue(&bounds(rect, 0.0, 10.0)), None);
        assert_eq!(hue(&bounds(rect, 200.0, 10.0)), None);
        assert_eq!(hue(&bounds(rect, -10.0, 10.0)), None);
        assert_eq!(hue(&bounds(rect, 250.0, 10.0)), None);
    }

    #[test]
    fn hue_midpoint_is_180() {
        let rect = Rect::new(0.0, 0.0, 200.0, 20.0);
        assert_eq!(hue(&bounds(rect, 100.0, 10.0)), Some(180.0));
    }

    #[test]
    fn alpha_clamps_instead_of_rejecting() {
        let rect = Rect::new(0.0, 0.0, 200.0, 20.0);
        assert_eq!(alpha(&bounds(rect, -50.0, 10.0)), 0.0);
        assert_eq!(alpha(&bounds(rect, 250.0, 10.0)), 1.0);
        assert_eq!(alpha(&bounds(rect, 50.0, 10.0)), 0.25);
    }

    #[test]
    fn indicator_tracks_within_surface() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        let b = bounds(rect, 40.0, 45.0);
        assert_eq!(indicator_left(&b), 30.0);
        assert_eq!(indicator_top(&b), 25.0);
    }

    #[test]
    fn indicator_clamps_past_the_far_edge() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        let b = bounds(rect, 400.0, 300.0);
        assert_eq!(indicator_left(&b), 100.0);
        assert_eq!(indicator_top(&b), 50.0);
    }

    #[test]
    fn indicator_clamps_absolute_coordinates_near_origin() {
        // The clamp operates on absolute coordinates, so a pointer left of
        // the hosting origin lands at -container_left, not at 0.
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        let b = bounds(rect, -5.0, -3.0);
        assert_eq!(indicator_left(&b), -10.0);
        assert_eq!(indicator_top(&b), -20.0);
    }
}
