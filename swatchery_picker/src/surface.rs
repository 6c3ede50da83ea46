// Copyright 2025 the Swatchery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surfaces, their captured rectangles, and pointer geometry resolution.
//!
//! A *surface* is one of the three draggable regions of the picker. Each
//! surface's rectangle is measured by the host exactly once, when the
//! surface first becomes available, and cached here for the rest of the
//! session; later captures for the same surface are ignored. Resolving a
//! pointer event against a surface whose rectangle has not arrived yet
//! yields `None`, which callers treat as a no-op.

use kurbo::{Point, Rect};

/// A named draggable region of the picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The saturation/value square.
    Saturation,
    /// The hue bar.
    Hue,
    /// The alpha bar.
    Alpha,
}

impl Surface {
    /// All surfaces, in a fixed order.
    pub const ALL: [Self; 3] = [Self::Saturation, Self::Hue, Self::Alpha];
}

/// The cached rectangles of the three surfaces, in the hosting coordinate
/// system.
///
/// Capture is one-shot per surface per session: the first rectangle wins and
/// subsequent measurements are ignored. There is no re-measurement on
/// resize.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceRects {
    saturation: Option<Rect>,
    hue: Option<Rect>,
    alpha: Option<Rect>,
}

impl SurfaceRects {
    /// Creates an empty cache with no rectangles captured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captured rectangle for `surface`, if any.
    #[must_use]
    pub fn get(&self, surface: Surface) -> Option<Rect> {
        match surface {
            Surface::Saturation => self.saturation,
            Surface::Hue => self.hue,
            Surface::Alpha => self.alpha,
        }
    }

    /// Returns `true` once `surface`'s rectangle has been captured.
    #[must_use]
    pub fn is_captured(&self, surface: Surface) -> bool {
        self.get(surface).is_some()
    }

    /// Captures `rect` for `surface` unless one was captured already.
    pub fn capture(&mut self, surface: Surface, rect: Rect) {
        let slot = match surface {
            Surface::Saturation => &mut self.saturation,
            Surface::Hue => &mut self.hue,
            Surface::Alpha => &mut self.alpha,
        };
        if slot.is_none() {
            *slot = Some(rect);
        }
    }
}

/// A pointer event resolved against a captured surface rectangle.
///
/// `left` and `top` are the pointer position relative to the surface's
/// origin; they may be negative or exceed the container dimensions, which is
/// what `is_in_bounds` reports.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Boundaries {
    /// Left edge of the surface in the hosting coordinate system.
    pub container_left: f64,
    /// Top edge of the surface in the hosting coordinate system.
    pub container_top: f64,
    /// Width of the surface.
    pub container_width: f64,
    /// Height of the surface.
    pub container_height: f64,
    /// Pointer x relative to the surface's left edge.
    pub left: f64,
    /// Pointer y relative to the surface's top edge.
    pub top: f64,
    /// Whether the relative position lies within the surface rectangle
    /// (edges inclusive).
    pub is_in_bounds: bool,
}

impl Boundaries {
    /// Resolves an absolute `pointer` position against `surface`.
    ///
    /// Returns `None` while the surface's rectangle has not been captured;
    /// geometry capture is asynchronous relative to user input, so this race
    /// is expected at startup and callers must treat it as a no-op.
    #[must_use]
    pub fn resolve(rects: &SurfaceRects, surface: Surface, pointer: Point) -> Option<Self> {
        let rect = rects.get(surface)?;
        let left = pointer.x - rect.x0;
        let top = pointer.y - rect.y0;
        let is_in_bounds =
            left >= 0.0 && left <= rect.width() && top >= 0.0 && top <= rect.height();
        Some(Self {
            container_left: rect.x0,
            container_top: rect.y0,
            container_width: rect.width(),
            container_height: rect.height(),
            left,
            top,
            is_in_bounds,
        })
    }
}

/// Pixel position of a surface's indicator, relative to that surface's
/// origin.
///
/// Derived from pointer events while dragging; never set directly. `top` is
/// only meaningful for the saturation square and stays 0 for the bars.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct IndicatorPosition {
    /// Horizontal offset from the surface's left edge, in pixels.
    pub left: f64,
    /// Vertical offset from the surface's top edge, in pixels.
    pub top: f64,
}
