// Copyright 2025 the Swatchery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-surface drag flags.
//!
//! Each surface has an independent dragging bit. A pointer-down on a surface
//! sets that surface's bit; a pointer-up anywhere clears all three at once,
//! which is the only cancellation primitive in the picker. Move events never
//! change the flags, they are only gated by them.
//!
//! More than one bit can be set at a time. That combination is not reachable
//! from a single pointer but it is tolerated rather than prevented; the
//! global pointer-up clears the whole set regardless.

use crate::surface::Surface;

bitflags::bitflags! {
    /// Which surfaces currently own an active drag.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DragAxes: u8 {
        /// The saturation/value square is being dragged.
        const SATURATION = 1 << 0;
        /// The hue bar is being dragged.
        const HUE = 1 << 1;
        /// The alpha bar is being dragged.
        const ALPHA = 1 << 2;
    }
}

impl Default for DragAxes {
    fn default() -> Self {
        Self::empty()
    }
}

impl DragAxes {
    /// Returns the flag bit for `surface`.
    #[must_use]
    pub const fn bit(surface: Surface) -> Self {
        match surface {
            Surface::Saturation => Self::SATURATION,
            Surface::Hue => Self::HUE,
            Surface::Alpha => Self::ALPHA,
        }
    }

    /// Marks `surface` as dragging (pointer-down within that surface).
    pub fn begin(&mut self, surface: Surface) {
        self.insert(Self::bit(surface));
    }

    /// Ends every active drag (global pointer-up).
    pub fn end_all(&mut self) {
        *self = Self::empty();
    }

    /// Returns `true` while `surface` is being dragged.
    #[must_use]
    pub fn is_dragging(&self, surface: Surface) -> bool {
        self.contains(Self::bit(surface))
    }
}
