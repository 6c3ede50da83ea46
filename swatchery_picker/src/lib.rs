// Copyright 2025 the Swatchery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=swatchery_picker --heading-base-level=0

//! Swatchery Picker: drag-to-value interaction state for a color picker.
//!
//! This crate turns an ordered stream of pointer events across three named
//! surfaces — a saturation/value square, a hue bar, and an alpha bar — into
//! a single consistent color state. It is headless: no rendering surface, no
//! DOM, no framework. A hosting layer feeds it typed messages and reads back
//! state snapshots; drawing the surfaces, indicators, and swatch is the
//! host's job.
//!
//! The pieces, leaf first:
//!
//! - [`surface`]: named surfaces, one-shot rectangle capture, and the
//!   geometry resolver mapping absolute pointer positions to
//!   surface-relative ones.
//! - [`mappers`]: the pure position-to-channel mappers and the `between`
//!   clamping helper. Each surface has its own edge policy and these
//!   asymmetries are deliberate (see the module docs).
//! - [`drag`]: the per-surface drag flags. Pointer-down arms one surface;
//!   pointer-up anywhere disarms all of them.
//! - [`reducer`]: the pure, total fold of [`Action`]s into [`State`]
//!   values. Inapplicable actions are no-ops, never errors.
//! - [`session`]: the ordered event channel. One [`Picker`] owns one
//!   [`State`], consumes [`InputEvent`]s in arrival order, and tracks a
//!   revision counter for cheap change detection.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use swatchery_picker::{InputEvent, Picker, Surface};
//!
//! let mut picker = Picker::new();
//!
//! // The host measures the hue bar once, when it first exists.
//! picker.handle(InputEvent::SurfaceReady {
//!     surface: Surface::Hue,
//!     rect: Rect::new(0.0, 0.0, 360.0, 16.0),
//! });
//!
//! // Press on the bar, drag to x = 240, release.
//! picker.handle(InputEvent::PointerDown {
//!     surface: Surface::Hue,
//!     position: Point::new(10.0, 8.0),
//! });
//! picker.handle(InputEvent::PointerMove {
//!     surface: Surface::Hue,
//!     position: Point::new(240.0, 8.0),
//! });
//! picker.handle(InputEvent::PointerUp);
//!
//! assert_eq!(picker.color().h, 240.0);
//! assert_eq!(picker.state().hue_indicator.left, 240.0);
//! ```
//!
//! ## Model notes
//!
//! - The color is stored as [`swatchery_color::Hsl`] with hue in degrees
//!   and the remaining channels in 0–1; every reduction step keeps all
//!   channels in range, with no observable transient out-of-range state.
//! - Surface rectangles are captured once per session and never
//!   re-measured; resize handling is intentionally out of scope.
//! - Indicator positions and color values are computed independently from
//!   the same move event and may be applied in either order; they never
//!   write the same field.
//! - Everything is single-threaded and event-driven: one event is reduced
//!   to completion before the next is considered.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drag;
pub mod mappers;
pub mod reducer;
pub mod session;
pub mod surface;

pub use reducer::{Action, State, reduce};
pub use session::{InputEvent, Picker};
pub use surface::{Boundaries, IndicatorPosition, Surface, SurfaceRects};
