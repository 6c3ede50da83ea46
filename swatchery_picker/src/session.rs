// Copyright 2025 the Swatchery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered event channel: typed input messages folded by a single
//! state owner.
//!
//! [`Picker`] owns exactly one [`State`] and consumes [`InputEvent`]s one at
//! a time, to completion, in arrival order. There is no other writer.
//! Internally each event expands into one or two reducer [`Action`]s; a
//! pointer-move fans out into the independent indicator and color updates.
//!
//! A [`revision`](Picker::revision) counter bumps only when handling an
//! event actually changed the state, so consumers can poll it instead of
//! comparing state snapshots.

use alloc::string::String;

use kurbo::{Point, Rect};
use swatchery_color::Hsl;

use crate::reducer::{Action, State, reduce};
use crate::surface::Surface;

/// A typed input message for the picker.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A surface's rectangle became available. Fires at most once per
    /// surface per session; later measurements are ignored.
    SurfaceReady {
        /// The measured surface.
        surface: Surface,
        /// Its rectangle in the hosting coordinate system.
        rect: Rect,
    },
    /// Pointer pressed within a surface.
    PointerDown {
        /// The surface under the pointer.
        surface: Surface,
        /// Absolute pointer position. Carried for symmetry with
        /// [`InputEvent::PointerMove`]; the press only arms the drag and the
        /// first color update happens on the first subsequent move.
        position: Point,
    },
    /// Pointer moved over a surface.
    PointerMove {
        /// The surface the move was observed on.
        surface: Surface,
        /// Absolute pointer position.
        position: Point,
    },
    /// Pointer released anywhere. Ends every active drag regardless of
    /// which surface started it.
    PointerUp,
    /// External color input as a hex string. Malformed input leaves the
    /// current color unchanged.
    SetColor(String),
}

/// The single owner of one picker [`State`].
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use swatchery_picker::{InputEvent, Picker, Surface};
///
/// let mut picker = Picker::new();
/// picker.handle(InputEvent::SurfaceReady {
///     surface: Surface::Hue,
///     rect: Rect::new(0.0, 0.0, 360.0, 16.0),
/// });
/// picker.handle(InputEvent::PointerDown {
///     surface: Surface::Hue,
///     position: Point::new(90.0, 8.0),
/// });
/// picker.handle(InputEvent::PointerMove {
///     surface: Surface::Hue,
///     position: Point::new(90.0, 8.0),
/// });
/// picker.handle(InputEvent::PointerUp);
///
/// assert_eq!(picker.color().h, 90.0);
/// assert!(picker.state().drags.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Picker {
    state: State,
    revision: u64,
}

impl Picker {
    /// Creates a picker starting from opaque white.
    #[must_use]
    pub fn new() -> Self {
        Self::with_color(Hsl::WHITE)
    }

    /// Creates a picker starting from `color`.
    #[must_use]
    pub fn with_color(color: Hsl) -> Self {
        Self {
            state: State::with_color(color),
            revision: 0,
        }
    }

    /// The current state snapshot.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The current color.
    #[must_use]
    pub fn color(&self) -> Hsl {
        self.state.color
    }

    /// A counter that increases exactly when an event changed the state.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Consumes one event, returning the state after reduction.
    ///
    /// Events are expected in arrival order; each is processed to completion
    /// before the next.
    pub fn handle(&mut self, event: InputEvent) -> &State {
        let mut next = self.state.clone();
        match event {
            InputEvent::SurfaceReady { surface, rect } => {
                next = reduce(&next, &Action::CaptureSurface(surface, rect));
            }
            InputEvent::PointerDown { surface, .. } => {
                next = reduce(&next, &Action::BeginDrag(surface));
            }
            InputEvent::PointerMove { surface, position } => {
                // Indicator and color writes are disjoint; the order here is
                // arbitrary and not observable.
                next = reduce(&next, &Action::UpdateIndicator(surface, position));
                next = reduce(&next, &Action::UpdateColor(surface, position));
            }
            InputEvent::PointerUp => {
                next = reduce(&next, &Action::EndAllDrags);
            }
            InputEvent::SetColor(input) => {
                next = reduce(&next, &Action::SetColor(input));
            }
        }
        if next != self.state {
            self.state = next;
            self.revision += 1;
        }
        &self.state
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn starts_white_at_revision_zero() {
        let picker = Picker::new();
        assert_eq!(picker.color(), Hsl::WHITE);
        assert_eq!(picker.revision(), 0);
    }

    #[test]
    fn with_color_seeds_the_initial_state() {
        let seed = Hsl::new(30.0, 0.5, 0.5, 0.9);
        let picker = Picker::with_color(seed);
        assert_eq!(picker.color(), seed);
        assert_eq!(picker.revision(), 0);
    }

    #[test]
    fn revision_bumps_only_on_observable_change() {
        let mut picker = Picker::new();
        picker.handle(InputEvent::SurfaceReady {
            surface: Surface::Hue,
            rect: Rect::new(0.0, 0.0, 360.0, 16.0),
        });
        assert_eq!(picker.revision(), 1);

        // Second capture for the same surface is ignored: no bump.
        picker.handle(InputEvent::SurfaceReady {
            surface: Surface::Hue,
            rect: Rect::new(1.0, 1.0, 2.0, 2.0),
        });
        assert_eq!(picker.revision(), 1);

        // Move without a drag in progress: no bump.
        picker.handle(InputEvent::PointerMove {
            surface: Surface::Hue,
            position: Point::new(90.0, 8.0),
        });
        assert_eq!(picker.revision(), 1);
    }

    #[test]
    fn repeated_identical_moves_do_not_bump_revision() {
        let mut picker = Picker::new();
        picker.handle(InputEvent::SurfaceReady {
            surface: Surface::Hue,
            rect: Rect::new(0.0, 0.0, 360.0, 16.0),
        });
        picker.handle(InputEvent::PointerDown {
            surface: Surface::Hue,
            position: Point::new(90.0, 8.0),
        });
        picker.handle(InputEvent::PointerMove {
            surface: Surface::Hue,
            position: Point::new(90.0, 8.0),
        });
        let after_first = picker.revision();

        picker.handle(InputEvent::PointerMove {
            surface: Surface::Hue,
            position: Point::new(90.0, 8.0),
        });
        assert_eq!(picker.revision(), after_first);
    }

    #[test]
    fn set_color_event_parses_and_rejects() {
        let mut picker = Picker::new();
        picker.handle(InputEvent::SetColor("#ff0000".to_string()));
        assert_eq!(picker.color().l, 0.5);
        let rev = picker.revision();

        picker.handle(InputEvent::SetColor("garbage".to_string()));
        assert_eq!(picker.color().l, 0.5);
        assert_eq!(picker.revision(), rev);
    }
}
