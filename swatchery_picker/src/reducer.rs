// Copyright 2025 the Swatchery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The color state reducer: folds [`Action`]s into immutable [`State`]
//! values.
//!
//! [`reduce`] is pure and total. Every action maps every state to exactly
//! one new state; actions that do not apply (an update for an axis that is
//! not dragging, a move against an uncaptured surface, a malformed color
//! string) return the input state unchanged rather than failing.
//!
//! [`Action::UpdateIndicator`] and [`Action::UpdateColor`] from the same
//! move event write disjoint fields, so they may be applied in either order
//! with the same observable result.

use alloc::string::String;

use kurbo::{Point, Rect};
use swatchery_color::{Hsl, Rgba};

use crate::drag::DragAxes;
use crate::mappers;
use crate::surface::{Boundaries, IndicatorPosition, Surface, SurfaceRects};

/// The aggregate picker state.
///
/// Holds the current color, the captured surface rectangles, the drag
/// flags, and the three indicator positions. Never mutated in place;
/// [`reduce`] produces a fresh value for every transition.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    /// The current color.
    pub color: Hsl,
    /// Captured surface rectangles.
    pub rects: SurfaceRects,
    /// Which surfaces are currently being dragged.
    pub drags: DragAxes,
    /// Indicator position within the saturation/value square.
    pub saturation_indicator: IndicatorPosition,
    /// Indicator position within the hue bar (`top` stays 0).
    pub hue_indicator: IndicatorPosition,
    /// Indicator position within the alpha bar (`top` stays 0).
    pub alpha_indicator: IndicatorPosition,
}

impl State {
    /// The initial state: opaque white, nothing captured, nothing dragging,
    /// indicators at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_color(Hsl::WHITE)
    }

    /// Like [`State::new`] but starting from `color`.
    #[must_use]
    pub fn with_color(color: Hsl) -> Self {
        Self {
            color,
            rects: SurfaceRects::new(),
            drags: DragAxes::empty(),
            saturation_indicator: IndicatorPosition::default(),
            hue_indicator: IndicatorPosition::default(),
            alpha_indicator: IndicatorPosition::default(),
        }
    }

    /// Returns the indicator position for `surface`.
    #[must_use]
    pub fn indicator(&self, surface: Surface) -> IndicatorPosition {
        match surface {
            Surface::Saturation => self.saturation_indicator,
            Surface::Hue => self.hue_indicator,
            Surface::Alpha => self.alpha_indicator,
        }
    }

    fn indicator_mut(&mut self, surface: Surface) -> &mut IndicatorPosition {
        match surface {
            Surface::Saturation => &mut self.saturation_indicator,
            Surface::Hue => &mut self.hue_indicator,
            Surface::Alpha => &mut self.alpha_indicator,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// A single reduction step.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Cache a surface's rectangle. One-shot: ignored once the surface has a
    /// rectangle.
    CaptureSurface(Surface, Rect),
    /// Pointer-down within a surface: mark it as dragging.
    BeginDrag(Surface),
    /// Global pointer-up: end every active drag.
    EndAllDrags,
    /// Pointer-move while dragging: recompute the color channel(s) owned by
    /// this surface from the absolute pointer position.
    UpdateColor(Surface, Point),
    /// Pointer-move while dragging: recompute this surface's indicator
    /// position from the absolute pointer position.
    UpdateIndicator(Surface, Point),
    /// External color input as a hex string; malformed input leaves the
    /// prior color unchanged.
    SetColor(String),
}

/// Applies `action` to `state`, returning the next state.
#[must_use]
pub fn reduce(state: &State, action: &Action) -> State {
    match action {
        Action::CaptureSurface(surface, rect) => {
            let mut next = state.clone();
            next.rects.capture(*surface, *rect);
            next
        }
        Action::BeginDrag(surface) => {
            let mut next = state.clone();
            next.drags.begin(*surface);
            next
        }
        Action::EndAllDrags => {
            let mut next = state.clone();
            next.drags.end_all();
            next
        }
        Action::UpdateColor(surface, position) => update_color(state, *surface, *position),
        Action::UpdateIndicator(surface, position) => update_indicator(state, *surface, *position),
        Action::SetColor(input) => set_color(state, input),
    }
}

fn update_color(state: &State, surface: Surface, position: Point) -> State {
    if !state.drags.is_dragging(surface) {
        return state.clone();
    }
    let Some(b) = Boundaries::resolve(&state.rects, surface, position) else {
        return state.clone();
    };
    let color = match surface {
        Surface::Saturation => match mappers::saturation_value(&b) {
            Some((saturation, brightness)) => mappers::recompose(state.color, saturation, brightness),
            None => return state.clone(),
        },
        Surface::Hue => match mappers::hue(&b) {
            Some(h) => Hsl { h, ..state.color },
            None => return state.clone(),
        },
        Surface::Alpha => Hsl {
            a: mappers::alpha(&b),
            ..state.color
        },
    };
    State {
        color,
        ..state.clone()
    }
}

fn update_indicator(state: &State, surface: Surface, position: Point) -> State {
    if !state.drags.is_dragging(surface) {
        return state.clone();
    }
    let Some(b) = Boundaries::resolve(&state.rects, surface, position) else {
        return state.clone();
    };
    let mut next = state.clone();
    let indicator = next.indicator_mut(surface);
    indicator.left = mappers::indicator_left(&b);
    if surface == Surface::Saturation {
        indicator.top = mappers::indicator_top(&b);
    }
    next
}

fn set_color(state: &State, input: &str) -> State {
    match Rgba::from_hex(input) {
        Some(rgba) => State {
            color: rgba.to_hsl(),
            ..state.clone()
        },
        None => state.clone(),
    }
}
