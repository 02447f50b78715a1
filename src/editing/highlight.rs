// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection and spotlight decoration.
//!
//! An object's own selection or spotlight always wins. Otherwise the
//! resolver walks the object's position-parent references toward the root
//! and returns a dimmer "connected" variant when an ancestor is decorated.
//! The reference graph is editable from outside, so the walk is bounded
//! against cycles and runaway depth.

use super::Selection;
use crate::model::{ObjectId, ObjectLookup};
use crate::{settings, theme};
use masonry::vello::peniko::Color;
use std::collections::{HashSet, VecDeque};

/// What the pointer currently does on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Normal,
    /// Drawing tethers between objects
    Tether,
}

/// Decoration for one object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    Selected,
    /// Selected, and the resize widget should be shown
    SelectedResizable,
    Spotlighted,
    ConnectedSelected,
    ConnectedSpotlighted,
}

impl Highlight {
    /// Outline color, or `None` for undecorated objects
    pub fn color(self) -> Option<Color> {
        match self {
            Highlight::None => None,
            Highlight::Selected | Highlight::SelectedResizable => Some(theme::highlight::SELECTED),
            Highlight::Spotlighted => Some(theme::highlight::SPOTLIGHT),
            Highlight::ConnectedSelected => Some(theme::highlight::CONNECTED_SELECTED),
            Highlight::ConnectedSpotlighted => Some(theme::highlight::CONNECTED_SPOTLIGHT),
        }
    }

    pub fn is_connected(self) -> bool {
        matches!(
            self,
            Highlight::ConnectedSelected | Highlight::ConnectedSpotlighted
        )
    }

    pub fn is_selected(self) -> bool {
        matches!(self, Highlight::Selected | Highlight::SelectedResizable)
    }

    /// Outline width for this decoration
    pub fn stroke_width(self) -> f64 {
        if self.is_selected() {
            theme::size::SELECTED_STROKE_WIDTH
        } else {
            theme::size::HIGHLIGHT_STROKE_WIDTH
        }
    }
}

/// Inputs to [`resolve_highlight`]
#[derive(Clone, Copy)]
pub struct HighlightContext<'a> {
    pub selection: &'a Selection,
    pub spotlight: &'a Selection,
    pub mode: EditMode,
    pub objects: &'a dyn ObjectLookup,
}

impl<'a> HighlightContext<'a> {
    pub fn new(
        selection: &'a Selection,
        spotlight: &'a Selection,
        mode: EditMode,
        objects: &'a dyn ObjectLookup,
    ) -> Self {
        Self {
            selection,
            spotlight,
            mode,
            objects,
        }
    }
}

/// Decoration for object `id`
pub fn resolve_highlight(id: ObjectId, ctx: &HighlightContext<'_>) -> Highlight {
    if ctx.selection.contains(&id) {
        return if shows_resizer(id, ctx) {
            Highlight::SelectedResizable
        } else {
            Highlight::Selected
        };
    }
    if ctx.spotlight.contains(&id) {
        return Highlight::Spotlighted;
    }
    connected_highlight(id, ctx)
}

fn shows_resizer(id: ObjectId, ctx: &HighlightContext<'_>) -> bool {
    if ctx.mode != EditMode::Normal || ctx.selection.only() != Some(id) {
        return false;
    }
    ctx.objects
        .object(id)
        .is_some_and(|object| object.is_moveable() && !object.is_pinned())
}

/// Breadth-first walk over position parents. A selected ancestor anywhere in
/// the bounded walk beats a spotlighted one.
fn connected_highlight(id: ObjectId, ctx: &HighlightContext<'_>) -> Highlight {
    let Some(object) = ctx.objects.object(id) else {
        return Highlight::None;
    };

    let mut visited = HashSet::from([id]);
    let mut queue: VecDeque<(ObjectId, usize)> =
        object.position_parents().into_iter().map(|p| (p, 1)).collect();
    let mut spotlighted = false;

    while let Some((parent, depth)) = queue.pop_front() {
        if !visited.insert(parent) {
            continue;
        }
        if depth > settings::highlight::MAX_PARENT_DEPTH {
            tracing::warn!(
                "Highlight: parent walk from {} stopped at depth {}",
                id,
                settings::highlight::MAX_PARENT_DEPTH
            );
            break;
        }
        if ctx.selection.contains(&parent) {
            return Highlight::ConnectedSelected;
        }
        spotlighted |= ctx.spotlight.contains(&parent);

        if let Some(next) = ctx.objects.object(parent) {
            queue.extend(next.position_parents().into_iter().map(|p| (p, depth + 1)));
        }
    }

    if spotlighted {
        Highlight::ConnectedSpotlighted
    } else {
        Highlight::None
    }
}
