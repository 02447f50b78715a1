// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Control point handles and their painting.
//!
//! Handles are recomputed on every paint from committed state plus any live
//! pointer state. They are never stored on the object.

use super::Cursor;
use crate::theme;
use kurbo::{Affine, BezPath, Circle, Point, Rect, Stroke};
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Fill};

/// Identifier for one logical degree of freedom.
///
/// Several handles may share an id to offer equivalent grab points, such as
/// the four cardinal handles of a circle's radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub u16);

/// Visual shape of a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleStyle {
    #[default]
    Square,
    Diamond,
    Circle,
}

/// A draggable control point, positioned in object-local, pre-rotation
/// coordinates (canvas axes, origin at the object's center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub id: HandleId,
    pub x: f64,
    pub y: f64,
    pub cursor: Cursor,
    pub style: HandleStyle,
}

impl Handle {
    pub fn new(id: HandleId, position: Point, cursor: Cursor, style: HandleStyle) -> Self {
        Self {
            id,
            x: position.x,
            y: position.y,
            cursor,
            style,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether a local point falls on this handle
    pub fn contains(&self, local: Point, size: f64) -> bool {
        let half = size / 2.0;
        match self.style {
            HandleStyle::Circle => (local - self.position()).hypot() <= half,
            HandleStyle::Square | HandleStyle::Diamond => {
                let d = local - self.position();
                d.x.abs() <= half && d.y.abs() <= half
            }
        }
    }
}

/// Inputs to a shape's handle and state functions.
///
/// `pointer_pos` is the live handle center in object-local, pre-rotation
/// coordinates; it is only set while a handle is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleProps {
    pub pointer_pos: Option<Point>,
    pub active_handle_id: Option<HandleId>,
}

impl HandleProps {
    /// Props describing committed state only
    pub fn idle() -> Self {
        Self::default()
    }

    /// Live pointer position if `id` is the handle being dragged
    pub fn live_pointer(&self, id: HandleId) -> Option<Point> {
        match (self.pointer_pos, self.active_handle_id) {
            (Some(pos), Some(active)) if active == id => Some(pos),
            _ => None,
        }
    }

    pub fn is_active(&self, id: HandleId) -> bool {
        self.active_handle_id == Some(id)
    }
}

/// Paint one handle at its local position through `transform`
pub(crate) fn paint_handle(
    scene: &mut Scene,
    transform: Affine,
    handle: &Handle,
    size: f64,
    active: bool,
) {
    let half = size / 2.0;
    let center = handle.position();
    let fill = Brush::Solid(if active {
        theme::handle::ACTIVE_FILL
    } else {
        theme::handle::FILL
    });
    let stroke_brush = Brush::Solid(theme::handle::STROKE);
    let stroke = Stroke::new(theme::size::HANDLE_STROKE_WIDTH);

    match handle.style {
        HandleStyle::Square => {
            let rect = Rect::from_center_size(center, (size, size));
            scene.fill(Fill::NonZero, transform, &fill, None, &rect);
            scene.stroke(&stroke, transform, &stroke_brush, None, &rect);
        }
        HandleStyle::Diamond => {
            let mut path = BezPath::new();
            path.move_to((center.x, center.y - half));
            path.line_to((center.x + half, center.y));
            path.line_to((center.x, center.y + half));
            path.line_to((center.x - half, center.y));
            path.close_path();
            scene.fill(Fill::NonZero, transform, &fill, None, &path);
            scene.stroke(&stroke, transform, &stroke_brush, None, &path);
        }
        HandleStyle::Circle => {
            let circle = Circle::new(center, half);
            scene.fill(Fill::NonZero, transform, &fill, None, &circle);
            scene.stroke(&stroke, transform, &stroke_brush, None, &circle);
        }
    }
}

/// Paint a dashed reference outline through `transform`
pub(crate) fn paint_border(scene: &mut Scene, transform: Affine, border: &BezPath) {
    let stroke = Stroke::new(theme::size::BORDER_STROKE_WIDTH)
        .with_dashes(0.0, theme::size::BORDER_DASH);
    let brush = Brush::Solid(theme::handle::BORDER);
    scene.stroke(&stroke, transform, &brush, None, border);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: HandleId = HandleId(0);
    const ANGLE: HandleId = HandleId(1);

    #[test]
    fn live_pointer_only_for_active_handle() {
        let props = HandleProps {
            pointer_pos: Some(Point::new(3.0, 4.0)),
            active_handle_id: Some(RADIUS),
        };
        assert_eq!(props.live_pointer(RADIUS), Some(Point::new(3.0, 4.0)));
        assert_eq!(props.live_pointer(ANGLE), None);
        assert_eq!(HandleProps::idle().live_pointer(RADIUS), None);
    }

    #[test]
    fn contains_respects_style() {
        let square = Handle::new(RADIUS, Point::new(10.0, 10.0), Cursor::Move, HandleStyle::Square);
        assert!(square.contains(Point::new(14.0, 14.0), 10.0));
        assert!(!square.contains(Point::new(16.0, 10.0), 10.0));

        let circle = Handle {
            style: HandleStyle::Circle,
            ..square
        };
        // Inside the square's corner but outside the circle
        assert!(!circle.contains(Point::new(14.0, 14.0), 10.0));
        assert!(circle.contains(Point::new(13.0, 13.0), 10.0));
    }
}
