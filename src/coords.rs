// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene ↔ canvas coordinate transform and arena-region queries.
//!
//! Scene space is Y-up with its origin at the arena center. Canvas space is
//! Y-down with its origin at the top-left corner of the padded arena.
//!
//! Rotations follow two conventions: the canvas rotates clockwise-positive
//! (what a rotated group on screen does), while `rotate_coord` turns by the
//! *negated* angle so it undoes a canvas rotation. Callers track the sign
//! explicitly.

use crate::editing::Cursor;
use crate::model::{Arena, ArenaShape};
use kurbo::{Ellipse, Point, Rect, Size, Vec2};

/// Convert a scene-space point to canvas space
pub fn to_canvas(arena: &Arena, p: Point) -> Point {
    let center = canvas_center(arena);
    Point::new(center.x + p.x, center.y - p.y)
}

/// Convert a canvas-space point to scene space, rounded to whole units
pub fn to_scene(arena: &Arena, p: Point) -> Point {
    let center = canvas_center(arena);
    Point::new((p.x - center.x).round(), (center.y - p.y).round())
}

/// Canvas position of the scene origin
pub fn canvas_center(arena: &Arena) -> Point {
    Point::new(
        arena.width / 2.0 + arena.padding,
        arena.height / 2.0 + arena.padding,
    )
}

/// Rotate `p` about `center` by the negative of `angle` (degrees).
pub fn rotate_coord(p: Point, angle: f64, center: Point) -> Point {
    let (sin, cos) = (-angle).to_radians().sin_cos();
    let d = p - center;
    center + Vec2::new(cos * d.x - sin * d.y, sin * d.x + cos * d.y)
}

/// `rotate_coord` about the origin
pub fn rotate_about_origin(p: Point, angle: f64) -> Point {
    rotate_coord(p, angle, Point::ORIGIN)
}

/// Soft angle detent.
///
/// When `angle` lies within `tolerance` of a multiple of `division`, it
/// snaps to that multiple; otherwise it is returned unchanged. Negative
/// angles snap the same way as positive ones.
pub fn snap_angle(angle: f64, division: f64, tolerance: f64) -> f64 {
    if division <= 0.0 {
        return angle;
    }

    let remainder = angle.rem_euclid(division);
    if remainder <= tolerance || remainder >= division - tolerance {
        (angle / division).round() * division
    } else {
        angle
    }
}

const RESIZE_CURSORS: [Cursor; 4] = [
    Cursor::NsResize,
    Cursor::NeswResize,
    Cursor::EwResize,
    Cursor::NwseResize,
];

/// Resize cursor for a handle pointing `angle` degrees clockwise from up.
///
/// The 360° range splits into eight 45° octants centered on the compass
/// directions; opposite octants share a cursor.
pub fn resize_cursor(angle: f64) -> Cursor {
    let shifted = angle.rem_euclid(360.0) - 22.5;
    let octant = (shifted / 45.0).floor() as i64 + 1;
    RESIZE_CURSORS[octant.rem_euclid(4) as usize]
}

// ===== Arena regions =====

/// Full canvas size including padding
pub fn canvas_size(arena: &Arena) -> Size {
    Size::new(
        arena.width + 2.0 * arena.padding,
        arena.height + 2.0 * arena.padding,
    )
}

/// Arena bounds in canvas space
pub fn canvas_arena_rect(arena: &Arena) -> Rect {
    Rect::new(
        arena.padding,
        arena.padding,
        arena.padding + arena.width,
        arena.padding + arena.height,
    )
}

/// Arena ellipse in canvas space, for circular arenas
pub fn canvas_arena_ellipse(arena: &Arena) -> Ellipse {
    Ellipse::from_rect(canvas_arena_rect(arena))
}

/// Arena bounds in scene space (Y-up, so `y0` is the bottom edge)
pub fn scene_arena_rect(arena: &Arena) -> Rect {
    Rect::new(
        -arena.width / 2.0,
        -arena.height / 2.0,
        arena.width / 2.0,
        arena.height / 2.0,
    )
}

/// Whether a scene point lies on or inside the arena outline
pub fn is_within_arena(arena: &Arena, p: Point) -> bool {
    let half_w = arena.width / 2.0;
    let half_h = arena.height / 2.0;
    match arena.shape {
        ArenaShape::Rectangle => p.x.abs() <= half_w && p.y.abs() <= half_h,
        ArenaShape::Circle => {
            if half_w <= 0.0 || half_h <= 0.0 {
                return false;
            }
            let nx = p.x / half_w;
            let ny = p.y / half_h;
            nx * nx + ny * ny <= 1.0
        }
    }
}
