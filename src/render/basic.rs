// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Stock renderers for the built-in object types.
//!
//! Renderers place objects with the scene-to-canvas transform and draw them
//! in an object-local frame rotated by the object's rotation. Image-backed
//! objects (markers, party members) draw a tinted placeholder box; loading
//! their artwork belongs to the host.

use crate::coords::{canvas_arena_ellipse, canvas_arena_rect, to_canvas};
use crate::geometry::arrow_stroke_extent;
use crate::model::{Arena, ArenaShape, SceneObject};
use crate::registry::{ObjectRenderer, RenderContext};
use crate::theme;
use kurbo::{Affine, BezPath, Circle, CircleSegment, Line, Point, Rect, Shape, Stroke};
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color, Fill};

use super::{LayerName, LayeredScene};

/// Parse `#rrggbb` or `#rgb`. Anything else yields `None`.
pub fn parse_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some(Color::from_rgb8(
            channel(digits.get(0..2)?)?,
            channel(digits.get(2..4)?)?,
            channel(digits.get(4..6)?)?,
        )),
        3 => {
            let short = |i: usize| channel(digits.get(i..i + 1)?).map(|v| v * 17);
            Some(Color::from_rgb8(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

/// Object fill: its color at its opacity, or the fallback gray
fn object_brush(object: &SceneObject) -> Brush {
    let color = object
        .color()
        .and_then(parse_color)
        .unwrap_or(theme::object::FALLBACK_FILL);
    let alpha = object.opacity().unwrap_or(100.0).clamp(0.0, 100.0) / 100.0;
    Brush::Solid(color.with_alpha(alpha as f32))
}

/// Canvas frame for an object with a position
fn object_frame(arena: &Arena, object: &SceneObject) -> Option<Affine> {
    let center = to_canvas(arena, object.position()?);
    let rotation = object.rotation().unwrap_or(0.0);
    Some(Affine::translate(center.to_vec2()) * Affine::rotate(rotation.to_radians()))
}

/// Fill a shape and outline it when highlighted
fn fill_with_highlight(
    scene: &mut Scene,
    frame: Affine,
    brush: &Brush,
    fill: Fill,
    shape: &impl Shape,
    ctx: &RenderContext<'_>,
) {
    scene.fill(fill, frame, brush, None, shape);
    stroke_highlight(scene, frame, shape, ctx);
}

fn stroke_highlight(scene: &mut Scene, frame: Affine, shape: &impl Shape, ctx: &RenderContext<'_>) {
    if let Some(color) = ctx.highlight.color() {
        let stroke = Stroke::new(ctx.highlight.stroke_width());
        scene.stroke(&stroke, frame, &Brush::Solid(color), None, shape);
    }
}

/// Canvas-space arena outline on the ground layer
pub fn paint_arena(layers: &mut LayeredScene, arena: &Arena) {
    let scene = layers.layer_mut(LayerName::Ground);
    let brush = Brush::Solid(theme::object::ARENA_OUTLINE);
    let stroke = Stroke::new(theme::size::HIGHLIGHT_STROKE_WIDTH);
    match arena.shape {
        ArenaShape::Rectangle => {
            scene.stroke(&stroke, Affine::IDENTITY, &brush, None, &canvas_arena_rect(arena));
        }
        ArenaShape::Circle => {
            scene.stroke(&stroke, Affine::IDENTITY, &brush, None, &canvas_arena_ellipse(arena));
        }
    }
}

// ===== Zones =====

/// Circle, rectangle, cone and donut zones
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneRenderer;

impl ObjectRenderer for ZoneRenderer {
    fn paint(&self, layers: &mut LayeredScene, object: &SceneObject, ctx: &RenderContext<'_>) {
        let Some(frame) = object_frame(ctx.arena, object) else {
            return;
        };
        let brush = object_brush(object);
        let scene = layers.layer_mut(LayerName::Default);

        match object {
            SceneObject::CircleZone(zone) => {
                let circle = Circle::new(Point::ORIGIN, zone.radius);
                fill_with_highlight(scene, frame, &brush, Fill::NonZero, &circle, ctx);
            }
            SceneObject::RectangleZone(zone) => {
                let rect = Rect::from_center_size(Point::ORIGIN, (zone.width, zone.height));
                fill_with_highlight(scene, frame, &brush, Fill::NonZero, &rect, ctx);
            }
            SceneObject::ConeZone(zone) => {
                let sweep = zone.cone_angle.to_radians();
                let start = -std::f64::consts::FRAC_PI_2 - sweep / 2.0;
                let segment = CircleSegment::new(Point::ORIGIN, zone.radius, 0.0, start, sweep);
                fill_with_highlight(scene, frame, &brush, Fill::NonZero, &segment, ctx);
            }
            SceneObject::DonutZone(zone) => {
                let mut ring = Circle::new(Point::ORIGIN, zone.radius).to_path(0.1);
                ring.extend(Circle::new(Point::ORIGIN, zone.inner_radius).to_path(0.1));
                fill_with_highlight(scene, frame, &brush, Fill::EvenOdd, &ring, ctx);
            }
            _ => {}
        }
    }
}

// ===== Arrows =====

/// Straight arrows with optional heads at either end.
///
/// The box height is the arrow's length along its local up axis; the box
/// width is the arrowhead's base.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowRenderer;

impl ArrowRenderer {
    /// Arrowhead with its stroked tip landing on `tip`, pointing along `dir`
    /// (+1 up, -1 down)
    fn head(tip: f64, dir: f64, length: f64, width: f64, stroke_width: f64) -> BezPath {
        let extent = arrow_stroke_extent(length, width, stroke_width);
        let apex = tip + dir * extent.top;
        let base = apex + dir * length;
        let mut path = BezPath::new();
        path.move_to((0.0, apex));
        path.line_to((width / 2.0, base));
        path.line_to((-width / 2.0, base));
        path.close_path();
        path
    }
}

impl ObjectRenderer for ArrowRenderer {
    fn paint(&self, layers: &mut LayeredScene, object: &SceneObject, ctx: &RenderContext<'_>) {
        let SceneObject::Arrow(arrow) = object else {
            return;
        };
        let Some(frame) = object_frame(ctx.arena, object) else {
            return;
        };
        let brush = object_brush(object);
        let scene = layers.layer_mut(LayerName::Default);

        let stroke_width = (arrow.width / 4.0).max(1.0);
        let head_length = arrow.width.min(arrow.height / 2.0);
        let top = -arrow.height / 2.0;
        let bottom = arrow.height / 2.0;

        let shaft_top = if arrow.arrow_end { top + head_length } else { top };
        let shaft_bottom = if arrow.arrow_begin { bottom - head_length } else { bottom };
        let shaft = Line::new((0.0, shaft_top), (0.0, shaft_bottom));
        scene.stroke(&Stroke::new(stroke_width), frame, &brush, None, &shaft);
        stroke_highlight(scene, frame, &shaft, ctx);

        let stroke = Stroke::new(stroke_width);
        let mut heads = Vec::with_capacity(2);
        if arrow.arrow_end {
            // Point up: apex below the box top by the stroke overhang
            heads.push(Self::head(top, 1.0, head_length, arrow.width, stroke_width));
        }
        if arrow.arrow_begin {
            heads.push(Self::head(bottom, -1.0, head_length, arrow.width, stroke_width));
        }
        for head in &heads {
            scene.fill(Fill::NonZero, frame, &brush, None, head);
            scene.stroke(&stroke, frame, &brush, None, head);
            stroke_highlight(scene, frame, head, ctx);
        }
    }
}

// ===== Actors =====

/// Enemies: a ring with a facing notch
#[derive(Debug, Clone, Copy, Default)]
pub struct EnemyRenderer;

impl ObjectRenderer for EnemyRenderer {
    fn paint(&self, layers: &mut LayeredScene, object: &SceneObject, ctx: &RenderContext<'_>) {
        let SceneObject::Enemy(enemy) = object else {
            return;
        };
        let Some(frame) = object_frame(ctx.arena, object) else {
            return;
        };
        let brush = object_brush(object);
        let scene = layers.layer_mut(LayerName::Default);

        let ring_width = (enemy.radius / 10.0).max(1.0);
        let ring = Circle::new(Point::ORIGIN, enemy.radius);
        scene.stroke(&Stroke::new(ring_width), frame, &brush, None, &ring);

        let mut notch = BezPath::new();
        let r = enemy.radius;
        notch.move_to((0.0, -r - ring_width * 2.0));
        notch.line_to((ring_width * 2.0, -r));
        notch.line_to((-ring_width * 2.0, -r));
        notch.close_path();
        scene.fill(Fill::NonZero, frame, &brush, None, &notch);
        stroke_highlight(scene, frame, &ring, ctx);
    }
}

/// Box-shaped image objects, drawn as a tinted box until artwork loads
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl ObjectRenderer for PlaceholderRenderer {
    fn paint(&self, layers: &mut LayeredScene, object: &SceneObject, ctx: &RenderContext<'_>) {
        let (Some(frame), Some(size)) = (object_frame(ctx.arena, object), object.size()) else {
            return;
        };
        let brush = object_brush(object);
        let rect = Rect::from_center_size(Point::ORIGIN, size);
        let scene = layers.layer_mut(LayerName::Default);
        fill_with_highlight(scene, frame, &brush, Fill::NonZero, &rect, ctx);
    }
}

// ===== Tethers =====

/// Lines between two objects. Tethers whose endpoints are missing or have
/// no position draw nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TetherRenderer;

impl ObjectRenderer for TetherRenderer {
    fn paint(&self, layers: &mut LayeredScene, object: &SceneObject, ctx: &RenderContext<'_>) {
        let SceneObject::Tether(tether) = object else {
            return;
        };
        let endpoint = |id| {
            ctx.objects
                .object(id)
                .and_then(SceneObject::position)
                .map(|p| to_canvas(ctx.arena, p))
        };
        let (Some(start), Some(end)) = (endpoint(tether.start_id), endpoint(tether.end_id)) else {
            return;
        };

        let line = Line::new(start, end);
        let scene = layers.layer_mut(LayerName::Foreground);
        scene.stroke(
            &Stroke::new(tether.width),
            Affine::IDENTITY,
            &object_brush(object),
            None,
            &line,
        );
        stroke_highlight(scene, Affine::IDENTITY, &line, ctx);
    }
}
