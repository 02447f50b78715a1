// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Bounding-box resize and rotate widget for box-shaped objects.
//!
//! The widget keeps a live node (center, rotation, scale over a base size)
//! that anchors and the rotater update while dragging. Renderers draw the
//! object through [`ResizerNode::transform`] mid-drag. On release the scale is
//! folded into absolute width/height and the node resets to unit scale, so
//! repeated transforms never compound floating point error.

use super::{ControlPointDelegate, Cursor};
use crate::coords::{resize_cursor, rotate_about_origin, snap_angle, to_canvas, to_scene};
use crate::geometry::{canvas_compass_angle, normalize_degrees};
use crate::model::{Arena, Dispatch, ObjectBox, SceneAction, SceneObject};
use crate::render::{LayerName, LayeredScene};
use crate::{settings, theme};
use kurbo::{Affine, Circle, Line, Point, Rect, Size, Stroke, Vec2};
use masonry::vello::peniko::{Brush, Fill};

// ===== Config =====

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizerConfig {
    /// Smallest width or height a proposal may have
    pub min_size: f64,
    pub rotation_snap_division: f64,
    pub rotation_snap_tolerance: f64,
    pub handle_size_min: f64,
    pub handle_size_max: f64,
    /// Anchor size as a fraction of the box's smaller side
    pub handle_size_ratio: f64,
    /// Distance of the rotater above the top edge
    pub rotater_offset: f64,
    /// Corner anchors scale both sides by the same factor
    pub keep_ratio: bool,
    /// Anchors scale about the center instead of the opposite side
    pub centered_scaling: bool,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            min_size: settings::resizer::MIN_SIZE,
            rotation_snap_division: settings::resizer::ROTATION_SNAP_DIVISION,
            rotation_snap_tolerance: settings::resizer::ROTATION_SNAP_TOLERANCE,
            handle_size_min: settings::resizer::HANDLE_SIZE_MIN,
            handle_size_max: settings::resizer::HANDLE_SIZE_MAX,
            handle_size_ratio: settings::resizer::HANDLE_SIZE_RATIO,
            rotater_offset: settings::resizer::ROTATER_OFFSET,
            keep_ratio: false,
            centered_scaling: false,
        }
    }
}

// ===== Anchors =====

/// A grab point on the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleRight,
    BottomRight,
    BottomCenter,
    BottomLeft,
    MiddleLeft,
    Rotater,
}

impl Anchor {
    pub const RESIZE: [Anchor; 8] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::MiddleRight,
        Anchor::BottomRight,
        Anchor::BottomCenter,
        Anchor::BottomLeft,
        Anchor::MiddleLeft,
    ];

    /// Which sides this anchor moves, as -1/0/+1 per local axis (y down)
    pub fn direction(self) -> Vec2 {
        match self {
            Anchor::TopLeft => Vec2::new(-1.0, -1.0),
            Anchor::TopCenter | Anchor::Rotater => Vec2::new(0.0, -1.0),
            Anchor::TopRight => Vec2::new(1.0, -1.0),
            Anchor::MiddleRight => Vec2::new(1.0, 0.0),
            Anchor::BottomRight => Vec2::new(1.0, 1.0),
            Anchor::BottomCenter => Vec2::new(0.0, 1.0),
            Anchor::BottomLeft => Vec2::new(-1.0, 1.0),
            Anchor::MiddleLeft => Vec2::new(-1.0, 0.0),
        }
    }

    pub fn is_corner(self) -> bool {
        let d = self.direction();
        self != Anchor::Rotater && d.x != 0.0 && d.y != 0.0
    }

    /// Compass angle of the anchor seen from the box center, unrotated
    fn base_angle(self) -> f64 {
        match self {
            Anchor::TopCenter | Anchor::Rotater => 0.0,
            Anchor::TopRight => 45.0,
            Anchor::MiddleRight => 90.0,
            Anchor::BottomRight => 135.0,
            Anchor::BottomCenter => 180.0,
            Anchor::BottomLeft => 225.0,
            Anchor::MiddleLeft => 270.0,
            Anchor::TopLeft => 315.0,
        }
    }
}

// ===== Node =====

/// Live widget transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizerNode {
    /// Canvas position of the box center
    pub center: Point,
    /// Degrees, clockwise as displayed
    pub rotation: f64,
    pub scale: Vec2,
    /// Size at unit scale
    pub base: Size,
}

impl ResizerNode {
    /// Base size is floored at `min_size` so scale stays finite for
    /// degenerate boxes.
    fn from_box(arena: &Arena, object_box: ObjectBox, min_size: f64) -> Self {
        Self {
            center: to_canvas(arena, Point::new(object_box.x, object_box.y)),
            rotation: object_box.rotation,
            scale: Vec2::new(1.0, 1.0),
            base: Size::new(object_box.width.max(min_size), object_box.height.max(min_size)),
        }
    }

    /// Displayed size
    pub fn size(&self) -> Size {
        Size::new(self.base.width * self.scale.x, self.base.height * self.scale.y)
    }

    /// Local frame (rotation only, unit scale) to canvas
    pub fn frame(&self) -> Affine {
        Affine::translate(self.center.to_vec2()) * Affine::rotate(self.rotation.to_radians())
    }

    /// Full node transform, for drawing the object at its base size
    pub fn transform(&self) -> Affine {
        self.frame() * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }
}

// ===== Session =====

#[derive(Debug, Clone, Copy, PartialEq)]
enum ResizeSession {
    Idle,
    Dragging {
        anchor: Anchor,
        /// Node when the drag began
        start: ResizerNode,
        /// Canvas pointer at grab time
        grab: Point,
    },
}

/// Box proposal in canvas terms
#[derive(Debug, Clone, Copy, PartialEq)]
struct Proposal {
    center: Point,
    size: Size,
}

// ===== Resizer =====

/// Resize/rotate widget bound to one box-shaped object
#[derive(Debug, Clone)]
pub struct Resizer {
    config: ResizerConfig,
    arena: Arena,
    node: ResizerNode,
    session: ResizeSession,
}

impl Resizer {
    pub fn new(arena: Arena, object_box: ObjectBox, config: ResizerConfig) -> Self {
        Self {
            node: ResizerNode::from_box(&arena, object_box, config.min_size),
            config,
            arena,
            session: ResizeSession::Idle,
        }
    }

    /// Widget for a resizable object, `None` for anything else
    pub fn for_object(arena: Arena, object: &SceneObject, config: ResizerConfig) -> Option<Self> {
        if !object.is_resizable() {
            return None;
        }
        object
            .object_box()
            .map(|object_box| Self::new(arena, object_box, config))
    }

    pub fn config(&self) -> &ResizerConfig {
        &self.config
    }

    /// Live widget transform
    pub fn node(&self) -> &ResizerNode {
        &self.node
    }

    pub fn has_capture(&self) -> bool {
        matches!(self.session, ResizeSession::Dragging { .. })
    }

    pub fn active_anchor(&self) -> Option<Anchor> {
        match self.session {
            ResizeSession::Dragging { anchor, .. } => Some(anchor),
            ResizeSession::Idle => None,
        }
    }

    /// Re-bind to the committed box after an external change. Ignored
    /// while dragging.
    pub fn sync(&mut self, object_box: ObjectBox) {
        if !self.has_capture() {
            self.node = ResizerNode::from_box(&self.arena, object_box, self.config.min_size);
        }
    }

    /// Anchor size for the current box
    pub fn anchor_size(&self) -> f64 {
        let size = self.node.size();
        (size.width.min(size.height) * self.config.handle_size_ratio)
            .clamp(self.config.handle_size_min, self.config.handle_size_max)
    }

    /// Local (rotated frame, unit scale) position of an anchor
    pub fn anchor_position(&self, anchor: Anchor) -> Point {
        let size = self.node.size();
        let d = anchor.direction();
        match anchor {
            Anchor::Rotater => Point::new(0.0, -size.height / 2.0 - self.config.rotater_offset),
            _ => Point::new(d.x * size.width / 2.0, d.y * size.height / 2.0),
        }
    }

    pub fn anchor_cursor(&self, anchor: Anchor) -> Cursor {
        match anchor {
            Anchor::Rotater => Cursor::Grab,
            _ => resize_cursor(anchor.base_angle() + self.node.rotation),
        }
    }

    fn to_local(&self, canvas: Point) -> Point {
        rotate_about_origin((canvas - self.node.center).to_point(), self.node.rotation)
    }

    /// Anchor under a canvas point. The rotater wins over resize anchors.
    pub fn hit_test(&self, canvas: Point) -> Option<Anchor> {
        let local = self.to_local(canvas);
        let half = self.anchor_size() / 2.0 + settings::control_points::HIT_SLOP;
        std::iter::once(Anchor::Rotater)
            .chain(Anchor::RESIZE)
            .find(|anchor| {
                let d = local - self.anchor_position(*anchor);
                d.x.abs() <= half && d.y.abs() <= half
            })
    }

    /// Start dragging the anchor under `canvas`. Returns whether a drag began.
    pub fn pointer_down(
        &mut self,
        canvas: Point,
        delegate: &mut impl ControlPointDelegate<ObjectBox>,
    ) -> bool {
        if self.has_capture() {
            tracing::warn!("Resizer: pointer down ignored, session already active");
            return false;
        }
        let Some(anchor) = self.hit_test(canvas) else {
            return false;
        };
        self.begin(anchor, canvas);
        delegate.on_active(true);
        true
    }

    /// Start dragging a specific anchor, bypassing hit testing
    pub fn begin(&mut self, anchor: Anchor, canvas: Point) {
        if self.has_capture() {
            tracing::warn!("Resizer: begin ignored, session already active");
            return;
        }
        self.session = ResizeSession::Dragging {
            anchor,
            start: self.node,
            grab: canvas,
        };
        tracing::debug!("Resizer: began {:?} at {:?}", anchor, canvas);
    }

    pub fn pointer_move(&mut self, canvas: Point) -> bool {
        let ResizeSession::Dragging { anchor, start, grab } = self.session else {
            return false;
        };
        match anchor {
            Anchor::Rotater => self.rotate_to(canvas),
            _ => {
                if let Some(proposal) = self.propose(anchor, &start, canvas - grab) {
                    self.node.center = proposal.center;
                    self.node.scale = Vec2::new(
                        proposal.size.width / start.base.width,
                        proposal.size.height / start.base.height,
                    );
                }
            }
        }
        true
    }

    /// Finish the drag and report the committed box once
    pub fn pointer_up(
        &mut self,
        canvas: Point,
        delegate: &mut impl ControlPointDelegate<ObjectBox>,
    ) -> bool {
        if !self.pointer_move(canvas) {
            return false;
        }
        self.session = ResizeSession::Idle;

        let size = self.node.size();
        let position = to_scene(&self.arena, self.node.center);
        let object_box = ObjectBox {
            x: position.x,
            y: position.y,
            rotation: self.node.rotation,
            width: size.width.round().max(self.config.min_size),
            height: size.height.round().max(self.config.min_size),
        };
        self.node = ResizerNode::from_box(&self.arena, object_box, self.config.min_size);

        tracing::debug!("Resizer: ended with {:?}", object_box);
        delegate.on_transform_end(object_box);
        delegate.on_active(false);
        true
    }

    /// Abort and restore the node to where the drag began
    pub fn cancel(&mut self, delegate: &mut impl ControlPointDelegate<ObjectBox>) -> bool {
        let ResizeSession::Dragging { start, .. } = self.session else {
            return false;
        };
        self.node = start;
        self.session = ResizeSession::Idle;
        tracing::debug!("Resizer: cancelled");
        delegate.on_active(false);
        true
    }

    fn rotate_to(&mut self, canvas: Point) {
        let angle = normalize_degrees(canvas_compass_angle(canvas - self.node.center));
        self.node.rotation = snap_angle(
            angle,
            self.config.rotation_snap_division,
            self.config.rotation_snap_tolerance,
        );
    }

    /// Box for a drag of `delta` (canvas) from `start`, or `None` when it
    /// would break the minimum size.
    fn propose(&self, anchor: Anchor, start: &ResizerNode, delta: Vec2) -> Option<Proposal> {
        let dir = anchor.direction();
        let local = rotate_about_origin(delta.to_point(), start.rotation).to_vec2();
        let from = start.size();
        let sides = if self.config.centered_scaling { 2.0 } else { 1.0 };

        let mut width = from.width + sides * dir.x * local.x;
        let mut height = from.height + sides * dir.y * local.y;

        if self.config.keep_ratio && anchor.is_corner() && from.width > 0.0 && from.height > 0.0 {
            let sx = width / from.width;
            let sy = height / from.height;
            let s = if (sx - 1.0).abs() >= (sy - 1.0).abs() { sx } else { sy };
            width = from.width * s;
            height = from.height * s;
        }

        if width < self.config.min_size || height < self.config.min_size {
            tracing::debug!(
                "Resizer: rejected {:.1}x{:.1} below minimum {}",
                width,
                height,
                self.config.min_size
            );
            return None;
        }

        let center = if self.config.centered_scaling {
            start.center
        } else {
            let shift = Point::new(
                dir.x * (width - from.width) / 2.0,
                dir.y * (height - from.height) / 2.0,
            );
            // Back from the rotated frame to canvas
            start.center + rotate_about_origin(shift, -start.rotation).to_vec2()
        };

        Some(Proposal {
            center,
            size: Size::new(width, height),
        })
    }

    // ===== Painting =====

    pub fn paint(&self, layers: &mut LayeredScene) {
        let scene = layers.layer_mut(LayerName::Controls);
        let frame = self.node.frame();
        let size = self.node.size();
        let outline = Brush::Solid(theme::resizer::OUTLINE);
        let stroke = Stroke::new(theme::size::RESIZER_STROKE_WIDTH);

        let rect = Rect::from_center_size(Point::ORIGIN, size);
        scene.stroke(&stroke, frame, &outline, None, &rect);

        let rotater = self.anchor_position(Anchor::Rotater);
        let top = Point::new(0.0, -size.height / 2.0);
        scene.stroke(&stroke, frame, &outline, None, &Line::new(top, rotater));

        let anchor_size = self.anchor_size();
        let fill = Brush::Solid(theme::resizer::ANCHOR_FILL);
        let anchor_stroke = Brush::Solid(theme::resizer::ANCHOR_STROKE);

        let circle = Circle::new(rotater, anchor_size / 2.0);
        scene.fill(Fill::NonZero, frame, &fill, None, &circle);
        scene.stroke(&stroke, frame, &anchor_stroke, None, &circle);

        for anchor in Anchor::RESIZE {
            let square = Rect::from_center_size(self.anchor_position(anchor), (anchor_size, anchor_size));
            scene.fill(Fill::NonZero, frame, &fill, None, &square);
            scene.stroke(&stroke, frame, &anchor_stroke, None, &square);
        }
    }
}

// ===== Commit =====

/// Replaces the bound object's box with the widget's final box
pub struct BoxCommit<'a, D: Dispatch + ?Sized> {
    object: &'a SceneObject,
    dispatcher: &'a mut D,
}

impl<'a, D: Dispatch + ?Sized> BoxCommit<'a, D> {
    pub fn new(object: &'a SceneObject, dispatcher: &'a mut D) -> Self {
        Self { object, dispatcher }
    }
}

impl<D: Dispatch + ?Sized> ControlPointDelegate<ObjectBox> for BoxCommit<'_, D> {
    fn on_transform_end(&mut self, object_box: ObjectBox) {
        self.dispatcher
            .dispatch(SceneAction::Update(vec![self.object.with_box(object_box)]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ObjectId, RectangleZone};

    fn test_arena() -> Arena {
        Arena::new(160.0, 160.0, 20.0)
    }

    fn rectangle() -> SceneObject {
        SceneObject::RectangleZone(RectangleZone {
            id: ObjectId::new(3),
            x: 0.0,
            y: 0.0,
            width: 40.0,
            height: 30.0,
            rotation: 0.0,
            color: "#00ff00".to_string(),
            opacity: 100.0,
            pinned: false,
            parent_id: None,
        })
    }

    fn resizer(config: ResizerConfig) -> Resizer {
        Resizer::for_object(test_arena(), &rectangle(), config).unwrap()
    }

    fn drag(resizer: &mut Resizer, anchor: Anchor, from: Point, to: Point) -> Vec<SceneAction> {
        let object = rectangle();
        let mut actions: Vec<SceneAction> = Vec::new();
        resizer.begin(anchor, from);
        resizer.pointer_up(to, &mut BoxCommit::new(&object, &mut actions));
        actions
    }

    fn updated_box(actions: &[SceneAction]) -> ObjectBox {
        match actions {
            [SceneAction::Update(objects)] => objects[0].object_box().unwrap(),
            other => panic!("expected one update, got {other:?}"),
        }
    }

    #[test]
    fn rotation_snaps_within_tolerance() {
        let mut resizer = resizer(ResizerConfig::default());
        let center = resizer.node().center;

        // 46° clockwise from up, 100 units out
        let angle = 46f64.to_radians();
        let pointer = center + Vec2::new(100.0 * angle.sin(), -100.0 * angle.cos());
        let actions = drag(&mut resizer, Anchor::Rotater, center, pointer);
        assert_eq!(updated_box(&actions).rotation, 45.0);
    }

    #[test]
    fn rotation_outside_tolerance_is_kept() {
        let mut resizer = resizer(ResizerConfig::default());
        let center = resizer.node().center;

        let angle = 50f64.to_radians();
        let pointer = center + Vec2::new(100.0 * angle.sin(), -100.0 * angle.cos());
        let actions = drag(&mut resizer, Anchor::Rotater, center, pointer);
        assert!((updated_box(&actions).rotation - 50.0).abs() < 1e-9);
    }

    #[test]
    fn right_edge_grows_and_shifts_center() {
        let mut resizer = resizer(ResizerConfig::default());
        // Canvas center (100, 100); right edge at x = 120
        let actions = drag(
            &mut resizer,
            Anchor::MiddleRight,
            Point::new(120.0, 100.0),
            Point::new(130.0, 100.0),
        );
        let object_box = updated_box(&actions);
        assert_eq!(object_box.width, 50.0);
        assert_eq!(object_box.height, 30.0);
        assert_eq!((object_box.x, object_box.y), (5.0, 0.0));
        // Scale folded back into the base size
        assert_eq!(resizer.node().scale, Vec2::new(1.0, 1.0));
        assert_eq!(resizer.node().base, Size::new(50.0, 30.0));
    }

    #[test]
    fn undersized_proposal_is_rejected_not_clamped() {
        let mut resizer = resizer(ResizerConfig::default());
        let object = rectangle();
        let mut actions: Vec<SceneAction> = Vec::new();
        let mut commit = BoxCommit::new(&object, &mut actions);

        resizer.begin(Anchor::MiddleRight, Point::new(120.0, 100.0));
        // 40 -> 30 is fine
        resizer.pointer_move(Point::new(110.0, 100.0));
        assert_eq!(resizer.node().size().width, 30.0);
        // 40 -> 15 breaks the minimum; previous box kept
        resizer.pointer_move(Point::new(95.0, 100.0));
        assert_eq!(resizer.node().size().width, 30.0);
        resizer.pointer_up(Point::new(95.0, 100.0), &mut commit);

        let object_box = updated_box(&actions);
        assert_eq!(object_box.width, 30.0);
        assert_eq!(object_box.x, -5.0);
    }

    #[test]
    fn degenerate_box_drags_from_minimum_size() {
        let flat = ObjectBox {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            width: 0.0,
            height: 30.0,
        };
        let mut resizer = Resizer::new(test_arena(), flat, ResizerConfig::default());
        assert_eq!(resizer.node().base, Size::new(20.0, 30.0));

        let object = rectangle();
        let mut actions: Vec<SceneAction> = Vec::new();
        resizer.begin(Anchor::MiddleRight, Point::new(110.0, 100.0));
        resizer.pointer_move(Point::new(140.0, 100.0));
        let live = resizer.node().size();
        assert!(live.width.is_finite() && resizer.node().scale.x.is_finite());
        assert_eq!(live, Size::new(50.0, 30.0));

        resizer.pointer_up(Point::new(140.0, 100.0), &mut BoxCommit::new(&object, &mut actions));
        let object_box = updated_box(&actions);
        assert_eq!(object_box.width, 50.0);
        assert_eq!(object_box.x, 15.0);
    }

    #[test]
    fn centered_scaling_keeps_center() {
        let config = ResizerConfig {
            centered_scaling: true,
            ..Default::default()
        };
        let mut resizer = resizer(config);
        let actions = drag(
            &mut resizer,
            Anchor::MiddleRight,
            Point::new(120.0, 100.0),
            Point::new(130.0, 100.0),
        );
        let object_box = updated_box(&actions);
        assert_eq!(object_box.width, 60.0);
        assert_eq!((object_box.x, object_box.y), (0.0, 0.0));
    }

    #[test]
    fn keep_ratio_on_corners() {
        let config = ResizerConfig {
            keep_ratio: true,
            ..Default::default()
        };
        let mut resizer = resizer(config);
        // Bottom-right corner at (120, 115); drag right by 40 doubles width
        let actions = drag(
            &mut resizer,
            Anchor::BottomRight,
            Point::new(120.0, 115.0),
            Point::new(160.0, 115.0),
        );
        let object_box = updated_box(&actions);
        assert_eq!(object_box.width, 80.0);
        assert_eq!(object_box.height, 60.0);
    }

    #[test]
    fn rotated_box_resizes_along_its_own_axis() {
        let arena = test_arena();
        let object_box = ObjectBox {
            x: 0.0,
            y: 0.0,
            rotation: 90.0,
            width: 40.0,
            height: 30.0,
        };
        let mut resizer = Resizer::new(arena, object_box, ResizerConfig::default());
        let object = rectangle().with_box(object_box);
        let mut actions: Vec<SceneAction> = Vec::new();

        // Rotated 90° clockwise, the right edge faces down the canvas
        resizer.begin(Anchor::MiddleRight, Point::new(100.0, 120.0));
        resizer.pointer_up(Point::new(100.0, 130.0), &mut BoxCommit::new(&object, &mut actions));

        let result = updated_box(&actions);
        assert_eq!(result.width, 50.0);
        assert_eq!(result.height, 30.0);
        assert_eq!((result.x, result.y), (0.0, -5.0));
    }

    #[test]
    fn anchor_size_is_clamped() {
        assert_eq!(resizer(ResizerConfig::default()).anchor_size(), 7.5);

        let arena = test_arena();
        let big = ObjectBox {
            width: 400.0,
            height: 400.0,
            ..Default::default()
        };
        assert_eq!(Resizer::new(arena, big, ResizerConfig::default()).anchor_size(), 10.0);

        let small = ObjectBox {
            width: 20.0,
            height: 20.0,
            ..Default::default()
        };
        assert_eq!(Resizer::new(arena, small, ResizerConfig::default()).anchor_size(), 6.0);
    }

    #[test]
    fn hit_test_and_cursors_follow_rotation() {
        let resizer = resizer(ResizerConfig::default());
        assert_eq!(resizer.hit_test(Point::new(120.0, 85.0)), Some(Anchor::TopRight));
        assert_eq!(resizer.hit_test(Point::new(100.0, 65.0)), Some(Anchor::Rotater));
        assert_eq!(resizer.hit_test(Point::new(100.0, 100.0)), None);
        assert_eq!(resizer.anchor_cursor(Anchor::MiddleRight), Cursor::EwResize);

        let rotated = Resizer::new(
            test_arena(),
            ObjectBox {
                rotation: 90.0,
                width: 40.0,
                height: 30.0,
                ..Default::default()
            },
            ResizerConfig::default(),
        );
        assert_eq!(rotated.anchor_cursor(Anchor::MiddleRight), Cursor::NsResize);
    }

    #[test]
    fn cancel_restores_node_without_update() {
        let mut resizer = resizer(ResizerConfig::default());
        let object = rectangle();
        let mut actions: Vec<SceneAction> = Vec::new();
        let before = *resizer.node();

        assert!(resizer.pointer_down(Point::new(120.0, 100.0), &mut BoxCommit::new(&object, &mut actions)));
        resizer.pointer_move(Point::new(140.0, 100.0));
        assert_ne!(*resizer.node(), before);
        assert!(resizer.cancel(&mut BoxCommit::new(&object, &mut actions)));

        assert_eq!(*resizer.node(), before);
        assert!(actions.is_empty());
        assert!(!resizer.has_capture());
    }

    #[test]
    fn non_box_objects_have_no_resizer() {
        let circle = SceneObject::CircleZone(crate::model::CircleZone {
            id: ObjectId::new(1),
            x: 0.0,
            y: 0.0,
            radius: 10.0,
            color: "#ffffff".to_string(),
            opacity: 100.0,
            pinned: false,
            parent_id: None,
        });
        assert!(Resizer::for_object(test_arena(), &circle, ResizerConfig::default()).is_none());
    }
}
