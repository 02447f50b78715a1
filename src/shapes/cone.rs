// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Cone control: one handle for radius and facing, two for the opening
//! angle.
//!
//! Dragging the radius handle also turns the cone, so the handle layer's
//! rotation follows the live pointer. Pointer positions are always read in
//! the committed frame; the live rotation is committed rotation plus the
//! pointer's compass angle in that frame.

use super::commit_if_changed;
use crate::coords::resize_cursor;
use crate::editing::{ControlPointDelegate, ControlPoints, Handle, HandleId, HandleProps, HandleStyle};
use crate::geometry::{canvas_compass_angle, distance, normalize_degrees};
use crate::model::{ConeZone, Dispatch, SceneObject};
use crate::settings;
use kurbo::{BezPath, CircleSegment, Point, Shape};

pub const RADIUS_HANDLE: HandleId = HandleId(0);
pub const ANGLE_HANDLE: HandleId = HandleId(1);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeConfig {
    pub outset: f64,
    pub min_radius: f64,
    pub min_angle: f64,
}

impl Default for ConeConfig {
    fn default() -> Self {
        Self {
            outset: settings::control_points::OUTSET,
            min_radius: settings::control_points::MIN_RADIUS,
            min_angle: settings::control_points::MIN_CONE_ANGLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeState {
    pub radius: f64,
    /// Facing in degrees, not normalized while dragging
    pub rotation: f64,
    /// Full opening angle in degrees
    pub cone_angle: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConeControl;

/// Local point `distance` out along compass `angle`
fn polar(angle: f64, distance: f64) -> Point {
    let (sin, cos) = angle.to_radians().sin_cos();
    Point::new(distance * sin, -distance * cos)
}

impl ControlPoints for ConeControl {
    type Object = ConeZone;
    type State = ConeState;
    type Config = ConeConfig;

    fn handles(&self, object: &ConeZone, props: HandleProps, config: &ConeConfig) -> Vec<Handle> {
        let state = self.state(object, props, config);
        let reach = state.radius + config.outset;
        let half = state.cone_angle / 2.0;

        vec![
            Handle::new(
                RADIUS_HANDLE,
                polar(0.0, reach),
                resize_cursor(state.rotation),
                HandleStyle::Circle,
            ),
            Handle::new(
                ANGLE_HANDLE,
                polar(half, reach),
                resize_cursor(state.rotation + half + 90.0),
                HandleStyle::Diamond,
            ),
            Handle::new(
                ANGLE_HANDLE,
                polar(-half, reach),
                resize_cursor(state.rotation - half + 90.0),
                HandleStyle::Diamond,
            ),
        ]
    }

    fn state(&self, object: &ConeZone, props: HandleProps, config: &ConeConfig) -> ConeState {
        let mut state = ConeState {
            radius: object.radius,
            rotation: object.rotation,
            cone_angle: object.cone_angle,
        };

        if let Some(pointer) = props.live_pointer(RADIUS_HANDLE) {
            state.radius = (distance(pointer) - config.outset).max(config.min_radius);
            let turn = canvas_compass_angle(pointer.to_vec2());
            state.rotation = object.rotation + turn;
        } else if let Some(pointer) = props.live_pointer(ANGLE_HANDLE) {
            let half = normalize_degrees(canvas_compass_angle(pointer.to_vec2())).abs();
            state.cone_angle = (2.0 * half).clamp(config.min_angle, 360.0);
        }
        state
    }

    fn rotation(&self, object: &ConeZone, props: HandleProps, config: &ConeConfig) -> f64 {
        self.state(object, props, config).rotation
    }

    fn border(&self, _object: &ConeZone, state: &ConeState, _config: &ConeConfig) -> Option<BezPath> {
        let sweep = state.cone_angle.to_radians();
        let start = -std::f64::consts::FRAC_PI_2 - sweep / 2.0;
        Some(CircleSegment::new(Point::ORIGIN, state.radius, 0.0, start, sweep).to_path(0.1))
    }
}

/// Writes a finished cone drag back to the scene
pub struct ConeCommit<'a, D: Dispatch + ?Sized> {
    object: &'a ConeZone,
    dispatcher: &'a mut D,
}

impl<'a, D: Dispatch + ?Sized> ConeCommit<'a, D> {
    pub fn new(object: &'a ConeZone, dispatcher: &'a mut D) -> Self {
        Self { object, dispatcher }
    }
}

impl<D: Dispatch + ?Sized> ControlPointDelegate<ConeState> for ConeCommit<'_, D> {
    fn on_transform_end(&mut self, state: ConeState) {
        let next = ConeZone {
            radius: state.radius.round(),
            rotation: normalize_degrees(state.rotation.round()),
            cone_angle: state.cone_angle.round(),
            ..self.object.clone()
        };
        let committed = SceneObject::ConeZone(self.object.clone());
        commit_if_changed(&mut *self.dispatcher, &committed, SceneObject::ConeZone(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::ControlPointManager;
    use crate::model::{ObjectId, SceneAction};

    fn cone(rotation: f64) -> ConeZone {
        ConeZone {
            id: ObjectId::new(2),
            x: 0.0,
            y: 0.0,
            radius: 50.0,
            rotation,
            cone_angle: 90.0,
            color: "#ffaa00".to_string(),
            opacity: 100.0,
            pinned: false,
            parent_id: None,
        }
    }

    fn manager() -> ControlPointManager<ConeControl> {
        ControlPointManager::new(ConeControl, ConeConfig::default()).with_origin(Point::new(100.0, 100.0))
    }

    fn committed(actions: &[SceneAction]) -> ConeZone {
        match actions {
            [SceneAction::Update(objects)] => match &objects[0] {
                SceneObject::ConeZone(cone) => cone.clone(),
                other => panic!("expected a cone, got {other:?}"),
            },
            other => panic!("expected one update, got {other:?}"),
        }
    }

    #[test]
    fn radius_handle_turns_the_cone() {
        let object = cone(0.0);
        let mut manager = manager();
        let mut actions: Vec<SceneAction> = Vec::new();

        manager
            .pointer_down(&object, 0, Point::new(100.0, 48.0), &mut ConeCommit::new(&object, &mut actions))
            .unwrap();
        manager.pointer_move(&object, Point::new(152.0, 100.0)).unwrap();
        assert!((manager.rotation(&object) - 90.0).abs() < 1e-9);
        manager
            .pointer_up(&object, Point::new(152.0, 100.0), &mut ConeCommit::new(&object, &mut actions))
            .unwrap();

        let result = committed(&actions);
        assert_eq!(result.radius, 50.0);
        assert_eq!(result.rotation, 90.0);
        assert_eq!(result.cone_angle, 90.0);
    }

    #[test]
    fn rotated_cone_reads_pointer_in_committed_frame() {
        let object = cone(90.0);
        let mut manager = manager();
        let mut actions: Vec<SceneAction> = Vec::new();

        // Facing right, the radius handle sits right of the center
        assert_eq!(manager.hit_test(&object, Point::new(152.0, 100.0)), Some(0));
        manager
            .pointer_down(&object, 0, Point::new(152.0, 100.0), &mut ConeCommit::new(&object, &mut actions))
            .unwrap();
        manager
            .pointer_up(&object, Point::new(100.0, 162.0), &mut ConeCommit::new(&object, &mut actions))
            .unwrap();

        let result = committed(&actions);
        assert_eq!(result.rotation, 180.0);
        assert_eq!(result.radius, 60.0);
    }

    #[test]
    fn angle_handles_are_symmetric() {
        let object = cone(0.0);
        let config = ConeConfig::default();
        let handles = ConeControl.handles(&object, HandleProps::idle(), &config);
        assert_eq!(handles[1].id, handles[2].id);

        let mut left = manager();
        let mut right = manager();
        let mut actions: Vec<SceneAction> = Vec::new();
        let origin = left.origin();

        right
            .pointer_down(&object, 1, origin + handles[1].position().to_vec2(), &mut ConeCommit::new(&object, &mut actions))
            .unwrap();
        right.pointer_move(&object, Point::new(140.0, 80.0)).unwrap();

        left.pointer_down(&object, 2, origin + handles[2].position().to_vec2(), &mut ConeCommit::new(&object, &mut actions))
            .unwrap();
        left.pointer_move(&object, Point::new(60.0, 80.0)).unwrap();

        let a = right.state(&object);
        let b = left.state(&object);
        assert!((a.cone_angle - b.cone_angle).abs() < 1e-9);
        assert_eq!(a.radius, b.radius);
        assert_eq!(a.rotation, b.rotation);
        // atan2(20, 40) from the horizontal leaves ~63.4° from the facing
        assert!((a.cone_angle - 126.87).abs() < 0.01);
    }

    #[test]
    fn unchanged_cone_is_not_dispatched() {
        let object = cone(30.0);
        let mut manager = manager();
        let mut actions: Vec<SceneAction> = Vec::new();
        let local = ConeControl.handles(&object, HandleProps::idle(), manager.config())[0].position();
        let grab = manager.layer_transform(&object) * local;
        manager
            .pointer_down(&object, 0, grab, &mut ConeCommit::new(&object, &mut actions))
            .unwrap();
        manager
            .pointer_up(&object, grab, &mut ConeCommit::new(&object, &mut actions))
            .unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn opening_angle_is_clamped() {
        let object = cone(0.0);
        let props = HandleProps {
            pointer_pos: Some(Point::new(0.0, -40.0)),
            active_handle_id: Some(ANGLE_HANDLE),
        };
        let state = ConeControl.state(&object, props, &ConeConfig::default());
        assert_eq!(state.cone_angle, 1.0);

        let props = HandleProps {
            pointer_pos: Some(Point::new(0.0, 40.0)),
            ..props
        };
        let state = ConeControl.state(&object, props, &ConeConfig::default());
        assert_eq!(state.cone_angle, 360.0);
    }
}
