// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Radius control for circles, donuts and other round objects.
//!
//! Four handles sit just outside the circle at the cardinal points. They
//! share one id, so grabbing any of them drags the same radius.

use super::commit_if_changed;
use crate::coords::resize_cursor;
use crate::editing::{ControlPointDelegate, ControlPoints, Handle, HandleId, HandleProps, HandleStyle};
use crate::geometry::distance;
use crate::model::{Dispatch, SceneObject};
use crate::settings;
use kurbo::{BezPath, Circle, Point, Shape};

pub const RADIUS_HANDLE: HandleId = HandleId(0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusConfig {
    /// Gap between the circle and its handles
    pub outset: f64,
    pub min_radius: f64,
}

impl Default for RadiusConfig {
    fn default() -> Self {
        Self {
            outset: settings::control_points::OUTSET,
            min_radius: settings::control_points::MIN_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusState {
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RadiusControl;

impl ControlPoints for RadiusControl {
    type Object = SceneObject;
    type State = RadiusState;
    type Config = RadiusConfig;

    fn handles(&self, object: &SceneObject, props: HandleProps, config: &RadiusConfig) -> Vec<Handle> {
        let r = self.state(object, props, config).radius + config.outset;
        [
            (0.0, Point::new(0.0, -r)),
            (90.0, Point::new(r, 0.0)),
            (180.0, Point::new(0.0, r)),
            (270.0, Point::new(-r, 0.0)),
        ]
        .into_iter()
        .map(|(angle, position)| {
            Handle::new(RADIUS_HANDLE, position, resize_cursor(angle), HandleStyle::Circle)
        })
        .collect()
    }

    fn state(&self, object: &SceneObject, props: HandleProps, config: &RadiusConfig) -> RadiusState {
        let radius = match props.live_pointer(RADIUS_HANDLE) {
            Some(pointer) => (distance(pointer) - config.outset).max(config.min_radius),
            None => object.radius().unwrap_or(config.min_radius),
        };
        RadiusState { radius }
    }

    fn border(&self, _object: &SceneObject, state: &RadiusState, _config: &RadiusConfig) -> Option<BezPath> {
        Some(Circle::new(Point::ORIGIN, state.radius).to_path(0.1))
    }
}

/// Writes a finished radius drag back to the scene
pub struct RadiusCommit<'a, D: Dispatch + ?Sized> {
    object: &'a SceneObject,
    dispatcher: &'a mut D,
}

impl<'a, D: Dispatch + ?Sized> RadiusCommit<'a, D> {
    pub fn new(object: &'a SceneObject, dispatcher: &'a mut D) -> Self {
        Self { object, dispatcher }
    }
}

impl<D: Dispatch + ?Sized> ControlPointDelegate<RadiusState> for RadiusCommit<'_, D> {
    fn on_transform_end(&mut self, state: RadiusState) {
        let next = self.object.with_radius(state.radius.round());
        commit_if_changed(&mut *self.dispatcher, self.object, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::to_canvas;
    use crate::editing::ControlPointManager;
    use crate::model::{Arena, CircleZone, ObjectId, Scene, SceneAction};

    fn test_arena() -> Arena {
        Arena::new(160.0, 160.0, 20.0)
    }

    fn circle(radius: f64) -> SceneObject {
        SceneObject::CircleZone(CircleZone {
            id: ObjectId::new(1),
            x: 0.0,
            y: 0.0,
            radius,
            color: "#ff0000".to_string(),
            opacity: 100.0,
            pinned: false,
            parent_id: None,
        })
    }

    fn manager() -> ControlPointManager<RadiusControl> {
        let origin = to_canvas(&test_arena(), Point::ORIGIN);
        ControlPointManager::new(RadiusControl, RadiusConfig::default()).with_origin(origin)
    }

    #[test]
    fn drag_commits_once_then_nothing() {
        let mut scene = Scene::with_objects(test_arena(), vec![circle(50.0)]);
        let mut manager = manager();
        assert_eq!(manager.origin(), Point::new(100.0, 100.0));

        let object = circle(50.0);
        let mut actions: Vec<SceneAction> = Vec::new();

        // Top handle sits at local (0, -52)
        let index = manager.hit_test(&object, Point::new(100.0, 48.0)).unwrap();
        manager
            .pointer_down(&object, index, Point::new(100.0, 48.0), &mut RadiusCommit::new(&object, &mut actions))
            .unwrap();
        manager.pointer_move(&object, Point::new(130.0, 100.0)).unwrap();
        assert!((manager.state(&object).radius - 28.0).abs() < 1e-9);

        manager
            .pointer_up(&object, Point::new(130.0, 100.0), &mut RadiusCommit::new(&object, &mut actions))
            .unwrap();
        assert_eq!(actions, vec![SceneAction::Update(vec![circle(28.0)])]);

        // A second release with no session dispatches nothing
        let released = manager
            .pointer_up(&object, Point::new(130.0, 100.0), &mut RadiusCommit::new(&object, &mut actions))
            .unwrap();
        assert!(!released);
        assert_eq!(actions.len(), 1);

        for action in actions {
            scene.dispatch(action);
        }
        assert_eq!(scene.objects()[0].radius(), Some(28.0));
    }

    #[test]
    fn grab_and_release_in_place_is_suppressed() {
        let object = circle(50.0);
        let mut manager = manager();
        let mut actions: Vec<SceneAction> = Vec::new();

        manager
            .pointer_down(&object, 1, Point::new(152.0, 100.0), &mut RadiusCommit::new(&object, &mut actions))
            .unwrap();
        manager
            .pointer_up(&object, Point::new(152.0, 100.0), &mut RadiusCommit::new(&object, &mut actions))
            .unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn opposite_handles_agree() {
        let object = circle(50.0);
        let mut left = manager();
        let mut right = manager();
        let mut actions: Vec<SceneAction> = Vec::new();

        // Left handle at canvas x = 48, right handle at x = 152; drag both 10 outward
        left.pointer_down(&object, 3, Point::new(48.0, 100.0), &mut RadiusCommit::new(&object, &mut actions))
            .unwrap();
        left.pointer_move(&object, Point::new(38.0, 100.0)).unwrap();
        right
            .pointer_down(&object, 1, Point::new(152.0, 100.0), &mut RadiusCommit::new(&object, &mut actions))
            .unwrap();
        right.pointer_move(&object, Point::new(162.0, 100.0)).unwrap();

        assert_eq!(left.state(&object), right.state(&object));
        assert_eq!(left.state(&object).radius, 60.0);
    }

    #[test]
    fn radius_never_drops_below_minimum() {
        let object = circle(50.0);
        let mut manager = manager();
        let mut actions: Vec<SceneAction> = Vec::new();

        manager
            .pointer_down(&object, 0, Point::new(100.0, 48.0), &mut RadiusCommit::new(&object, &mut actions))
            .unwrap();
        manager
            .pointer_up(&object, Point::new(100.0, 99.0), &mut RadiusCommit::new(&object, &mut actions))
            .unwrap();
        assert_eq!(actions, vec![SceneAction::Update(vec![circle(10.0)])]);
    }

    #[test]
    fn all_handles_share_one_id() {
        let handles = RadiusControl.handles(&circle(50.0), HandleProps::idle(), &RadiusConfig::default());
        assert_eq!(handles.len(), 4);
        assert!(handles.iter().all(|h| h.id == RADIUS_HANDLE));
        assert_eq!(handles[1].position(), Point::new(52.0, 0.0));
    }
}
