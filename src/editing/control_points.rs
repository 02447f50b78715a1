// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Generic control point interaction.
//!
//! A [`ControlPoints`] shape describes its handles and derived state as pure
//! functions of the committed object and the live pointer. The
//! [`ControlPointManager`] owns the drag session and feeds those functions,
//! so visually unrelated shapes share one grab/track/release algorithm.
//!
//! All handle geometry is expressed in the object-local, pre-rotation frame:
//! canvas axes, origin at the object's canvas position. The handle layer is
//! painted through `translate(origin) * rotate(rotation)`.

use super::handle::{self, Handle, HandleId, HandleProps};
use super::{Cursor, PointerEvent, PointerPhase};
use crate::coords::rotate_about_origin;
use crate::render::{LayerName, LayeredScene};
use crate::settings;
use kurbo::{Affine, BezPath, Point, Vec2};
use thiserror::Error;

// ===== Shape Trait =====

/// Pure description of a shape's handles.
///
/// `handles` and `state` must describe the same geometry for identical
/// arguments. The manager relies on every handle id it resolved at grab time
/// still being present in later handle lists.
pub trait ControlPoints {
    type Object;
    type State;
    type Config;

    /// Current handle positions. Handles sharing the active id follow the
    /// live pointer; others stay anchored to committed state.
    fn handles(&self, object: &Self::Object, props: HandleProps, config: &Self::Config)
    -> Vec<Handle>;

    /// Derived state for the given pointer props
    fn state(&self, object: &Self::Object, props: HandleProps, config: &Self::Config)
    -> Self::State;

    /// Rotation in degrees applied to the whole handle layer
    fn rotation(&self, _object: &Self::Object, _props: HandleProps, _config: &Self::Config) -> f64 {
        0.0
    }

    /// Optional live reference outline, in the local frame
    fn border(
        &self,
        _object: &Self::Object,
        _state: &Self::State,
        _config: &Self::Config,
    ) -> Option<BezPath> {
        None
    }
}

/// Receives session notifications from a manager
pub trait ControlPointDelegate<S> {
    /// Called with `true` when a session begins and `false` when it ends
    fn on_active(&mut self, _active: bool) {}

    /// Called once per completed session with the final derived state.
    ///
    /// Implementations round values and skip the dispatch when the state
    /// matches the committed object.
    fn on_transform_end(&mut self, state: S);
}

/// Contract violations between a shape's handle and state functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlPointError {
    #[error("handle index {index} out of range for {len} handles")]
    HandleIndexOutOfRange { index: usize, len: usize },
    #[error("active handle {0:?} missing from recomputed handles")]
    MissingHandle(HandleId),
}

// ===== Session =====

/// Drag session state. At most one exists per manager.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Session {
    #[default]
    Idle,
    Dragging {
        handle_id: HandleId,
        /// Local offset from the grabbed handle's center to the pointer,
        /// fixed for the whole session
        offset: Vec2,
        /// Latest local pointer position
        pointer: Point,
    },
}

impl Session {
    fn props(&self) -> HandleProps {
        match *self {
            Session::Idle => HandleProps::idle(),
            Session::Dragging {
                handle_id,
                offset,
                pointer,
            } => HandleProps {
                pointer_pos: Some(pointer - offset),
                active_handle_id: Some(handle_id),
            },
        }
    }
}

// ===== Manager =====

/// Drives one shape's drag sessions
#[derive(Debug, Clone)]
pub struct ControlPointManager<C: ControlPoints> {
    shape: C,
    config: C::Config,
    /// Canvas position of the handle layer's origin
    origin: Point,
    handle_size: f64,
    session: Session,
}

impl<C: ControlPoints> ControlPointManager<C> {
    pub fn new(shape: C, config: C::Config) -> Self {
        Self {
            shape,
            config,
            origin: Point::ORIGIN,
            handle_size: settings::control_points::HANDLE_SIZE,
            session: Session::Idle,
        }
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_handle_size(mut self, size: f64) -> Self {
        self.handle_size = size;
        self
    }

    pub fn handle_size(&self) -> f64 {
        self.handle_size
    }

    /// Move the handle layer, e.g. after the object moved
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn config(&self) -> &C::Config {
        &self.config
    }

    pub fn session(&self) -> Session {
        self.session
    }

    /// Whether a session currently holds pointer capture
    pub fn has_capture(&self) -> bool {
        matches!(self.session, Session::Dragging { .. })
    }

    /// Current pointer props: live while dragging, idle otherwise
    pub fn props(&self) -> HandleProps {
        self.session.props()
    }

    pub fn handles(&self, object: &C::Object) -> Vec<Handle> {
        self.shape.handles(object, self.props(), &self.config)
    }

    pub fn state(&self, object: &C::Object) -> C::State {
        self.shape.state(object, self.props(), &self.config)
    }

    pub fn rotation(&self, object: &C::Object) -> f64 {
        self.shape.rotation(object, self.props(), &self.config)
    }

    /// Transform from the local handle frame to canvas space
    pub fn layer_transform(&self, object: &C::Object) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::rotate(self.rotation(object).to_radians())
    }

    /// Cursor of the handle being dragged
    pub fn active_cursor(&self, object: &C::Object) -> Option<Cursor> {
        let active = self.props().active_handle_id?;
        self.handles(object)
            .into_iter()
            .find(|h| h.id == active)
            .map(|h| h.cursor)
    }

    /// Committed-frame local position of a canvas point.
    ///
    /// The frame always uses the committed rotation, so a shape whose
    /// rotation follows a handle sees pointer positions in one stable frame.
    fn local_point(&self, object: &C::Object, canvas: Point) -> Point {
        let rotation = self
            .shape
            .rotation(object, HandleProps::idle(), &self.config);
        rotate_about_origin((canvas - self.origin).to_point(), rotation)
    }

    /// Index of the top-most handle under a canvas point
    pub fn hit_test(&self, object: &C::Object, canvas: Point) -> Option<usize> {
        let local = self.local_point(object, canvas);
        let size = self.handle_size + 2.0 * settings::control_points::HIT_SLOP;
        let handles = self
            .shape
            .handles(object, HandleProps::idle(), &self.config);
        handles.iter().rposition(|h| h.contains(local, size))
    }

    /// Begin a session on handle `index`.
    ///
    /// A pointer-down while a session is active is ignored.
    pub fn pointer_down(
        &mut self,
        object: &C::Object,
        index: usize,
        canvas: Point,
        delegate: &mut impl ControlPointDelegate<C::State>,
    ) -> Result<(), ControlPointError> {
        if self.has_capture() {
            tracing::warn!("ControlPointManager: pointer down ignored, session already active");
            return Ok(());
        }

        let handles = self
            .shape
            .handles(object, HandleProps::idle(), &self.config);
        let Some(handle) = handles.get(index) else {
            tracing::error!(
                "ControlPointManager: handle index {} out of range ({} handles)",
                index,
                handles.len()
            );
            return Err(ControlPointError::HandleIndexOutOfRange {
                index,
                len: handles.len(),
            });
        };

        let pointer = self.local_point(object, canvas);
        let offset = pointer - handle.position();
        self.session = Session::Dragging {
            handle_id: handle.id,
            offset,
            pointer,
        };
        tracing::debug!(
            "ControlPointManager: grabbed handle {:?} at {:?}, offset {:?}",
            handle.id,
            pointer,
            offset
        );
        delegate.on_active(true);
        Ok(())
    }

    /// Track a move. Returns whether a session consumed it.
    pub fn pointer_move(
        &mut self,
        object: &C::Object,
        canvas: Point,
    ) -> Result<bool, ControlPointError> {
        let Session::Dragging { handle_id, .. } = self.session else {
            return Ok(false);
        };
        self.sample(object, canvas);
        self.check_active(object, handle_id)?;
        Ok(true)
    }

    /// End the session with one final sample. Returns whether a session
    /// was active.
    pub fn pointer_up(
        &mut self,
        object: &C::Object,
        canvas: Point,
        delegate: &mut impl ControlPointDelegate<C::State>,
    ) -> Result<bool, ControlPointError> {
        let Session::Dragging { handle_id, .. } = self.session else {
            return Ok(false);
        };
        self.sample(object, canvas);
        let props = self.props();
        let checked = self.check_active(object, handle_id);
        self.session = Session::Idle;

        if let Err(err) = checked {
            delegate.on_active(false);
            return Err(err);
        }

        let state = self.shape.state(object, props, &self.config);
        tracing::debug!("ControlPointManager: released handle {:?}", handle_id);
        delegate.on_transform_end(state);
        delegate.on_active(false);
        Ok(true)
    }

    /// Route one pointer event. Downs are hit tested against the handles.
    pub fn handle_event(
        &mut self,
        object: &C::Object,
        event: PointerEvent,
        delegate: &mut impl ControlPointDelegate<C::State>,
    ) -> Result<bool, ControlPointError> {
        match event.phase {
            PointerPhase::Down => {
                if self.has_capture() {
                    tracing::warn!("ControlPointManager: pointer down ignored, session already active");
                    return Ok(false);
                }
                match self.hit_test(object, event.position) {
                    Some(index) => {
                        self.pointer_down(object, index, event.position, delegate)?;
                        Ok(true)
                    }
                    None => Ok(false),
                }
            }
            PointerPhase::Move => self.pointer_move(object, event.position),
            PointerPhase::Up => self.pointer_up(object, event.position, delegate),
        }
    }

    /// Abort the session without a transform end, e.g. when the window
    /// loses focus mid-drag. Returns whether a session was active.
    pub fn cancel(&mut self, delegate: &mut impl ControlPointDelegate<C::State>) -> bool {
        if !self.has_capture() {
            return false;
        }
        self.session = Session::Idle;
        tracing::debug!("ControlPointManager: session cancelled");
        delegate.on_active(false);
        true
    }

    fn sample(&mut self, object: &C::Object, canvas: Point) {
        let local = self.local_point(object, canvas);
        if let Session::Dragging { pointer, .. } = &mut self.session {
            *pointer = local;
        }
    }

    fn check_active(&self, object: &C::Object, id: HandleId) -> Result<(), ControlPointError> {
        let handles = self.handles(object);
        if handles.iter().any(|h| h.id == id) {
            Ok(())
        } else {
            tracing::error!(
                "ControlPointManager: active handle {:?} missing from {} recomputed handles",
                id,
                handles.len()
            );
            Err(ControlPointError::MissingHandle(id))
        }
    }

    // ===== Painting =====

    /// Paint the border and handles onto the controls layer
    pub fn paint(&self, layers: &mut LayeredScene, object: &C::Object) {
        let props = self.props();
        let transform = self.layer_transform(object);
        let state = self.shape.state(object, props, &self.config);
        let scene = layers.layer_mut(LayerName::Controls);

        if let Some(border) = self.shape.border(object, &state, &self.config) {
            handle::paint_border(scene, transform, &border);
        }
        for h in self.shape.handles(object, props, &self.config) {
            handle::paint_handle(scene, transform, &h, self.handle_size, props.is_active(h.id));
        }
    }

    /// Paint the object's own visuals from derived state, then its controls
    pub fn render<F>(&self, layers: &mut LayeredScene, object: &C::Object, children: F)
    where
        F: FnOnce(&mut LayeredScene, &C::State),
    {
        let state = self.state(object);
        children(layers, &state);
        self.paint(layers, object);
    }
}
