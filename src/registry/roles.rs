// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! The four handler roles and their no-op fallbacks

use super::DropPayload;
use crate::editing::Highlight;
use crate::model::{Arena, ObjectLookup, SceneObject, SceneSink};
use crate::render::LayeredScene;
use kurbo::Point;
use std::sync::Arc;

/// Per-object inputs to a renderer
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub arena: &'a Arena,
    pub highlight: Highlight,
    /// Other objects, for renderers that follow references
    pub objects: &'a dyn ObjectLookup,
}

/// Paints one object type
pub trait ObjectRenderer: Send + Sync {
    fn paint(&self, layers: &mut LayeredScene, object: &SceneObject, ctx: &RenderContext<'_>);
}

/// One row in the object list panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub label: String,
    pub detail: Option<String>,
}

impl ListEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Describes one object type in the object list
pub trait ListItem: Send + Sync {
    fn describe(&self, object: &SceneObject) -> Option<ListEntry>;
}

/// An editable property shown in the properties panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Position,
    Rotation,
    Size,
    Radius,
    Color,
    Opacity,
    Pinned,
}

/// Lists the editable properties of one object type
pub trait PropertyEditor: Send + Sync {
    fn properties(&self, object: &SceneObject) -> Vec<PropertyKind>;
}

/// Turns a dropped payload into new objects. Returns whether anything was
/// added. New ids come from the same sink the objects are added to.
pub trait DropHandler: Send + Sync {
    fn on_drop(&self, payload: &DropPayload, position: Point, scene: &mut dyn SceneSink) -> bool;
}

/// Handler of unregistered keys: renders, lists, edits and adds nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl ObjectRenderer for NoopHandler {
    fn paint(&self, _layers: &mut LayeredScene, _object: &SceneObject, _ctx: &RenderContext<'_>) {}
}

impl ListItem for NoopHandler {
    fn describe(&self, _object: &SceneObject) -> Option<ListEntry> {
        None
    }
}

impl PropertyEditor for NoopHandler {
    fn properties(&self, _object: &SceneObject) -> Vec<PropertyKind> {
        Vec::new()
    }
}

impl DropHandler for NoopHandler {
    fn on_drop(&self, payload: &DropPayload, _position: Point, _scene: &mut dyn SceneSink) -> bool {
        tracing::debug!("DropHandler: no handler for '{}'", payload.object_type);
        false
    }
}

/// A role's fallback handler
pub trait Role {
    fn noop() -> Arc<Self>;
}

impl Role for dyn ObjectRenderer {
    fn noop() -> Arc<Self> {
        Arc::new(NoopHandler)
    }
}

impl Role for dyn ListItem {
    fn noop() -> Arc<Self> {
        Arc::new(NoopHandler)
    }
}

impl Role for dyn PropertyEditor {
    fn noop() -> Arc<Self> {
        Arc::new(NoopHandler)
    }
}

impl Role for dyn DropHandler {
    fn noop() -> Arc<Self> {
        Arc::new(NoopHandler)
    }
}

// ===== Stock handlers =====

/// Lists an object under a fixed label, adding its name when it has one
#[derive(Debug, Clone)]
pub struct NamedListItem {
    label: String,
}

impl NamedListItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl ListItem for NamedListItem {
    fn describe(&self, object: &SceneObject) -> Option<ListEntry> {
        let entry = ListEntry::new(self.label.clone());
        let name = match object {
            SceneObject::Marker(o) => Some(o.name.as_str()),
            SceneObject::Party(o) => Some(o.name.as_str()),
            SceneObject::Enemy(o) => Some(o.name.as_str()),
            SceneObject::Text(o) => Some(o.text.as_str()),
            _ => None,
        };
        Some(match name {
            Some(name) if !name.is_empty() => entry.with_detail(name),
            _ => entry,
        })
    }
}

/// Offers whatever properties the object structurally has
#[derive(Debug, Clone, Copy, Default)]
pub struct CapabilityPropertyEditor;

impl PropertyEditor for CapabilityPropertyEditor {
    fn properties(&self, object: &SceneObject) -> Vec<PropertyKind> {
        let checks = [
            (object.is_moveable(), PropertyKind::Position),
            (object.is_rotatable(), PropertyKind::Rotation),
            (object.is_resizable(), PropertyKind::Size),
            (object.is_radius_object(), PropertyKind::Radius),
            (object.has_color(), PropertyKind::Color),
            (object.has_opacity(), PropertyKind::Opacity),
            (object.is_moveable(), PropertyKind::Pinned),
        ];
        checks
            .into_iter()
            .filter_map(|(has, kind)| has.then_some(kind))
            .collect()
    }
}
