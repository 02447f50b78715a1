// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! All four role registries, built once at startup.
//!
//! Registration happens on the builder in call order, so which handler wins
//! a duplicate key is decided by the code that builds the registry. The
//! finished registry is read-only and shared by reference.

use super::{
    CapabilityPropertyEditor, DropHandler, ListItem, NamedListItem, ObjectRenderer,
    PropertyEditor, Registry, TemplateDropHandler,
};
use crate::model::{CircleZone, ConeZone, ObjectId, RectangleZone, SceneObject};
use crate::render::basic::{
    ArrowRenderer, EnemyRenderer, PlaceholderRenderer, TetherRenderer, ZoneRenderer,
};
use std::sync::Arc;

/// Every object type key
pub const OBJECT_TYPES: [&str; 10] = [
    "circleZone",
    "rectangleZone",
    "coneZone",
    "donutZone",
    "arrow",
    "marker",
    "party",
    "enemy",
    "text",
    "tether",
];

#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    renderers: Registry<dyn ObjectRenderer>,
    list_items: Registry<dyn ListItem>,
    property_editors: Registry<dyn PropertyEditor>,
    drop_handlers: Registry<dyn DropHandler>,
}

impl CapabilityRegistry {
    pub fn builder() -> CapabilityRegistryBuilder {
        CapabilityRegistryBuilder::default()
    }

    /// Registry with the stock handlers for the built-in object types
    pub fn with_defaults() -> Self {
        let labels = [
            ("circleZone", "Circle"),
            ("rectangleZone", "Rectangle"),
            ("coneZone", "Cone"),
            ("donutZone", "Donut"),
            ("arrow", "Arrow"),
            ("marker", "Marker"),
            ("party", "Party member"),
            ("enemy", "Enemy"),
            ("text", "Text"),
            ("tether", "Tether"),
        ];

        let mut builder = Self::builder()
            .renderer(&["circleZone", "rectangleZone", "coneZone", "donutZone"], ZoneRenderer)
            .renderer(&["arrow"], ArrowRenderer)
            .renderer(&["enemy"], EnemyRenderer)
            .renderer(&["marker", "party"], PlaceholderRenderer)
            .renderer(&["tether"], TetherRenderer)
            .property_editor(&OBJECT_TYPES, CapabilityPropertyEditor);
        for (key, label) in labels {
            builder = builder.list_item(&[key], NamedListItem::new(label));
        }
        for template in default_templates() {
            let key = template.type_key();
            builder = builder.drop_handler(&[key], TemplateDropHandler::new(template));
        }
        builder.build()
    }

    pub fn renderers(&self) -> &Registry<dyn ObjectRenderer> {
        &self.renderers
    }

    pub fn list_items(&self) -> &Registry<dyn ListItem> {
        &self.list_items
    }

    pub fn property_editors(&self) -> &Registry<dyn PropertyEditor> {
        &self.property_editors
    }

    pub fn drop_handlers(&self) -> &Registry<dyn DropHandler> {
        &self.drop_handlers
    }

    /// Renderer for an object's type
    pub fn renderer_for(&self, object: &SceneObject) -> &dyn ObjectRenderer {
        self.renderers.get(object.type_key())
    }
}

/// Collects registrations in call order
#[derive(Debug, Default)]
pub struct CapabilityRegistryBuilder {
    registry: CapabilityRegistry,
}

impl CapabilityRegistryBuilder {
    pub fn renderer(mut self, keys: &[&str], handler: impl ObjectRenderer + 'static) -> Self {
        self.registry.renderers.register(keys, Arc::new(handler));
        self
    }

    pub fn list_item(mut self, keys: &[&str], handler: impl ListItem + 'static) -> Self {
        self.registry.list_items.register(keys, Arc::new(handler));
        self
    }

    pub fn property_editor(mut self, keys: &[&str], handler: impl PropertyEditor + 'static) -> Self {
        self.registry.property_editors.register(keys, Arc::new(handler));
        self
    }

    pub fn drop_handler(mut self, keys: &[&str], handler: impl DropHandler + 'static) -> Self {
        self.registry.drop_handlers.register(keys, Arc::new(handler));
        self
    }

    pub fn build(self) -> CapabilityRegistry {
        self.registry
    }
}

/// Palette templates for the zone types
fn default_templates() -> Vec<SceneObject> {
    let id = ObjectId::new(0);
    vec![
        SceneObject::CircleZone(CircleZone {
            id,
            x: 0.0,
            y: 0.0,
            radius: 50.0,
            color: "#ff8000".to_string(),
            opacity: 50.0,
            pinned: false,
            parent_id: None,
        }),
        SceneObject::RectangleZone(RectangleZone {
            id,
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            rotation: 0.0,
            color: "#ff8000".to_string(),
            opacity: 50.0,
            pinned: false,
            parent_id: None,
        }),
        SceneObject::ConeZone(ConeZone {
            id,
            x: 0.0,
            y: 0.0,
            radius: 100.0,
            rotation: 0.0,
            cone_angle: 90.0,
            color: "#ff8000".to_string(),
            opacity: 50.0,
            pinned: false,
            parent_id: None,
        }),
    ]
}
