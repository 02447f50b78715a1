// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Type-keyed dispatch without inheritance.
//!
//! A [`Registry`] maps object type keys to shared handlers for one role.
//! Lookups never fail: unknown keys resolve to the role's no-op handler, so a
//! missing registration only makes one object type inert.

pub mod capabilities;
pub mod drop;
pub mod roles;

pub use capabilities::{CapabilityRegistry, CapabilityRegistryBuilder};
pub use drop::{DropPayload, TemplateDropHandler};
pub use roles::{
    CapabilityPropertyEditor, DropHandler, ListEntry, ListItem, NamedListItem, NoopHandler,
    ObjectRenderer, PropertyEditor, PropertyKind, RenderContext, Role,
};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Handlers for one role, keyed by object type
pub struct Registry<H: ?Sized> {
    handlers: HashMap<String, Arc<H>>,
    fallback: Arc<H>,
}

impl<H: ?Sized + Role> Registry<H> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: H::noop(),
        }
    }
}

impl<H: ?Sized> Registry<H> {
    /// Register `handler` for every key in `keys`. A later registration of
    /// the same key replaces the earlier one.
    pub fn register(&mut self, keys: &[&str], handler: Arc<H>) {
        for key in keys {
            if self
                .handlers
                .insert((*key).to_string(), Arc::clone(&handler))
                .is_some()
            {
                tracing::debug!("Registry: replaced handler for '{}'", key);
            }
        }
    }

    /// Handler for `key`, or the no-op handler when none is registered
    pub fn get(&self, key: &str) -> &H {
        self.handlers.get(key).unwrap_or(&self.fallback)
    }

    /// Shared handle to the handler for `key`
    pub fn get_shared(&self, key: &str) -> Arc<H> {
        Arc::clone(self.handlers.get(key).unwrap_or(&self.fallback))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl<H: ?Sized + Role> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ?Sized> fmt::Debug for Registry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CircleZone, ObjectId, SceneObject};

    struct Named(&'static str);

    impl ListItem for Named {
        fn describe(&self, _object: &SceneObject) -> Option<ListEntry> {
            Some(ListEntry::new(self.0))
        }
    }

    fn circle() -> SceneObject {
        SceneObject::CircleZone(CircleZone {
            id: ObjectId::new(1),
            x: 0.0,
            y: 0.0,
            radius: 10.0,
            color: "#ff0000".to_string(),
            opacity: 100.0,
            pinned: false,
            parent_id: None,
        })
    }

    #[test]
    fn unknown_keys_get_the_noop_handler() {
        let registry: Registry<dyn ListItem> = Registry::new();
        assert_eq!(registry.get("nothing").describe(&circle()), None);
        assert!(!registry.contains("nothing"));
    }

    #[test]
    fn last_registration_wins() {
        let mut registry: Registry<dyn ListItem> = Registry::new();
        registry.register(&["circleZone", "donutZone"], Arc::new(Named("first")));
        registry.register(&["circleZone"], Arc::new(Named("second")));

        let label = |key| registry.get(key).describe(&circle()).map(|e| e.label);
        assert_eq!(label("circleZone"), Some("second".to_string()));
        assert_eq!(label("donutZone"), Some("first".to_string()));
        assert_eq!(registry.keys(), vec!["circleZone", "donutZone"]);
    }
}
