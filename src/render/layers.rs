// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Named compositing layers.
//!
//! Each layer records into its own vello scene. Flattening appends them in
//! declaration order, so anything drawn on [`LayerName::Controls`] stays on
//! top of every object regardless of paint order.

use masonry::vello::Scene;

/// Compositing layers, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerName {
    /// Arena background
    Ground,
    /// Regular objects
    Default,
    /// Objects that render above the rest, such as tethers
    Foreground,
    /// The object currently being edited
    Active,
    /// Handles and borders
    Controls,
}

impl LayerName {
    pub const ALL: [LayerName; 5] = [
        LayerName::Ground,
        LayerName::Default,
        LayerName::Foreground,
        LayerName::Active,
        LayerName::Controls,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// One vello scene per layer
pub struct LayeredScene {
    layers: [Scene; 5],
}

impl LayeredScene {
    pub fn new() -> Self {
        Self {
            layers: std::array::from_fn(|_| Scene::new()),
        }
    }

    pub fn layer(&self, name: LayerName) -> &Scene {
        &self.layers[name.index()]
    }

    pub fn layer_mut(&mut self, name: LayerName) -> &mut Scene {
        &mut self.layers[name.index()]
    }

    /// Whether nothing has been recorded on any layer
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.encoding().is_empty())
    }

    /// Clear every layer for the next frame
    pub fn reset(&mut self) {
        for layer in &mut self.layers {
            layer.reset();
        }
    }

    /// Append all layers in order onto `target`
    pub fn flatten_into(&self, target: &mut Scene) {
        for layer in &self.layers {
            target.append(layer, None);
        }
    }

    pub fn flatten(&self) -> Scene {
        let mut scene = Scene::new();
        self.flatten_into(&mut scene);
        scene
    }
}

impl Default for LayeredScene {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LayeredScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredScene").finish_non_exhaustive()
    }
}
