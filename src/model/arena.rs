// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! The bounded arena objects are placed on

use crate::settings;
use serde::{Deserialize, Serialize};

/// Outline of the playable area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArenaShape {
    #[default]
    Rectangle,
    Circle,
}

/// Arena dimensions.
///
/// `width` and `height` are in scene units; `padding` is the canvas margin
/// drawn around the arena on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arena {
    #[serde(default)]
    pub shape: ArenaShape,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            shape: ArenaShape::Rectangle,
            width,
            height,
            padding,
        }
    }

    pub fn with_shape(mut self, shape: ArenaShape) -> Self {
        self.shape = shape;
        self
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(
            settings::arena::WIDTH,
            settings::arena::HEIGHT,
            settings::arena::PADDING,
        )
    }
}
