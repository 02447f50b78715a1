// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime editor configuration.
//!
//! Loaded from TOML. Every field is optional and falls back to the matching
//! constant in [`crate::settings`].
//!
//! ```toml
//! [arena]
//! width = 800
//! shape = "circle"
//!
//! [resizer]
//! min_size = 10
//! keep_ratio = true
//! ```

use crate::editing::{ControlPointManager, ControlPoints, ResizerConfig};
use crate::model::{Arena, ArenaShape};
use crate::settings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub arena: ArenaSection,
    pub control_points: ControlPointSection,
    pub resizer: ResizerSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaSection {
    pub shape: ArenaShape,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ArenaSection {
    fn default() -> Self {
        Self {
            shape: ArenaShape::Rectangle,
            width: settings::arena::WIDTH,
            height: settings::arena::HEIGHT,
            padding: settings::arena::PADDING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlPointSection {
    pub handle_size: f64,
    pub outset: f64,
    pub min_radius: f64,
}

impl Default for ControlPointSection {
    fn default() -> Self {
        Self {
            handle_size: settings::control_points::HANDLE_SIZE,
            outset: settings::control_points::OUTSET,
            min_radius: settings::control_points::MIN_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizerSection {
    pub min_size: f64,
    pub rotation_snap_division: f64,
    pub rotation_snap_tolerance: f64,
    pub keep_ratio: bool,
    pub centered_scaling: bool,
}

impl Default for ResizerSection {
    fn default() -> Self {
        Self {
            min_size: settings::resizer::MIN_SIZE,
            rotation_snap_division: settings::resizer::ROTATION_SNAP_DIVISION,
            rotation_snap_tolerance: settings::resizer::ROTATION_SNAP_TOLERANCE,
            keep_ratio: false,
            centered_scaling: false,
        }
    }
}

impl EditorConfig {
    /// Read a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse editor config")
    }

    pub fn arena(&self) -> Arena {
        let section = &self.arena;
        Arena::new(section.width, section.height, section.padding).with_shape(section.shape)
    }

    /// Resizer settings with this config's overrides applied
    pub fn resizer(&self) -> ResizerConfig {
        let section = &self.resizer;
        ResizerConfig {
            min_size: section.min_size,
            rotation_snap_division: section.rotation_snap_division,
            rotation_snap_tolerance: section.rotation_snap_tolerance,
            keep_ratio: section.keep_ratio,
            centered_scaling: section.centered_scaling,
            ..ResizerConfig::default()
        }
    }

    /// Manager for `shape` using this config's handle size
    pub fn control_points<C: ControlPoints>(
        &self,
        shape: C,
        config: C::Config,
    ) -> ControlPointManager<C> {
        ControlPointManager::new(shape, config).with_handle_size(self.control_points.handle_size)
    }

    pub fn radius(&self) -> crate::shapes::RadiusConfig {
        crate::shapes::RadiusConfig {
            outset: self.control_points.outset,
            min_radius: self.control_points.min_radius,
        }
    }

    pub fn cone(&self) -> crate::shapes::ConeConfig {
        crate::shapes::ConeConfig {
            outset: self.control_points.outset,
            min_radius: self.control_points.min_radius,
            ..Default::default()
        }
    }
}
