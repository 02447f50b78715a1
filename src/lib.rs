// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Planboard: the interactive editing core of a 2D arena diagram editor.
//!
//! Objects live in a Y-up scene centered on the arena and are drawn on a
//! Y-down canvas. Shapes expose drag handles through the generic
//! [`editing::ControlPointManager`]; box-shaped objects use the
//! [`editing::Resizer`]. Finished drags become [`model::SceneAction`]s that
//! the host dispatches into its own history.
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod config;
pub mod coords;
pub mod editing;
pub mod geometry;
pub mod model;
pub mod registry;
pub mod render;
pub mod settings;
pub mod shapes;
pub mod theme;

pub use config::EditorConfig;
pub use editing::{ControlPointManager, ControlPoints, Highlight, Resizer, Selection};
pub use model::{Arena, ObjectId, Scene, SceneAction, SceneObject};
pub use registry::CapabilityRegistry;
