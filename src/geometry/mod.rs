// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Pure geometry helpers

pub mod arrow;
pub mod vector;

pub use arrow::{StrokeExtent, arrow_stroke_extent};
pub use vector::{
    canvas_compass_angle, compass_angle, distance, distance_between, normalize_degrees, unit,
};
