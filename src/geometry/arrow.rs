// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Stroke extents for triangular arrowheads.
//!
//! A stroke centered on the outline of a triangle pokes out past its
//! vertices. Arrow renderers use these extents to pull the arrowhead back so
//! the stroked tip lands exactly on the arrow's end point.

/// How far a stroked arrowhead extends past its geometric outline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrokeExtent {
    /// Past the tip
    pub top: f64,
    /// Past the base
    pub bottom: f64,
    /// Past each base corner, measured along the base
    pub side: f64,
}

/// Compute stroke extents for an arrowhead of the given `length` (base to
/// tip) and base `width`, stroked with `stroke_width`.
///
/// Any non-positive (or NaN) input yields all-zero extents.
pub fn arrow_stroke_extent(length: f64, width: f64, stroke_width: f64) -> StrokeExtent {
    if !(length > 0.0 && width > 0.0 && stroke_width > 0.0) {
        return StrokeExtent::default();
    }

    // Half-angle between the base and a side of the triangle
    let theta = (length / (width / 2.0)).atan();
    let half_stroke = stroke_width / 2.0;

    let top = half_stroke / theta.sin();
    let side = top + half_stroke / theta.tan();

    StrokeExtent {
        top,
        bottom: half_stroke,
        side,
    }
}
