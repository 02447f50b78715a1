// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`. Runtime
//! overrides live in `config.rs` and default to the values here.

// ============================================================================
// ARENA SETTINGS
// ============================================================================
/// Default arena width (scene units)
const ARENA_WIDTH: f64 = 600.0;

/// Default arena height (scene units)
const ARENA_HEIGHT: f64 = 600.0;

/// Default padding around the arena (canvas pixels)
const ARENA_PADDING: f64 = 120.0;

// ============================================================================
// CONTROL POINT SETTINGS
// ============================================================================
/// Visual size of a control point handle (canvas pixels)
const CONTROL_POINT_HANDLE_SIZE: f64 = 10.0;

/// Distance handles sit outside the edge they control
const CONTROL_POINT_OUTSET: f64 = 2.0;

/// Smallest radius a radius handle can produce
const CONTROL_POINT_MIN_RADIUS: f64 = 10.0;

/// Smallest cone angle an angle handle can produce (degrees)
const CONTROL_POINT_MIN_CONE_ANGLE: f64 = 1.0;

/// Extra slop around a handle that still counts as a hit (canvas pixels)
const CONTROL_POINT_HIT_SLOP: f64 = 2.0;

// ============================================================================
// RESIZER SETTINGS
// ============================================================================
/// Minimum width and height of a resized object (scene units)
const RESIZER_MIN_SIZE: f64 = 20.0;

/// Rotation detent spacing (degrees)
const RESIZER_ROTATION_SNAP_DIVISION: f64 = 15.0;

/// Rotation detent tolerance (degrees)
const RESIZER_ROTATION_SNAP_TOLERANCE: f64 = 2.0;

/// Anchor size bounds (canvas pixels)
const RESIZER_HANDLE_SIZE_MIN: f64 = 6.0;
const RESIZER_HANDLE_SIZE_MAX: f64 = 10.0;

/// Anchor size as a fraction of the object's smaller side
const RESIZER_HANDLE_SIZE_RATIO: f64 = 0.25;

/// Distance of the rotater above the top edge (canvas pixels)
const RESIZER_ROTATER_OFFSET: f64 = 20.0;

// ============================================================================
// HIGHLIGHT SETTINGS
// ============================================================================
/// Upper bound on position-parent hops walked by the highlight resolver.
///
/// The data model never creates cycles, but the reference graph is edited
/// externally, so the walk stops here regardless.
const HIGHLIGHT_MAX_PARENT_DEPTH: usize = 32;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Arena defaults
pub mod arena {
    pub const WIDTH: f64 = super::ARENA_WIDTH;
    pub const HEIGHT: f64 = super::ARENA_HEIGHT;
    pub const PADDING: f64 = super::ARENA_PADDING;
}

/// Control point manager settings
pub mod control_points {
    /// Handle size in canvas pixels
    pub const HANDLE_SIZE: f64 = super::CONTROL_POINT_HANDLE_SIZE;

    /// Offset between a drawn edge and its handle
    pub const OUTSET: f64 = super::CONTROL_POINT_OUTSET;

    /// Minimum radius produced by radius handles
    pub const MIN_RADIUS: f64 = super::CONTROL_POINT_MIN_RADIUS;

    /// Minimum cone angle produced by angle handles
    pub const MIN_CONE_ANGLE: f64 = super::CONTROL_POINT_MIN_CONE_ANGLE;

    /// Extra hit-test distance around a handle
    pub const HIT_SLOP: f64 = super::CONTROL_POINT_HIT_SLOP;
}

/// Bounding-box resizer settings
pub mod resizer {
    pub const MIN_SIZE: f64 = super::RESIZER_MIN_SIZE;
    pub const ROTATION_SNAP_DIVISION: f64 = super::RESIZER_ROTATION_SNAP_DIVISION;
    pub const ROTATION_SNAP_TOLERANCE: f64 = super::RESIZER_ROTATION_SNAP_TOLERANCE;
    pub const HANDLE_SIZE_MIN: f64 = super::RESIZER_HANDLE_SIZE_MIN;
    pub const HANDLE_SIZE_MAX: f64 = super::RESIZER_HANDLE_SIZE_MAX;
    pub const HANDLE_SIZE_RATIO: f64 = super::RESIZER_HANDLE_SIZE_RATIO;
    pub const ROTATER_OFFSET: f64 = super::RESIZER_ROTATER_OFFSET;
}

/// Selection highlight settings
pub mod highlight {
    /// Maximum number of position-parent hops
    pub const MAX_PARENT_DEPTH: usize = super::HIGHLIGHT_MAX_PARENT_DEPTH;
}
