// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_D: Color = Color::from_rgb8(0x40, 0x40, 0x40);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_O: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);

// ============================================================================
// CONTROL POINT HANDLES
// ============================================================================
const HANDLE_FILL: Color = BASE_O;
const HANDLE_STROKE: Color = Color::from_rgb8(0x2a, 0x7d, 0xe1);
const HANDLE_ACTIVE_FILL: Color = Color::from_rgb8(0xff, 0xee, 0x55);

// Live reference outline drawn while a handle is dragged
const BORDER_STROKE: Color = Color::from_rgba8(0x2a, 0x7d, 0xe1, 0xc0);

// ============================================================================
// RESIZER
// ============================================================================
const RESIZER_OUTLINE: Color = Color::from_rgb8(0x2a, 0x7d, 0xe1);
const RESIZER_ANCHOR_FILL: Color = BASE_O;
const RESIZER_ANCHOR_STROKE: Color = Color::from_rgb8(0x2a, 0x7d, 0xe1);

// ============================================================================
// HIGHLIGHT COLORS (Selection and spotlight decoration)
// ============================================================================
const SELECTED: Color = Color::from_rgb8(0x57, 0x9a, 0xff);
const SPOTLIGHT: Color = Color::from_rgb8(0xff, 0xaa, 0x33);
// Connected variants are the same hue, dimmed
const CONNECTED_SELECTED: Color = Color::from_rgba8(0x57, 0x9a, 0xff, 0x80);
const CONNECTED_SPOTLIGHT: Color = Color::from_rgba8(0xff, 0xaa, 0x33, 0x80);

// ============================================================================
// OBJECTS
// ============================================================================
/// Fill used when an object's color string cannot be parsed
const FALLBACK_OBJECT_FILL: Color = BASE_I;
const ARENA_OUTLINE: Color = BASE_D;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for control point handles
pub mod handle {
    use super::Color;
    pub const FILL: Color = super::HANDLE_FILL;
    pub const STROKE: Color = super::HANDLE_STROKE;
    pub const ACTIVE_FILL: Color = super::HANDLE_ACTIVE_FILL;
    pub const BORDER: Color = super::BORDER_STROKE;
}

/// Colors for the bounding-box resizer
pub mod resizer {
    use super::Color;
    pub const OUTLINE: Color = super::RESIZER_OUTLINE;
    pub const ANCHOR_FILL: Color = super::RESIZER_ANCHOR_FILL;
    pub const ANCHOR_STROKE: Color = super::RESIZER_ANCHOR_STROKE;
}

/// Decoration colors returned by the highlight resolver
pub mod highlight {
    use super::Color;
    pub const SELECTED: Color = super::SELECTED;
    pub const SPOTLIGHT: Color = super::SPOTLIGHT;
    pub const CONNECTED_SELECTED: Color = super::CONNECTED_SELECTED;
    pub const CONNECTED_SPOTLIGHT: Color = super::CONNECTED_SPOTLIGHT;
}

/// Colors for scene objects
pub mod object {
    use super::Color;
    pub const FALLBACK_FILL: Color = super::FALLBACK_OBJECT_FILL;
    pub const ARENA_OUTLINE: Color = super::ARENA_OUTLINE;
}

/// Sizes for rendering
pub mod size {
    /// Width of handle outlines
    pub const HANDLE_STROKE_WIDTH: f64 = 1.0;

    /// Width of the live border outline
    pub const BORDER_STROKE_WIDTH: f64 = 1.0;

    /// Dash pattern for borders [dash_length, gap_length]
    pub const BORDER_DASH: [f64; 2] = [4.0, 4.0];

    /// Width of the resizer outline
    pub const RESIZER_STROKE_WIDTH: f64 = 1.0;

    /// Width of highlight outlines around objects
    pub const HIGHLIGHT_STROKE_WIDTH: f64 = 2.0;

    /// Width of a selected object's highlight outline
    pub const SELECTED_STROKE_WIDTH: f64 = 3.0;
}
