// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer events and cursors.
//!
//! Mouse and touch input reach the editing core as one event type. Hosts
//! forward window-level move/up events to whichever manager currently holds
//! capture, so a drag that leaves the shape's bounds (or ends over an
//! unrelated element) still reaches the session that started it.

use kurbo::Point;

/// Phase of a pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Input device that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerDevice {
    #[default]
    Mouse,
    Touch,
}

/// A pointer event in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub device: PointerDevice,
    /// Position in canvas space
    pub position: Point,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, device: PointerDevice, position: Point) -> Self {
        Self {
            phase,
            device,
            position,
        }
    }

    pub fn down(position: Point) -> Self {
        Self::new(PointerPhase::Down, PointerDevice::Mouse, position)
    }

    pub fn moved(position: Point) -> Self {
        Self::new(PointerPhase::Move, PointerDevice::Mouse, position)
    }

    pub fn up(position: Point) -> Self {
        Self::new(PointerPhase::Up, PointerDevice::Mouse, position)
    }

    /// Same event reported by a touch device
    pub fn touch(self) -> Self {
        Self {
            device: PointerDevice::Touch,
            ..self
        }
    }
}

/// Mouse cursor shown over a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    Move,
    Grab,
    Crosshair,
    NsResize,
    NeswResize,
    EwResize,
    NwseResize,
}

impl Cursor {
    /// CSS cursor name, for hosts that render through a web view
    pub fn css_name(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
            Cursor::Move => "move",
            Cursor::Grab => "grab",
            Cursor::Crosshair => "crosshair",
            Cursor::NsResize => "ns-resize",
            Cursor::NeswResize => "nesw-resize",
            Cursor::EwResize => "ew-resize",
            Cursor::NwseResize => "nwse-resize",
        }
    }
}
