// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Interactive editing: pointer input, handles, and decoration

pub mod control_points;
pub mod handle;
pub mod highlight;
pub mod pointer;
pub mod resizer;
pub mod selection;

pub use control_points::{
    ControlPointDelegate, ControlPointError, ControlPointManager, ControlPoints, Session,
};
pub use handle::{Handle, HandleId, HandleProps, HandleStyle};
pub use highlight::{EditMode, Highlight, HighlightContext, resolve_highlight};
pub use pointer::{Cursor, PointerDevice, PointerEvent, PointerPhase};
pub use resizer::{Anchor, BoxCommit, Resizer, ResizerConfig, ResizerNode};
pub use selection::Selection;
