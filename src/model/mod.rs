// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene data model

pub mod arena;
pub mod object;
pub mod object_id;
pub mod scene;

pub use arena::{Arena, ArenaShape};
pub use object::{
    Arrow, CircleZone, ConeZone, DonutZone, Enemy, Marker, ObjectBox, Party, RectangleZone,
    SceneObject, Tether, TetherKind, Text,
};
pub use object_id::{IdAllocator, ObjectId};
pub use scene::{Dispatch, ObjectLookup, Scene, SceneAction, SceneSink};
