// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for scene objects.
//!
//! Each `ObjectId` is a monotonically increasing `u32` handed out by the
//! owning scene's `IdAllocator`. IDs are used as keys in `Selection` sets and
//! as position-parent references between objects. They are never reused
//! within a scene, so a deleted actor leaves no tether pointing at a newer
//! object by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Wrap a raw id (e.g. one read back from a saved scene)
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id value
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out scene-unique ids in increasing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    /// `None` once `u32::MAX` has been handed out
    next: Option<u32>,
}

impl IdAllocator {
    /// Create an allocator whose first id is 1
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Create an allocator that continues after the largest existing id
    pub fn after<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = ObjectId>,
    {
        let max = ids.into_iter().map(ObjectId::get).max().unwrap_or(0);
        Self {
            next: max.checked_add(1),
        }
    }

    /// Allocate the next id, or `None` when the id space is used up
    pub fn next_id(&mut self) -> Option<ObjectId> {
        let Some(raw) = self.next else {
            tracing::error!("IdAllocator: object ids exhausted");
            return None;
        };
        self.next = raw.checked_add(1);
        Some(ObjectId(raw))
    }

    /// Make sure ids handed out from now on are greater than `id`
    pub fn reserve(&mut self, id: ObjectId) {
        if self.next.is_some_and(|next| id.0 >= next) {
            self.next = id.0.checked_add(1);
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
