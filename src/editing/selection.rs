// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Sets of object ids that drive decoration.
//!
//! The editor keeps two of these: the user's selection and the spotlight
//! (objects called out for the audience). The highlight resolver reads both,
//! and the resize widget appears only when the selection holds exactly one
//! object, see [`Selection::only`]. Sets are shared behind an `Arc` and
//! iterate in id order. Ids of objects removed from the scene are dropped by
//! [`Selection::retain_existing`].

use crate::model::{ObjectId, ObjectLookup};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    inner: Arc<BTreeSet<ObjectId>>,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BTreeSet::new()),
        }
    }

    /// A selection holding exactly one object
    pub fn single(id: ObjectId) -> Self {
        Self {
            inner: Arc::new(BTreeSet::from([id])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.inner.contains(id)
    }

    /// The selected id, if exactly one object is selected
    pub fn only(&self) -> Option<ObjectId> {
        match self.inner.len() {
            1 => self.inner.first().copied(),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectId> {
        self.inner.iter()
    }

    pub fn insert(&mut self, id: ObjectId) {
        if !self.contains(&id) {
            Arc::make_mut(&mut self.inner).insert(id);
        }
    }

    pub fn remove(&mut self, id: &ObjectId) {
        if self.contains(id) {
            Arc::make_mut(&mut self.inner).remove(id);
        }
    }

    /// Drop ids that no longer name an object in `objects`
    pub fn retain_existing(&mut self, objects: &dyn ObjectLookup) {
        if self.iter().all(|id| objects.object(*id).is_some()) {
            return;
        }
        Arc::make_mut(&mut self.inner).retain(|id| objects.object(*id).is_some());
    }

    /// Add the id if absent, remove it if present
    pub fn toggle(&mut self, id: ObjectId) {
        if self.contains(&id) {
            self.remove(&id);
        } else {
            self.insert(id);
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ObjectId> for Selection {
    fn from_iter<I: IntoIterator<Item = ObjectId>>(iter: I) -> Self {
        Self {
            inner: Arc::new(iter.into_iter().collect()),
        }
    }
}
