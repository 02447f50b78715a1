// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Minimal scene store and the mutation actions the editing core emits.
//!
//! The undo history and persistence layers live outside this crate. The
//! store here keeps the ordered object list and counts applied actions, which
//! is enough for hosts to wire up their own history and for the editing core
//! to be exercised end to end.

use super::{Arena, IdAllocator, ObjectId, SceneObject};

/// A change to the scene
#[derive(Debug, Clone, PartialEq)]
pub enum SceneAction {
    /// Append new objects
    Add(Vec<SceneObject>),
    /// Replace objects with the same ids by these values
    Update(Vec<SceneObject>),
    /// Remove objects by id
    Remove(Vec<ObjectId>),
}

/// Anything that accepts scene actions.
///
/// Editing code only ever talks to this trait, so hosts can route actions
/// through their own undo stack.
pub trait Dispatch {
    fn dispatch(&mut self, action: SceneAction);
}

/// A dispatcher that also hands out ids for the objects it will receive
pub trait SceneSink: Dispatch {
    /// `None` once ids are exhausted
    fn allocate_id(&mut self) -> Option<ObjectId>;
}

/// Records actions without applying them
impl Dispatch for Vec<SceneAction> {
    fn dispatch(&mut self, action: SceneAction) {
        self.push(action);
    }
}

/// Read-only object lookup by id
pub trait ObjectLookup {
    fn object(&self, id: ObjectId) -> Option<&SceneObject>;
}

impl ObjectLookup for [SceneObject] {
    fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.iter().find(|o| o.id() == id)
    }
}

impl ObjectLookup for Vec<SceneObject> {
    fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.as_slice().object(id)
    }
}

/// Ordered objects on an arena
#[derive(Debug, Clone)]
pub struct Scene {
    pub arena: Arena,
    objects: Vec<SceneObject>,
    ids: IdAllocator,
    /// Number of actions applied so far
    revision: u64,
}

impl Scene {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            objects: Vec::new(),
            ids: IdAllocator::new(),
            revision: 0,
        }
    }

    /// Build a scene from existing objects, continuing id allocation after
    /// the largest id present
    pub fn with_objects(arena: Arena, objects: Vec<SceneObject>) -> Self {
        let ids = IdAllocator::after(objects.iter().map(SceneObject::id));
        Self {
            arena,
            objects,
            ids,
            revision: 0,
        }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn contains(&self, id: ObjectId) -> bool {
        self.objects.iter().any(|o| o.id() == id)
    }
}

impl SceneSink for Scene {
    fn allocate_id(&mut self) -> Option<ObjectId> {
        self.ids.next_id()
    }
}

impl ObjectLookup for Scene {
    fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.get(id)
    }
}

impl Dispatch for Scene {
    fn dispatch(&mut self, action: SceneAction) {
        match action {
            SceneAction::Add(objects) => {
                for mut object in objects {
                    if self.contains(object.id()) {
                        let Some(id) = self.ids.next_id() else {
                            tracing::error!("Scene: dropped {} added with a taken id", object.id());
                            continue;
                        };
                        tracing::warn!("Scene: id {} already taken, added as {}", object.id(), id);
                        object.set_id(id);
                    }
                    self.ids.reserve(object.id());
                    self.objects.push(object);
                }
            }
            SceneAction::Update(objects) => {
                for object in objects {
                    match self.objects.iter_mut().find(|o| o.id() == object.id()) {
                        Some(slot) => *slot = object,
                        None => {
                            tracing::debug!("Scene: update for unknown object {}", object.id());
                        }
                    }
                }
            }
            SceneAction::Remove(ids) => {
                self.objects.retain(|o| !ids.contains(&o.id()));
            }
        }
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CircleZone;

    fn circle(id: u32, radius: f64) -> SceneObject {
        SceneObject::CircleZone(CircleZone {
            id: ObjectId::new(id),
            x: 0.0,
            y: 0.0,
            radius,
            color: "#ff0000".to_string(),
            opacity: 100.0,
            pinned: false,
            parent_id: None,
        })
    }

    #[test]
    fn update_replaces_by_id() {
        let mut scene = Scene::with_objects(Arena::default(), vec![circle(1, 10.0), circle(2, 20.0)]);
        scene.dispatch(SceneAction::Update(vec![circle(2, 35.0)]));

        assert_eq!(scene.get(ObjectId::new(2)).and_then(SceneObject::radius), Some(35.0));
        assert_eq!(scene.get(ObjectId::new(1)).and_then(SceneObject::radius), Some(10.0));
        assert_eq!(scene.revision(), 1);
    }

    #[test]
    fn ids_continue_after_existing_objects() {
        let mut scene = Scene::with_objects(Arena::default(), vec![circle(5, 10.0)]);
        assert_eq!(scene.allocate_id(), Some(ObjectId::new(6)));
    }

    #[test]
    fn added_ids_are_reserved() {
        let mut scene = Scene::new(Arena::default());
        scene.dispatch(SceneAction::Add(vec![circle(9, 10.0)]));
        assert_eq!(scene.allocate_id(), Some(ObjectId::new(10)));
    }

    #[test]
    fn colliding_add_gets_a_fresh_id() {
        let mut scene = Scene::with_objects(Arena::default(), vec![circle(1, 10.0)]);
        scene.dispatch(SceneAction::Add(vec![circle(1, 25.0)]));

        let ids: Vec<ObjectId> = scene.objects().iter().map(SceneObject::id).collect();
        assert_eq!(ids, vec![ObjectId::new(1), ObjectId::new(2)]);
        assert_eq!(scene.get(ObjectId::new(1)).and_then(SceneObject::radius), Some(10.0));
        assert_eq!(scene.get(ObjectId::new(2)).and_then(SceneObject::radius), Some(25.0));
        assert_eq!(scene.allocate_id(), Some(ObjectId::new(3)));
    }

    #[test]
    fn remove_drops_objects() {
        let mut scene = Scene::with_objects(Arena::default(), vec![circle(1, 10.0), circle(2, 20.0)]);
        scene.dispatch(SceneAction::Remove(vec![ObjectId::new(1)]));
        assert_eq!(scene.objects().len(), 1);
        assert!(scene.object(ObjectId::new(1)).is_none());
    }
}
