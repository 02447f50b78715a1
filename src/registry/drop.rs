// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Drag-and-drop payloads from the object palette.
//!
//! A payload names the object type and carries optional field overrides as
//! JSON. [`TemplateDropHandler`] merges those overrides into a template
//! object, places it at the drop point and adds it with a fresh id.

use super::DropHandler;
use crate::model::{Dispatch, SceneAction, SceneObject, SceneSink};
use anyhow::{Context, Result};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPayload {
    /// Registry key of the object to create
    pub object_type: String,
    /// Field overrides applied on top of the template
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl DropPayload {
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Parse a payload from drag data
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse drop payload")
    }
}

/// Creates objects by copying a template
#[derive(Debug, Clone)]
pub struct TemplateDropHandler {
    template: SceneObject,
}

impl TemplateDropHandler {
    pub fn new(template: SceneObject) -> Self {
        Self { template }
    }

    /// The object a payload would produce, before id and position are set
    pub fn build(&self, payload: &DropPayload) -> Result<SceneObject> {
        let mut value = serde_json::to_value(&self.template).context("Failed to encode template")?;
        if let Value::Object(fields) = &mut value {
            for (key, field) in &payload.fields {
                // The tag is fixed by the template
                if key != "type" {
                    fields.insert(key.clone(), field.clone());
                }
            }
        }
        serde_json::from_value(value).with_context(|| {
            format!(
                "Drop fields do not fit a '{}' object",
                self.template.type_key()
            )
        })
    }
}

impl DropHandler for TemplateDropHandler {
    fn on_drop(&self, payload: &DropPayload, position: Point, scene: &mut dyn SceneSink) -> bool {
        let mut object = match self.build(payload) {
            Ok(object) => object.with_position(position),
            Err(err) => {
                tracing::warn!("TemplateDropHandler: {:#}", err);
                return false;
            }
        };
        let Some(id) = scene.allocate_id() else {
            tracing::warn!("TemplateDropHandler: no id left for {}", object.type_key());
            return false;
        };
        object.set_id(id);
        tracing::debug!(
            "TemplateDropHandler: added {} {} at {:?}",
            object.type_key(),
            object.id(),
            position
        );
        scene.dispatch(SceneAction::Add(vec![object]));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Arena, CircleZone, ObjectId, Scene};

    fn template() -> SceneObject {
        SceneObject::CircleZone(CircleZone {
            id: ObjectId::new(0),
            x: 0.0,
            y: 0.0,
            radius: 50.0,
            color: "#ff8800".to_string(),
            opacity: 80.0,
            pinned: false,
            parent_id: None,
        })
    }

    #[test]
    fn payload_parses_with_optional_fields() {
        let payload = DropPayload::from_json(r#"{"objectType": "circleZone"}"#).unwrap();
        assert_eq!(payload, DropPayload::new("circleZone"));

        let payload =
            DropPayload::from_json(r#"{"objectType": "circleZone", "fields": {"radius": 12}}"#)
                .unwrap();
        assert_eq!(payload.fields.get("radius"), Some(&Value::from(12)));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err = DropPayload::from_json("{\"fields\": 3}").unwrap_err();
        assert!(format!("{err:#}").contains("drop payload"));
    }

    fn placed(id: u32) -> SceneObject {
        let mut object = template();
        object.set_id(ObjectId::new(id));
        object
    }

    #[test]
    fn drop_places_template_with_fresh_id() {
        let handler = TemplateDropHandler::new(template());
        let payload = DropPayload::new("circleZone").with_field("radius", 20.0);
        let mut scene = Scene::with_objects(Arena::default(), vec![placed(4)]);

        assert!(handler.on_drop(&payload, Point::new(15.0, -30.0), &mut scene));

        let expected = SceneObject::CircleZone(CircleZone {
            id: ObjectId::new(5),
            x: 15.0,
            y: -30.0,
            radius: 20.0,
            ..match template() {
                SceneObject::CircleZone(c) => c,
                _ => unreachable!(),
            }
        });
        assert_eq!(scene.objects(), &[placed(4), expected]);
        assert_eq!(scene.revision(), 1);
    }

    #[test]
    fn repeated_drops_never_share_ids() {
        let handler = TemplateDropHandler::new(template());
        let payload = DropPayload::new("circleZone");
        let mut scene = Scene::with_objects(Arena::default(), vec![placed(1)]);

        assert!(handler.on_drop(&payload, Point::ORIGIN, &mut scene));
        assert!(handler.on_drop(&payload, Point::ORIGIN, &mut scene));

        let ids: Vec<ObjectId> = scene.objects().iter().map(SceneObject::id).collect();
        assert_eq!(ids, vec![ObjectId::new(1), ObjectId::new(2), ObjectId::new(3)]);
    }

    #[test]
    fn ill_typed_fields_add_nothing() {
        let handler = TemplateDropHandler::new(template());
        let payload = DropPayload::new("circleZone").with_field("radius", "huge");
        let mut scene = Scene::new(Arena::default());

        assert!(!handler.on_drop(&payload, Point::ORIGIN, &mut scene));
        assert!(scene.objects().is_empty());
        assert_eq!(scene.revision(), 0);
    }
}
