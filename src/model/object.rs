// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene objects: a tagged union keyed by `type`.
//!
//! Capabilities (position, rotation, size, radius, color, opacity) are
//! answered by matching on the variant, never by a shared base type. An
//! object "is moveable" because its variant carries a position, whatever its
//! tag happens to be.

use super::ObjectId;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

fn default_opacity() -> f64 {
    100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleZone {
    pub id: ObjectId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub parent_id: Option<ObjectId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleZone {
    pub id: ObjectId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub parent_id: Option<ObjectId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConeZone {
    pub id: ObjectId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    #[serde(default)]
    pub rotation: f64,
    /// Full opening angle in degrees
    pub cone_angle: f64,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub parent_id: Option<ObjectId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutZone {
    pub id: ObjectId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub inner_radius: f64,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub parent_id: Option<ObjectId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrow {
    pub id: ObjectId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub arrow_begin: bool,
    #[serde(default = "default_arrow_end")]
    pub arrow_end: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub parent_id: Option<ObjectId>,
}

fn default_arrow_end() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: ObjectId,
    pub name: String,
    pub image: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub parent_id: Option<ObjectId>,
}

/// A player-controlled actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: ObjectId,
    pub name: String,
    pub image: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub parent_id: Option<ObjectId>,
}

/// A hostile actor, drawn as a ring with a facing indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    pub id: ObjectId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    #[serde(default)]
    pub rotation: f64,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub parent_id: Option<ObjectId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub id: ObjectId,
    pub text: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    pub font_size: f64,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub parent_id: Option<ObjectId>,
}

/// Visual style of a tether line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TetherKind {
    #[default]
    Line,
    Close,
    Far,
    MinusMinus,
    PlusMinus,
    PlusPlus,
}

/// A line joining two other objects. Its position is derived entirely from
/// its endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tether {
    pub id: ObjectId,
    pub start_id: ObjectId,
    pub end_id: ObjectId,
    #[serde(default)]
    pub tether: TetherKind,
    pub width: f64,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

/// Any object placed on the arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SceneObject {
    CircleZone(CircleZone),
    RectangleZone(RectangleZone),
    ConeZone(ConeZone),
    DonutZone(DonutZone),
    Arrow(Arrow),
    Marker(Marker),
    Party(Party),
    Enemy(Enemy),
    Text(Text),
    Tether(Tether),
}

/// Position, size and rotation of a box-shaped object.
///
/// `x`/`y` are the scene-space center; `rotation` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObjectBox {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
}

impl SceneObject {
    /// Registry key for this object's variant
    pub fn type_key(&self) -> &'static str {
        match self {
            SceneObject::CircleZone(_) => "circleZone",
            SceneObject::RectangleZone(_) => "rectangleZone",
            SceneObject::ConeZone(_) => "coneZone",
            SceneObject::DonutZone(_) => "donutZone",
            SceneObject::Arrow(_) => "arrow",
            SceneObject::Marker(_) => "marker",
            SceneObject::Party(_) => "party",
            SceneObject::Enemy(_) => "enemy",
            SceneObject::Text(_) => "text",
            SceneObject::Tether(_) => "tether",
        }
    }

    pub fn id(&self) -> ObjectId {
        match self {
            SceneObject::CircleZone(o) => o.id,
            SceneObject::RectangleZone(o) => o.id,
            SceneObject::ConeZone(o) => o.id,
            SceneObject::DonutZone(o) => o.id,
            SceneObject::Arrow(o) => o.id,
            SceneObject::Marker(o) => o.id,
            SceneObject::Party(o) => o.id,
            SceneObject::Enemy(o) => o.id,
            SceneObject::Text(o) => o.id,
            SceneObject::Tether(o) => o.id,
        }
    }

    pub fn set_id(&mut self, id: ObjectId) {
        match self {
            SceneObject::CircleZone(o) => o.id = id,
            SceneObject::RectangleZone(o) => o.id = id,
            SceneObject::ConeZone(o) => o.id = id,
            SceneObject::DonutZone(o) => o.id = id,
            SceneObject::Arrow(o) => o.id = id,
            SceneObject::Marker(o) => o.id = id,
            SceneObject::Party(o) => o.id = id,
            SceneObject::Enemy(o) => o.id = id,
            SceneObject::Text(o) => o.id = id,
            SceneObject::Tether(o) => o.id = id,
        }
    }

    /// Scene-space position, for objects that have one
    pub fn position(&self) -> Option<Point> {
        let (x, y) = match self {
            SceneObject::CircleZone(o) => (o.x, o.y),
            SceneObject::RectangleZone(o) => (o.x, o.y),
            SceneObject::ConeZone(o) => (o.x, o.y),
            SceneObject::DonutZone(o) => (o.x, o.y),
            SceneObject::Arrow(o) => (o.x, o.y),
            SceneObject::Marker(o) => (o.x, o.y),
            SceneObject::Party(o) => (o.x, o.y),
            SceneObject::Enemy(o) => (o.x, o.y),
            SceneObject::Text(o) => (o.x, o.y),
            SceneObject::Tether(_) => return None,
        };
        Some(Point::new(x, y))
    }

    /// Rotation in degrees, for objects that can be rotated
    pub fn rotation(&self) -> Option<f64> {
        match self {
            SceneObject::RectangleZone(o) => Some(o.rotation),
            SceneObject::ConeZone(o) => Some(o.rotation),
            SceneObject::Arrow(o) => Some(o.rotation),
            SceneObject::Marker(o) => Some(o.rotation),
            SceneObject::Party(o) => Some(o.rotation),
            SceneObject::Enemy(o) => Some(o.rotation),
            SceneObject::Text(o) => Some(o.rotation),
            SceneObject::CircleZone(_) | SceneObject::DonutZone(_) | SceneObject::Tether(_) => {
                None
            }
        }
    }

    /// Width and height, for box-shaped objects
    pub fn size(&self) -> Option<Size> {
        match self {
            SceneObject::RectangleZone(o) => Some(Size::new(o.width, o.height)),
            SceneObject::Arrow(o) => Some(Size::new(o.width, o.height)),
            SceneObject::Marker(o) => Some(Size::new(o.width, o.height)),
            SceneObject::Party(o) => Some(Size::new(o.width, o.height)),
            _ => None,
        }
    }

    /// Outer radius, for round objects
    pub fn radius(&self) -> Option<f64> {
        match self {
            SceneObject::CircleZone(o) => Some(o.radius),
            SceneObject::ConeZone(o) => Some(o.radius),
            SceneObject::DonutZone(o) => Some(o.radius),
            SceneObject::Enemy(o) => Some(o.radius),
            _ => None,
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            SceneObject::CircleZone(o) => Some(&o.color),
            SceneObject::RectangleZone(o) => Some(&o.color),
            SceneObject::ConeZone(o) => Some(&o.color),
            SceneObject::DonutZone(o) => Some(&o.color),
            SceneObject::Arrow(o) => Some(&o.color),
            SceneObject::Marker(o) => Some(&o.color),
            SceneObject::Enemy(o) => Some(&o.color),
            SceneObject::Text(o) => Some(&o.color),
            SceneObject::Tether(o) => Some(&o.color),
            SceneObject::Party(_) => None,
        }
    }

    /// Opacity as a percentage (0-100)
    pub fn opacity(&self) -> Option<f64> {
        Some(match self {
            SceneObject::CircleZone(o) => o.opacity,
            SceneObject::RectangleZone(o) => o.opacity,
            SceneObject::ConeZone(o) => o.opacity,
            SceneObject::DonutZone(o) => o.opacity,
            SceneObject::Arrow(o) => o.opacity,
            SceneObject::Marker(o) => o.opacity,
            SceneObject::Party(o) => o.opacity,
            SceneObject::Enemy(o) => o.opacity,
            SceneObject::Text(o) => o.opacity,
            SceneObject::Tether(o) => o.opacity,
        })
    }

    /// Whether the object is locked in place
    pub fn is_pinned(&self) -> bool {
        match self {
            SceneObject::CircleZone(o) => o.pinned,
            SceneObject::RectangleZone(o) => o.pinned,
            SceneObject::ConeZone(o) => o.pinned,
            SceneObject::DonutZone(o) => o.pinned,
            SceneObject::Arrow(o) => o.pinned,
            SceneObject::Marker(o) => o.pinned,
            SceneObject::Party(o) => o.pinned,
            SceneObject::Enemy(o) => o.pinned,
            SceneObject::Text(o) => o.pinned,
            SceneObject::Tether(_) => false,
        }
    }

    /// Objects this object's position is derived from.
    ///
    /// A tether follows both of its endpoints; other objects follow at most
    /// one attached parent.
    pub fn position_parents(&self) -> Vec<ObjectId> {
        let parent = match self {
            SceneObject::CircleZone(o) => o.parent_id,
            SceneObject::RectangleZone(o) => o.parent_id,
            SceneObject::ConeZone(o) => o.parent_id,
            SceneObject::DonutZone(o) => o.parent_id,
            SceneObject::Arrow(o) => o.parent_id,
            SceneObject::Marker(o) => o.parent_id,
            SceneObject::Party(o) => o.parent_id,
            SceneObject::Enemy(o) => o.parent_id,
            SceneObject::Text(o) => o.parent_id,
            SceneObject::Tether(o) => return vec![o.start_id, o.end_id],
        };
        parent.into_iter().collect()
    }

    pub fn is_moveable(&self) -> bool {
        self.position().is_some()
    }

    pub fn is_rotatable(&self) -> bool {
        self.rotation().is_some()
    }

    /// Box-shaped objects the resizer can drive
    pub fn is_resizable(&self) -> bool {
        self.is_moveable() && self.size().is_some()
    }

    pub fn is_radius_object(&self) -> bool {
        self.radius().is_some()
    }

    pub fn has_color(&self) -> bool {
        self.color().is_some()
    }

    pub fn has_opacity(&self) -> bool {
        self.opacity().is_some()
    }

    /// Current box, for resizable objects
    pub fn object_box(&self) -> Option<ObjectBox> {
        let position = self.position()?;
        let size = self.size()?;
        Some(ObjectBox {
            x: position.x,
            y: position.y,
            rotation: self.rotation().unwrap_or(0.0),
            width: size.width,
            height: size.height,
        })
    }

    /// Copy of this object with a new position. Objects without a position
    /// are returned unchanged.
    pub fn with_position(&self, position: Point) -> Self {
        let mut next = self.clone();
        let place = |x: &mut f64, y: &mut f64| {
            *x = position.x;
            *y = position.y;
        };
        match &mut next {
            SceneObject::CircleZone(o) => place(&mut o.x, &mut o.y),
            SceneObject::RectangleZone(o) => place(&mut o.x, &mut o.y),
            SceneObject::ConeZone(o) => place(&mut o.x, &mut o.y),
            SceneObject::DonutZone(o) => place(&mut o.x, &mut o.y),
            SceneObject::Arrow(o) => place(&mut o.x, &mut o.y),
            SceneObject::Marker(o) => place(&mut o.x, &mut o.y),
            SceneObject::Party(o) => place(&mut o.x, &mut o.y),
            SceneObject::Enemy(o) => place(&mut o.x, &mut o.y),
            SceneObject::Text(o) => place(&mut o.x, &mut o.y),
            SceneObject::Tether(_) => {}
        }
        next
    }

    /// Copy of this object with a new rotation, if it is rotatable
    pub fn with_rotation(&self, rotation: f64) -> Self {
        let mut next = self.clone();
        match &mut next {
            SceneObject::RectangleZone(o) => o.rotation = rotation,
            SceneObject::ConeZone(o) => o.rotation = rotation,
            SceneObject::Arrow(o) => o.rotation = rotation,
            SceneObject::Marker(o) => o.rotation = rotation,
            SceneObject::Party(o) => o.rotation = rotation,
            SceneObject::Enemy(o) => o.rotation = rotation,
            SceneObject::Text(o) => o.rotation = rotation,
            SceneObject::CircleZone(_) | SceneObject::DonutZone(_) | SceneObject::Tether(_) => {}
        }
        next
    }

    /// Copy of this object with a new outer radius, if it has one.
    ///
    /// A donut's inner radius is capped at the new outer radius.
    pub fn with_radius(&self, radius: f64) -> Self {
        let mut next = self.clone();
        match &mut next {
            SceneObject::CircleZone(o) => o.radius = radius,
            SceneObject::ConeZone(o) => o.radius = radius,
            SceneObject::DonutZone(o) => {
                o.radius = radius;
                o.inner_radius = o.inner_radius.min(radius);
            }
            SceneObject::Enemy(o) => o.radius = radius,
            _ => {}
        }
        next
    }

    /// Copy of this object with its box replaced, if it is resizable
    pub fn with_box(&self, object_box: ObjectBox) -> Self {
        let mut next = self
            .with_position(Point::new(object_box.x, object_box.y))
            .with_rotation(object_box.rotation);
        match &mut next {
            SceneObject::RectangleZone(o) => {
                o.width = object_box.width;
                o.height = object_box.height;
            }
            SceneObject::Arrow(o) => {
                o.width = object_box.width;
                o.height = object_box.height;
            }
            SceneObject::Marker(o) => {
                o.width = object_box.width;
                o.height = object_box.height;
            }
            SceneObject::Party(o) => {
                o.width = object_box.width;
                o.height = object_box.height;
            }
            _ => return self.clone(),
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle() -> SceneObject {
        SceneObject::CircleZone(CircleZone {
            id: ObjectId::new(1),
            x: 10.0,
            y: -20.0,
            radius: 50.0,
            color: "#ff0000".to_string(),
            opacity: 50.0,
            pinned: false,
            parent_id: None,
        })
    }

    fn rect() -> SceneObject {
        SceneObject::RectangleZone(RectangleZone {
            id: ObjectId::new(2),
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 40.0,
            rotation: 30.0,
            color: "#00ff00".to_string(),
            opacity: 100.0,
            pinned: false,
            parent_id: None,
        })
    }

    fn tether() -> SceneObject {
        SceneObject::Tether(Tether {
            id: ObjectId::new(3),
            start_id: ObjectId::new(1),
            end_id: ObjectId::new(2),
            tether: TetherKind::Line,
            width: 6.0,
            color: "#ffffff".to_string(),
            opacity: 100.0,
        })
    }

    #[test]
    fn capabilities_follow_fields() {
        let circle = circle();
        assert!(circle.is_moveable());
        assert!(circle.is_radius_object());
        assert!(!circle.is_resizable());
        assert!(!circle.is_rotatable());

        let rect = rect();
        assert!(rect.is_resizable());
        assert!(rect.is_rotatable());
        assert!(!rect.is_radius_object());

        let tether = tether();
        assert!(!tether.is_moveable());
        assert!(tether.has_color());
    }

    #[test]
    fn tether_follows_both_endpoints() {
        assert_eq!(
            tether().position_parents(),
            vec![ObjectId::new(1), ObjectId::new(2)]
        );
        assert!(circle().position_parents().is_empty());
    }

    #[test]
    fn with_box_updates_resizable_objects_only() {
        let next = rect().with_box(ObjectBox {
            x: 5.0,
            y: 6.0,
            rotation: 45.0,
            width: 30.0,
            height: 20.0,
        });
        assert_eq!(
            next.object_box(),
            Some(ObjectBox {
                x: 5.0,
                y: 6.0,
                rotation: 45.0,
                width: 30.0,
                height: 20.0,
            })
        );

        let circle = circle();
        assert_eq!(circle.with_box(ObjectBox::default()), circle);
    }

    #[test]
    fn with_radius_caps_donut_inner_radius() {
        let donut = SceneObject::DonutZone(DonutZone {
            id: ObjectId::new(4),
            x: 0.0,
            y: 0.0,
            radius: 100.0,
            inner_radius: 60.0,
            color: "#ff00ff".to_string(),
            opacity: 100.0,
            pinned: false,
            parent_id: None,
        });
        let SceneObject::DonutZone(shrunk) = donut.with_radius(40.0) else {
            panic!("variant changed");
        };
        assert_eq!(shrunk.radius, 40.0);
        assert_eq!(shrunk.inner_radius, 40.0);

        let SceneObject::DonutZone(grown) = donut.with_radius(120.0) else {
            panic!("variant changed");
        };
        assert_eq!(grown.inner_radius, 60.0);
    }

    #[test]
    fn serde_uses_type_tag() {
        let json = serde_json::to_value(circle()).unwrap();
        assert_eq!(json["type"], "circleZone");
        assert_eq!(json["radius"], 50.0);

        let parsed: SceneObject = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, circle());
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let parsed: SceneObject = serde_json::from_str(
            r##"{"type":"coneZone","id":7,"x":0,"y":0,"radius":80,"coneAngle":90,"color":"#fff"}"##,
        )
        .unwrap();
        assert_eq!(parsed.rotation(), Some(0.0));
        assert_eq!(parsed.opacity(), Some(100.0));
        assert!(!parsed.is_pinned());
        assert_eq!(parsed.type_key(), "coneZone");
    }
}
