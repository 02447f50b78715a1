// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Vector helpers on top of `kurbo`.
//!
//! Addition, subtraction and scalar multiplication come from `kurbo::Vec2`
//! operators. This module adds the pieces kurbo leaves to the caller: a
//! zero-safe unit vector, origin distances, and the compass angle used for
//! object rotation (0° points up, angles increase clockwise).

use kurbo::{Point, Vec2};

/// Unit vector in the direction of `v`, or zero for a zero-length input.
pub fn unit(v: Vec2) -> Vec2 {
    let length = v.hypot();
    if length == 0.0 { Vec2::ZERO } else { v / length }
}

/// Distance from the origin to `p`
pub fn distance(p: Point) -> f64 {
    p.to_vec2().hypot()
}

/// Distance between two points
pub fn distance_between(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Compass angle of a Y-up vector in degrees: `90 - atan2(y, x)`.
///
/// (0, 1) is 0°, (1, 0) is 90°. The result lies in (-180, 270].
pub fn compass_angle(v: Vec2) -> f64 {
    90.0 - v.y.atan2(v.x).to_degrees()
}

/// Compass angle of a canvas-space (Y-down) offset.
pub fn canvas_compass_angle(v: Vec2) -> f64 {
    compass_angle(Vec2::new(v.x, -v.y))
}

/// Wrap an angle in degrees into (-180, 180].
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn operators_cover_basic_algebra() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn unit_of_zero_is_zero() {
        assert_eq!(unit(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn unit_has_length_one() {
        let u = unit(Vec2::new(3.0, 4.0));
        assert!((u.hypot() - 1.0).abs() < EPSILON);
        assert!((u.x - 0.6).abs() < EPSILON);
    }

    #[test]
    fn distances() {
        assert_eq!(distance(Point::new(3.0, 4.0)), 5.0);
        assert_eq!(distance_between(Point::new(1.0, 1.0), Point::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn compass_angle_points_up_and_turns_clockwise() {
        assert!((compass_angle(Vec2::new(0.0, 1.0))).abs() < EPSILON);
        assert!((compass_angle(Vec2::new(1.0, 0.0)) - 90.0).abs() < EPSILON);
        assert!((compass_angle(Vec2::new(0.0, -1.0)) - 180.0).abs() < EPSILON);
        assert!((normalize_degrees(compass_angle(Vec2::new(-1.0, 0.0))) + 90.0).abs() < EPSILON);
    }

    #[test]
    fn canvas_angle_flips_y() {
        // Straight up on screen is negative y in canvas space
        assert!(canvas_compass_angle(Vec2::new(0.0, -10.0)).abs() < EPSILON);
        assert!((canvas_compass_angle(Vec2::new(10.0, 0.0)) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn normalize_wraps_into_half_open_range() {
        assert_eq!(normalize_degrees(190.0), -170.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(45.0), 45.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }
}
