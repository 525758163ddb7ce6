#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::ORIGIN);
}

#[test]
fn point_difference_is_size() {
    let d = Point::new(30.0, 10.0) - Point::new(10.0, 15.0);
    assert_eq!(d, Size::new(20.0, -5.0));
}

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
    assert!(approx_eq(Point::new(40.0, 50.0).distance(Point::new(60.0, 50.0)), 20.0));
}

#[test]
fn point_distance_to_self_is_zero() {
    let p = Point::new(12.5, -3.0);
    assert_eq!(p.distance(p), 0.0);
}

// --- Size ---

#[test]
fn size_addition() {
    assert_eq!(Size::new(1.0, 2.0) + Size::new(3.0, -5.0), Size::new(4.0, -3.0));
}

#[test]
fn size_zero_is_additive_identity() {
    let s = Size::new(7.0, 9.0);
    assert_eq!(s + Size::ZERO, s);
}

#[test]
fn size_angle_quadrants() {
    assert!(approx_eq(Size::new(1.0, 0.0).angle(), 0.0));
    assert!(approx_eq(Size::new(0.0, 1.0).angle(), std::f64::consts::FRAC_PI_2));
    assert!(approx_eq(Size::new(-1.0, 0.0).angle(), std::f64::consts::PI));
    assert!(approx_eq(Size::new(0.0, -1.0).angle(), -std::f64::consts::FRAC_PI_2));
}

#[test]
fn size_angle_of_zero_vector_is_defined() {
    assert_eq!(Size::ZERO.angle(), 0.0);
}

#[test]
fn size_length() {
    assert!(approx_eq(Size::new(-6.0, 8.0).length(), 10.0));
}
