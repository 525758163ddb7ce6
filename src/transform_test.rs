#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Constructors ---

#[test]
fn default_is_identity() {
    assert_eq!(Transform::default(), Transform::IDENTITY);
}

#[test]
fn identity_leaves_points_alone() {
    let p = Point::new(12.0, -7.5);
    assert_eq!(Transform::IDENTITY.apply(p), p);
}

#[test]
fn translation_moves_points() {
    let t = Transform::translation(10.0, -4.0);
    assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(11.0, -3.0));
}

#[test]
fn scaling_scales_about_origin() {
    let t = Transform::scaling(2.0, 3.0);
    assert_eq!(t.apply(Point::new(5.0, 5.0)), Point::new(10.0, 15.0));
}

#[test]
fn rotation_quarter_turn() {
    let t = Transform::rotation(FRAC_PI_2);
    assert!(point_approx_eq(t.apply(Point::new(1.0, 0.0)), Point::new(0.0, 1.0)));
    assert!(point_approx_eq(t.apply(Point::new(0.0, 1.0)), Point::new(-1.0, 0.0)));
}

// --- Composition ---

#[test]
fn concat_applies_inner_first() {
    let outer = Transform::translation(10.0, 0.0);
    let inner = Transform::scaling(2.0, 2.0);
    let p = Point::new(3.0, 4.0);
    assert_eq!(outer.concat(&inner).apply(p), outer.apply(inner.apply(p)));
    assert_eq!(outer.concat(&inner).apply(p), Point::new(16.0, 8.0));
}

#[test]
fn concat_with_identity_is_noop() {
    let t = Transform::translation(5.0, 6.0).scale(2.0, 2.0).rotate(0.3);
    assert_eq!(t.concat(&Transform::IDENTITY), t);
    assert_eq!(Transform::IDENTITY.concat(&t), t);
}

#[test]
fn translate_scale_rotate_chain_matches_closed_form() {
    let (scale, angle) = (3.0, 0.7);
    let t = Transform::translation(-20.0, 40.0).scale(scale, scale).rotate(angle);
    let (sin, cos) = angle.sin_cos();
    assert!(approx_eq(t.m11, scale * cos));
    assert!(approx_eq(t.m12, scale * sin));
    assert!(approx_eq(t.m21, -scale * sin));
    assert!(approx_eq(t.m22, scale * cos));
    assert!(approx_eq(t.dx, -20.0));
    assert!(approx_eq(t.dy, 40.0));
}

#[test]
fn chain_translation_is_outermost() {
    let t = Transform::translation(100.0, 50.0).scale(2.0, 2.0);
    assert_eq!(t.apply(Point::ORIGIN), Point::new(100.0, 50.0));
    assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(102.0, 52.0));
}

// --- Output ---

#[test]
fn to_array_order() {
    let t = Transform { m11: 1.0, m12: 2.0, m21: 3.0, m22: 4.0, dx: 5.0, dy: 6.0 };
    assert_eq!(t.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn to_css_matrix_text() {
    let t = Transform::translation(5.0, -2.5).scale(2.0, 2.0);
    assert_eq!(t.to_css(), "matrix(2, 0, 0, 2, 5, -2.5)");
}

#[test]
fn serializes_entries_by_name() {
    let json = serde_json::to_value(Transform::translation(1.0, 2.0)).unwrap_or_default();
    assert_eq!(json["dx"], 1.0);
    assert_eq!(json["dy"], 2.0);
    assert_eq!(json["m11"], 1.0);
}
