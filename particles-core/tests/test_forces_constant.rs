//! Unit tests for the uniform (constant) gravity field

use glam::DVec2;
use particles_core::angle::Angle;
use particles_core::engine::PhysicsState;
use particles_core::gravity::{ConstantGravity, GravityKind, GravitySource};
use particles_core::tests::test_helpers::{approx_eq, approx_eq_vec};
use std::f64::consts::PI;

fn default_constant_source() -> GravitySource {
    let mut source = GravitySource::new(
        PhysicsState::default(),
        GravityKind::Constant(ConstantGravity::default()),
    );
    source.enable();
    source
}

#[test]
fn test_default_points_down_with_strength_ten() {
    let law = ConstantGravity::default();
    assert!(approx_eq(law.angle_as_degrees(), 270.0, 1e-9));
    assert_eq!(law.strength(), 10.0);

    let source = default_constant_source();
    let force = source.calculate_force(&PhysicsState::default());
    assert!(approx_eq_vec(force, DVec2::new(0.0, 10.0), 1e-9));
}

#[test]
fn test_force_independent_of_target() {
    let source = default_constant_source();
    let near = PhysicsState::at(DVec2::new(0.0, 0.0), 0.0);
    let far = PhysicsState::at(DVec2::new(-900.0, 42.0), 1234.0);

    assert_eq!(source.calculate_force(&near), source.calculate_force(&far));
}

#[test]
fn test_disabled_constant_gives_zero() {
    let mut source = default_constant_source();
    source.disable();

    assert_eq!(source.calculate_force(&PhysicsState::default()), DVec2::ZERO);
}

#[test]
fn test_angle_setters() {
    let mut law = ConstantGravity::default();

    law.set_angle_from_degrees(90.0);
    assert!(approx_eq(law.angle_as_radians(), PI / 2.0, 1e-12));
    assert!(approx_eq_vec(law.field(), DVec2::new(0.0, -10.0), 1e-9));

    law.set_angle_from_radians(0.0);
    assert!(approx_eq(law.angle_as_degrees(), 0.0, 1e-12));
    assert!(approx_eq_vec(law.field(), DVec2::new(10.0, 0.0), 1e-9));
}

#[test]
fn test_negative_strength_reverses_field() {
    let mut law = ConstantGravity::default();
    law.set_strength(-2.5);
    assert_eq!(law.strength(), -2.5);
    assert!(approx_eq_vec(law.field(), DVec2::new(0.0, -2.5), 1e-9));
}

#[test]
fn test_constant_constructor() {
    let mut source = GravitySource::constant(Angle::from_degrees(180.0), 3.0);
    source.enable();

    let force = source.calculate_force(&PhysicsState::at(DVec2::new(7.0, 7.0), 1.0));
    assert!(approx_eq_vec(force, DVec2::new(-3.0, 0.0), 1e-9));
}
