//! Unit tests for physics state integration

use glam::DVec2;
use particles_core::engine::PhysicsState;
use particles_core::tests::test_helpers::approx_eq_vec;

#[test]
fn test_default_state_is_zero() {
    let state = PhysicsState::default();
    assert_eq!(state.position, DVec2::ZERO);
    assert_eq!(state.velocity, DVec2::ZERO);
    assert_eq!(state.mass, 0.0);
}

#[test]
fn test_at_sets_position_and_mass() {
    let state = PhysicsState::at(DVec2::new(3.0, -2.0), 7.5);
    assert_eq!(state.position, DVec2::new(3.0, -2.0));
    assert_eq!(state.velocity, DVec2::ZERO);
    assert_eq!(state.mass, 7.5);
}

#[test]
fn test_fields_round_trip() {
    let mut state = PhysicsState::default();
    state.position = DVec2::new(1.25, -4.0);
    state.velocity = DVec2::new(-0.5, 9.0);
    state.mass = -3.0; // negative mass is stored as given

    assert_eq!(state.position, DVec2::new(1.25, -4.0));
    assert_eq!(state.velocity, DVec2::new(-0.5, 9.0));
    assert_eq!(state.mass, -3.0);
}

#[test]
fn test_integrate_no_forces_keeps_velocity() {
    let mut state = PhysicsState::default();
    state.velocity = DVec2::new(2.0, 3.0);
    state.integrate_forces(&[]);
    assert_eq!(state.velocity, DVec2::new(2.0, 3.0));
}

#[test]
fn test_integrate_sums_every_force() {
    let mut state = PhysicsState::at(DVec2::ZERO, 100.0);
    state.velocity = DVec2::new(1.0, 1.0);
    state.integrate_forces(&[
        DVec2::new(0.5, 0.0),
        DVec2::new(0.0, -2.0),
        DVec2::new(0.5, 0.0),
    ]);

    // Mass does not scale the forces
    assert!(approx_eq_vec(state.velocity, DVec2::new(2.0, -1.0), 1e-12));
}

#[test]
fn test_update_with_zero_velocity_keeps_position() {
    let mut state = PhysicsState::at(DVec2::new(4.0, 5.0), 1.0);
    state.update();
    assert_eq!(state.position, DVec2::new(4.0, 5.0));
}

#[test]
fn test_update_moves_by_velocity_each_call() {
    let mut state = PhysicsState::default();
    state.velocity = DVec2::new(1.0, 2.0);

    state.update();
    assert_eq!(state.position, DVec2::new(1.0, 2.0));

    state.update();
    assert_eq!(state.position, DVec2::new(2.0, 4.0));
}
