//! Gravity sources and the force laws they apply
//!
//! A [`GravitySource`] pairs a physical state with a [`GravityKind`]. Both
//! kinds implement [`GravityScalar`], so hosts can ask any source for the
//! force it exerts on a target without caring which law it uses.

use crate::angle::Angle;
use crate::engine::PhysicsState;
use glam::DVec2;

/// Default direction of a constant field: straight down on screen.
pub const DEFAULT_CONSTANT_ANGLE_DEGREES: f64 = 270.0;
/// Default magnitude of a constant field.
pub const DEFAULT_CONSTANT_STRENGTH: f64 = 10.0;

/// Anything that can compute the force a source exerts on a target
pub trait GravityScalar {
    fn compute_force(&self, source: &PhysicsState, target: &PhysicsState) -> DVec2;
}

/// Inverse-square attraction toward the source.
///
/// The gravitational constant is implicitly 1. A massless target still feels
/// the source's full mass (and vice versa); only two massless bodies produce
/// no force.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointGravity;

impl PointGravity {
    /// Mass used by the inverse-square law, with zero standing for "massless".
    pub fn combined_mass(source_mass: f64, target_mass: f64) -> f64 {
        if target_mass == 0.0 {
            source_mass
        } else if source_mass == 0.0 {
            target_mass
        } else {
            source_mass * target_mass
        }
    }
}

impl GravityScalar for PointGravity {
    fn compute_force(&self, source: &PhysicsState, target: &PhysicsState) -> DVec2 {
        let r = target.position - source.position;
        let dist_sq = r.length_squared();
        // Coincident bodies have no direction to pull along.
        if dist_sq == 0.0 {
            return DVec2::ZERO;
        }

        let combined_mass = Self::combined_mass(source.mass, target.mass);
        if combined_mass == 0.0 {
            return DVec2::ZERO;
        }

        r.normalize() * (combined_mass / dist_sq)
    }
}

/// Uniform field: same direction and magnitude for every target.
///
/// A negative strength pushes along the opposite direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantGravity {
    angle: Angle,
    strength: f64,
}

impl ConstantGravity {
    pub fn new(angle: Angle, strength: f64) -> Self {
        Self { angle, strength }
    }

    pub fn set_angle_from_radians(&mut self, radians: f64) {
        self.angle = Angle::from_radians(radians);
    }

    pub fn set_angle_from_degrees(&mut self, degrees: f64) {
        self.angle = Angle::from_degrees(degrees);
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn angle_as_radians(&self) -> f64 {
        self.angle.radians()
    }

    pub fn angle_as_degrees(&self) -> f64 {
        self.angle.degrees()
    }

    pub fn set_strength(&mut self, strength: f64) {
        self.strength = strength;
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// The field vector; independent of any source or target.
    pub fn field(&self) -> DVec2 {
        self.angle.unit_vector() * self.strength
    }
}

impl Default for ConstantGravity {
    fn default() -> Self {
        Self::new(
            Angle::from_degrees(DEFAULT_CONSTANT_ANGLE_DEGREES),
            DEFAULT_CONSTANT_STRENGTH,
        )
    }
}

impl GravityScalar for ConstantGravity {
    fn compute_force(&self, _source: &PhysicsState, _target: &PhysicsState) -> DVec2 {
        self.field()
    }
}

/// The force law a gravity source applies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GravityKind {
    Point(PointGravity),
    Constant(ConstantGravity),
}

impl GravityScalar for GravityKind {
    fn compute_force(&self, source: &PhysicsState, target: &PhysicsState) -> DVec2 {
        match self {
            GravityKind::Point(law) => law.compute_force(source, target),
            GravityKind::Constant(law) => law.compute_force(source, target),
        }
    }
}

/// A gravity source that can be switched on and off.
///
/// Sources start disabled. A disabled source contributes the zero vector to
/// every query, whatever its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct GravitySource {
    pub state: PhysicsState,
    pub kind: GravityKind,
    enabled: bool,
}

impl GravitySource {
    pub fn new(state: PhysicsState, kind: GravityKind) -> Self {
        Self {
            state,
            kind,
            enabled: false,
        }
    }

    /// Inverse-square source at `position`.
    pub fn point(position: DVec2, mass: f64) -> Self {
        Self::new(
            PhysicsState::at(position, mass),
            GravityKind::Point(PointGravity),
        )
    }

    /// Uniform field source.
    pub fn constant(angle: Angle, strength: f64) -> Self {
        Self::new(
            PhysicsState::default(),
            GravityKind::Constant(ConstantGravity::new(angle, strength)),
        )
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Force this source exerts on `target`.
    pub fn calculate_force(&self, target: &PhysicsState) -> DVec2 {
        if !self.enabled {
            return DVec2::ZERO;
        }
        self.kind.compute_force(&self.state, target)
    }
}
