use glam::DVec2;

/// Default number of particles a world may host at once.
pub const DEFAULT_PARTICLE_LIMIT: usize = 1000;

/// Physical state shared by every object in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicsState {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Mass used by gravity calculations. Zero is a valid "massless" value.
    pub mass: f64,
}

impl PhysicsState {
    /// State for a permanent body (e.g. a gravity source) at rest.
    pub fn at(position: DVec2, mass: f64) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
            mass,
        }
    }

    /// Massless state at rest, used by emitters.
    pub fn at_position(position: DVec2) -> Self {
        Self::at(position, 0.0)
    }

    /// Add every force to the velocity.
    ///
    /// Forces are treated as accelerations: the object's own mass does not
    /// scale them.
    pub fn integrate_forces(&mut self, forces: &[DVec2]) {
        for force in forces {
            self.velocity += *force;
        }
    }

    /// Advance the position by one implicit time unit.
    pub fn update(&mut self) {
        self.position += self.velocity;
    }
}

/// Simulation-wide constraints.
///
/// The world does not own the particles; whoever does (see
/// [`crate::particle::ParticlePool`]) must consult [`World::particle_limit`]
/// before spawning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    particle_limit: usize,
}

impl World {
    pub fn new() -> Self {
        Self {
            particle_limit: DEFAULT_PARTICLE_LIMIT,
        }
    }

    pub fn with_particle_limit(particle_limit: usize) -> Self {
        Self { particle_limit }
    }

    pub fn set_particle_limit(&mut self, particle_limit: usize) {
        self.particle_limit = particle_limit;
    }

    pub fn particle_limit(&self) -> usize {
        self.particle_limit
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
