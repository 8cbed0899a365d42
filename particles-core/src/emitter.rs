use crate::engine::{PhysicsState, World};
use crate::error::PoolError;
use crate::particle::ParticlePool;
use glam::DVec2;

/// Spawns particles at its position every tick
#[derive(Debug, Clone, PartialEq)]
pub struct Emitter {
    pub state: PhysicsState,
    /// Initial velocity given to each particle it spawns.
    pub launch_velocity: DVec2,
    /// Particles spawned per tick.
    pub rate: usize,
}

impl Emitter {
    pub fn new(position: DVec2, launch_velocity: DVec2, rate: usize) -> Self {
        Self {
            state: PhysicsState::at_position(position),
            launch_velocity,
            rate,
        }
    }

    /// Spawn up to `rate` particles, stopping early once the pool is full.
    ///
    /// Returns how many were spawned.
    pub fn emit(&self, world: &World, pool: &mut ParticlePool) -> usize {
        for spawned in 0..self.rate {
            match pool.spawn(world, self.state.position, self.launch_velocity) {
                Ok(_) => {}
                Err(PoolError::Exhausted { limit }) => {
                    log::debug!(
                        "Emitter at {} stopped after {} particles: limit {} reached",
                        self.state.position,
                        spawned,
                        limit
                    );
                    return spawned;
                }
                Err(e) => {
                    log::warn!("Emitter spawn failed: {}", e);
                    return spawned;
                }
            }
        }
        self.rate
    }
}
