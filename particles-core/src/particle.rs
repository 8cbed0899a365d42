//! Pooled particles
//!
//! Particles are allocated up front in a [`ParticlePool`] and recycled through
//! [`Particle::setup`] instead of being constructed per spawn.

use crate::engine::{PhysicsState, World};
use crate::error::PoolError;
use glam::DVec2;

/// Rendering collaborator that particles draw themselves onto
pub trait Canvas {
    fn draw_particle(&mut self, particle: &Particle);
}

/// A particle in the simulation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    pub state: PhysicsState,
}

impl Particle {
    /// Overwrite position and velocity for a fresh lifetime.
    pub fn setup(&mut self, position: DVec2, velocity: DVec2) {
        self.state.position = position;
        self.state.velocity = velocity;
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_particle(self);
    }
}

/// Upper bound on slots allocated by [`ParticlePool::new`]; larger limits grow on demand.
pub const MAX_PREALLOCATED_SLOTS: usize = 4096;

/// Handle to a slot in a [`ParticlePool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleHandle(pub usize);

/// Arena of particle slots with a free-list
#[derive(Debug, Clone)]
pub struct ParticlePool {
    slots: Vec<Particle>,
    active: Vec<bool>,
    free: Vec<usize>, // popped from the back, lowest index last pushed
    active_count: usize,
}

impl ParticlePool {
    /// Preallocate one slot per particle the world allows, up to
    /// [`MAX_PREALLOCATED_SLOTS`].
    pub fn new(world: &World) -> Self {
        let capacity = world.particle_limit().min(MAX_PREALLOCATED_SLOTS);
        Self {
            slots: vec![Particle::default(); capacity],
            active: vec![false; capacity],
            free: (0..capacity).rev().collect(),
            active_count: 0,
        }
    }

    /// Activate a slot and set it up with `position` and `velocity`.
    ///
    /// The world's limit is read on every call, so lowering it stops spawning
    /// and raising it grows the arena.
    pub fn spawn(
        &mut self,
        world: &World,
        position: DVec2,
        velocity: DVec2,
    ) -> Result<ParticleHandle, PoolError> {
        let limit = world.particle_limit();
        if self.active_count >= limit {
            return Err(PoolError::Exhausted { limit });
        }

        let idx = match self.free.pop() {
            Some(idx) => idx,
            None => {
                self.slots.push(Particle::default());
                self.active.push(false);
                self.slots.len() - 1
            }
        };

        self.slots[idx].setup(position, velocity);
        self.active[idx] = true;
        self.active_count += 1;
        Ok(ParticleHandle(idx))
    }

    /// Return a slot to the free-list. Its contents stay until the next `setup`.
    pub fn release(&mut self, handle: ParticleHandle) -> Result<(), PoolError> {
        let ParticleHandle(idx) = handle;
        if !self.active.get(idx).copied().unwrap_or(false) {
            return Err(PoolError::Inactive(idx));
        }
        self.active[idx] = false;
        self.free.push(idx);
        self.active_count -= 1;
        Ok(())
    }

    pub fn get(&self, handle: ParticleHandle) -> Option<&Particle> {
        self.is_active(handle).then(|| &self.slots[handle.0])
    }

    pub fn get_mut(&mut self, handle: ParticleHandle) -> Option<&mut Particle> {
        if self.is_active(handle) {
            Some(&mut self.slots[handle.0])
        } else {
            None
        }
    }

    pub fn is_active(&self, handle: ParticleHandle) -> bool {
        self.active.get(handle.0).copied().unwrap_or(false)
    }

    /// Active particles in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ParticleHandle, &Particle)> {
        self.slots
            .iter()
            .zip(&self.active)
            .enumerate()
            .filter(|(_, (_, active))| **active)
            .map(|(idx, (particle, _))| (ParticleHandle(idx), particle))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ParticleHandle, &mut Particle)> {
        self.slots
            .iter_mut()
            .zip(&self.active)
            .enumerate()
            .filter(|(_, (_, active))| **active)
            .map(|(idx, (particle, _))| (ParticleHandle(idx), particle))
    }

    /// Number of active particles.
    pub fn len(&self) -> usize {
        self.active_count
    }

    pub fn is_empty(&self) -> bool {
        self.active_count == 0
    }

    /// Number of allocated slots, active or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
