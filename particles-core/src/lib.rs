pub mod angle;
pub mod config;
pub mod emitter;
pub mod engine;
pub mod error;
pub mod gravity;
pub mod integrator;
pub mod particle;
pub mod runtime;

pub use angle::Angle;
pub use config::ScenarioConfig;
pub use emitter::Emitter;
pub use engine::{PhysicsState, World};
pub use error::{PoolError, ScenarioError};
pub use gravity::{ConstantGravity, GravityKind, GravityScalar, GravitySource, PointGravity};
pub use particle::{Canvas, Particle, ParticleHandle, ParticlePool};
pub use runtime::{
    build_simulation_context, build_simulation_context_from_source, get_particle_states,
    run_scenario, run_scenario_file, step_simulation, Bounds, ParticleState, SimulationContext,
    SimulationResult,
};
