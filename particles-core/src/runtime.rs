use crate::angle::Angle;
use crate::config::{ScenarioConfig, SourceConfig};
use crate::emitter::Emitter;
use crate::engine::World;
use crate::error::ScenarioError;
use crate::gravity::GravitySource;
use crate::integrator::step;
use crate::particle::{ParticleHandle, ParticlePool};
use glam::DVec2;
use std::path::Path;

/// Axis-aligned region; particles leaving it are returned to the pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Inclusive on every edge.
    pub fn contains(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}

/// Snapshot of one active particle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    pub handle: ParticleHandle,
    pub pos: DVec2,
    pub vel: DVec2,
}

/// Final result of running a scenario
#[derive(Debug)]
pub struct SimulationResult {
    pub steps: u64,
    pub particles: Vec<ParticleState>,
}

/// Everything the host loop needs to advance a simulation
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub world: World,
    pub pool: ParticlePool,
    pub sources: Vec<GravitySource>,
    pub emitters: Vec<Emitter>,
    pub bounds: Option<Bounds>,
    pub current_step: u64,
    pub max_steps: u64,
}

impl SimulationContext {
    /// Empty simulation with a pool sized for `world`.
    pub fn new(world: World, max_steps: u64) -> Self {
        let pool = ParticlePool::new(&world);
        Self {
            world,
            pool,
            sources: Vec::new(),
            emitters: Vec::new(),
            bounds: None,
            current_step: 0,
            max_steps,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current_step >= self.max_steps
    }
}

/// Build a simulation context from a parsed scenario
pub fn build_simulation_context(cfg: &ScenarioConfig) -> Result<SimulationContext, ScenarioError> {
    let world = World::with_particle_limit(cfg.world.particle_limit);
    let mut ctx = SimulationContext::new(world, cfg.steps);

    if let Some(b) = cfg.bounds {
        if !(b.min.x < b.max.x && b.min.y < b.max.y) {
            return Err(ScenarioError::InvalidBounds {
                min_x: b.min.x,
                min_y: b.min.y,
                max_x: b.max.x,
                max_y: b.max.y,
            });
        }
        ctx.bounds = Some(Bounds::new(b.min, b.max));
    }

    for source_cfg in &cfg.sources {
        let (mut source, enabled) = match *source_cfg {
            SourceConfig::Point {
                position,
                mass,
                enabled,
            } => (GravitySource::point(position, mass), enabled),
            SourceConfig::Constant {
                angle_degrees,
                strength,
                enabled,
            } => (
                GravitySource::constant(Angle::from_degrees(angle_degrees), strength),
                enabled,
            ),
        };
        if enabled {
            source.enable();
        }
        ctx.sources.push(source);
    }

    ctx.emitters = cfg
        .emitters
        .iter()
        .map(|e| Emitter::new(e.position, e.velocity, e.rate))
        .collect();

    for particle_cfg in &cfg.particles {
        ctx.pool
            .spawn(&ctx.world, particle_cfg.position, particle_cfg.velocity)?;
    }

    log::info!(
        "Built scenario: {} sources, {} emitters, {} particles, limit {}",
        ctx.sources.len(),
        ctx.emitters.len(),
        ctx.pool.len(),
        ctx.world.particle_limit()
    );

    Ok(ctx)
}

/// Parse a YAML scenario and build its context
pub fn build_simulation_context_from_source(
    source: &str,
) -> Result<SimulationContext, ScenarioError> {
    let cfg: ScenarioConfig = serde_yaml::from_str(source)?;
    build_simulation_context(&cfg)
}

/// Advance one step. Returns true once the simulation has finished.
pub fn step_simulation(ctx: &mut SimulationContext) -> bool {
    if ctx.is_finished() {
        return true;
    }
    step(ctx);
    ctx.current_step += 1;
    ctx.is_finished()
}

/// Snapshot every active particle
pub fn get_particle_states(ctx: &SimulationContext) -> Vec<ParticleState> {
    ctx.pool
        .iter()
        .map(|(handle, p)| ParticleState {
            handle,
            pos: p.state.position,
            vel: p.state.velocity,
        })
        .collect()
}

/// Main entry point: parse and run a scenario to completion
pub fn run_scenario(source: &str) -> Result<SimulationResult, ScenarioError> {
    let mut ctx = build_simulation_context_from_source(source)?;
    while !step_simulation(&mut ctx) {}

    Ok(SimulationResult {
        steps: ctx.current_step,
        particles: get_particle_states(&ctx),
    })
}

/// Read a scenario file and run it
pub fn run_scenario_file(path: impl AsRef<Path>) -> Result<SimulationResult, ScenarioError> {
    let source = std::fs::read_to_string(path)?;
    run_scenario(&source)
}
