use crate::gravity::GravitySource;
use crate::particle::ParticleHandle;
use crate::runtime::SimulationContext;
use glam::DVec2;

/// Forces every enabled source exerts on every active particle.
///
/// Sources and particles are only read, so each list is computed against the
/// same snapshot of the tick.
pub fn collect_forces(ctx: &SimulationContext) -> Vec<(ParticleHandle, Vec<DVec2>)> {
    let sources: Vec<&GravitySource> = ctx.sources.iter().filter(|s| s.is_enabled()).collect();

    ctx.pool
        .iter()
        .map(|(handle, particle)| {
            let forces = sources
                .iter()
                .map(|source| source.calculate_force(&particle.state))
                .collect();
            (handle, forces)
        })
        .collect()
}

/// Advance the simulation by one tick using explicit Euler integration
pub fn step(ctx: &mut SimulationContext) {
    for emitter in &ctx.emitters {
        emitter.emit(&ctx.world, &mut ctx.pool);
    }

    // First, compute all forces
    let forces = collect_forces(ctx);

    // Then update velocities and positions (v += sum(F), then x += v)
    for (handle, particle_forces) in &forces {
        if let Some(particle) = ctx.pool.get_mut(*handle) {
            particle.state.integrate_forces(particle_forces);
            particle.state.update();
        }
    }

    if let Some(bounds) = ctx.bounds {
        let escaped: Vec<ParticleHandle> = ctx
            .pool
            .iter()
            .filter(|(_, p)| !bounds.contains(p.state.position))
            .map(|(handle, _)| handle)
            .collect();
        for handle in escaped {
            if let Err(e) = ctx.pool.release(handle) {
                log::warn!("Failed to recycle escaped particle: {}", e);
            }
        }
    }

    log::trace!(
        "Step {}: {} active particles",
        ctx.current_step,
        ctx.pool.len()
    );
}
