//! Scenario configuration loaded from YAML
//!
//! A scenario describes the initial contents of a simulation:
//!
//! - [`WorldConfig`]    – simulation-wide constraints (particle limit)
//! - [`SourceConfig`]   – gravity sources, point or constant
//! - [`EmitterConfig`]  – particle emitters
//! - [`ParticleConfig`] – particles present at step 0
//! - [`BoundsConfig`]   – optional region outside which particles are recycled
//!
//! # YAML format
//!
//! ```yaml
//! world:
//!   particle_limit: 1000
//! steps: 600
//! bounds:
//!   min: [0.0, 0.0]
//!   max: [800.0, 450.0]
//! sources:
//!   - kind: point
//!     position: [400.0, 225.0]
//!     mass: 500.0
//!   - kind: constant
//!     angle_degrees: 270.0
//!     strength: 0.05
//!     enabled: false
//! emitters:
//!   - position: [400.0, 60.0]
//!     velocity: [1.5, 0.0]
//!     rate: 2
//! particles:
//!   - position: [100.0, 100.0]
//!     velocity: [0.0, 0.5]
//! ```
//!
//! Vectors are written as `[x, y]`. Y grows downward, as on screen.

use crate::engine::DEFAULT_PARTICLE_LIMIT;
use crate::gravity::{DEFAULT_CONSTANT_ANGLE_DEGREES, DEFAULT_CONSTANT_STRENGTH};
use glam::DVec2;
use serde::Deserialize;

/// Number of steps a scenario runs for when it does not say
pub const DEFAULT_STEPS: u64 = 600;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WorldConfig {
    #[serde(default = "default_particle_limit")]
    pub particle_limit: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            particle_limit: DEFAULT_PARTICLE_LIMIT,
        }
    }
}

/// A gravity source, tagged by `kind`
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Inverse-square attraction toward `position`
    Point {
        position: DVec2,
        mass: f64,
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
    /// Uniform field
    Constant {
        #[serde(default = "default_angle_degrees")]
        angle_degrees: f64,
        #[serde(default = "default_strength")]
        strength: f64,
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    pub position: DVec2,
    #[serde(default)]
    pub velocity: DVec2,
    #[serde(default = "default_rate")]
    pub rate: usize,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub position: DVec2,
    #[serde(default)]
    pub velocity: DVec2,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BoundsConfig {
    pub min: DVec2,
    pub max: DVec2,
}

/// Top-level scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default = "default_steps")]
    pub steps: u64,
    #[serde(default)]
    pub bounds: Option<BoundsConfig>,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub emitters: Vec<EmitterConfig>,
    #[serde(default)]
    pub particles: Vec<ParticleConfig>,
}

fn default_particle_limit() -> usize {
    DEFAULT_PARTICLE_LIMIT
}

fn default_steps() -> u64 {
    DEFAULT_STEPS
}

fn default_enabled() -> bool {
    true
}

fn default_angle_degrees() -> f64 {
    DEFAULT_CONSTANT_ANGLE_DEGREES
}

fn default_strength() -> f64 {
    DEFAULT_CONSTANT_STRENGTH
}

fn default_rate() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: ScenarioConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.world.particle_limit, DEFAULT_PARTICLE_LIMIT);
        assert_eq!(cfg.steps, DEFAULT_STEPS);
        assert!(cfg.bounds.is_none());
        assert!(cfg.sources.is_empty());
    }

    #[test]
    fn constant_source_defaults() {
        let cfg: ScenarioConfig = serde_yaml::from_str("sources:\n  - kind: constant\n").unwrap();
        assert_eq!(
            cfg.sources[0],
            SourceConfig::Constant {
                angle_degrees: 270.0,
                strength: 10.0,
                enabled: true,
            }
        );
    }
}
