use thiserror::Error;

/// Errors raised by [`crate::particle::ParticlePool`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("particle limit of {limit} reached")]
    Exhausted { limit: usize },
    #[error("no active particle in slot {0}")]
    Inactive(usize),
}

/// Errors raised while loading or building a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to place initial particles: {0}")]
    Pool(#[from] PoolError),
    #[error("bounds minimum ({min_x}, {min_y}) must be below maximum ({max_x}, {max_y})")]
    InvalidBounds {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
}
