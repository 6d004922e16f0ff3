use std::path::PathBuf;
use thiserror::Error;

/// Reasons a hand-assembled molecule is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum MoleculeError {
    #[error("a molecule needs at least one particle")]
    Empty,
    #[error("molecule has {count} particles, the limit is {max}")]
    TooManyParticles { count: usize, max: usize },
    #[error("particle {index} has zero mass")]
    ZeroMass { index: usize },
    #[error("bond graph covers {bonds} particles but the molecule has {particles}")]
    BondGraphMismatch { bonds: usize, particles: usize },
    #[error("bond graph is not a spanning tree")]
    NotSpanningTree,
    #[error("bond ({a}, {b}) is out of range or a self-loop")]
    InvalidBond { a: usize, b: usize },
    #[error("particle count range {min}..={max} is outside 2..={limit}")]
    InvalidParticleRange { min: usize, max: usize, limit: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Failures of the headless driver.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to install logger: {0}")]
    Logging(String),
    #[error("failed to serialise snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
