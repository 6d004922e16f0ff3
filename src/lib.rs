pub mod app;
pub mod config;
pub mod error;
pub mod init_config;
pub mod molecule;
pub mod profiler;
pub mod simulation;
pub mod units;

pub use config::SimConfig;
pub use error::{AppError, ConfigError, MoleculeError};
pub use molecule::{BondGraph, ChargeParticle, MoleculeFactory, RigidMolecule};
pub use simulation::{World, WorldSnapshot};

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
