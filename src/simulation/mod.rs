// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod forces;
pub mod integrator;
pub mod snapshot;
pub mod world;

pub use snapshot::{MoleculeSnapshot, ParticleSnapshot, WorldSnapshot};
pub use world::{StepReport, World};
