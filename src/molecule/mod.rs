// molecule/mod.rs
// Re-exports for the molecule module

mod bonds;
mod factory;
#[allow(clippy::module_inception)]
mod molecule;
mod particle;

pub use bonds::BondGraph;
pub use factory::MoleculeFactory;
pub use molecule::{Particles, RigidMolecule};
pub use particle::ChargeParticle;

#[cfg(test)]
#[path = "tests/factory_invariants.rs"]
mod factory_invariants;

#[cfg(test)]
#[path = "tests/seeded_generation.rs"]
mod seeded_generation;
