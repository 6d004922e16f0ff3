// simulation/snapshot.rs
// Owned, read-only copy of the world for the renderer and for dumps

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

use crate::molecule::RigidMolecule;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    /// World coordinates
    pub position: Vec2,
    pub charge: f32,
    pub mass: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoleculeSnapshot {
    pub center_of_mass: Vec2,
    pub velocity: Vec2,
    pub orientation: f32,
    pub particles: Vec<ParticleSnapshot>,
    /// One world-space polyline per bond, endpoints included
    pub bonds: Vec<Vec<Vec2>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Sub-steps executed before the snapshot was taken
    pub frame: u64,
    pub molecules: Vec<MoleculeSnapshot>,
}

impl MoleculeSnapshot {
    pub fn from_molecule(molecule: &RigidMolecule) -> Self {
        Self {
            center_of_mass: molecule.center_of_mass,
            velocity: molecule.vel,
            orientation: molecule.orientation,
            particles: molecule
                .world_positions()
                .zip(molecule.particles())
                .map(|(position, p)| ParticleSnapshot {
                    position,
                    charge: p.charge,
                    mass: p.mass,
                })
                .collect(),
            bonds: molecule.world_bond_segments(),
        }
    }
}

impl WorldSnapshot {
    pub fn particle_count(&self) -> usize {
        self.molecules.iter().map(|m| m.particles.len()).sum()
    }
}
