//! Random molecule generation.
//!
//! Every draw comes from the caller's generator, in a fixed order, so a seeded
//! generator reproduces the same molecule.

use rand::Rng;
use tracing::debug;
use ultraviolet::Vec2;

use super::molecule::{centroid, Particles};
use super::{BondGraph, ChargeParticle, RigidMolecule};
use crate::config::{MAX_CHARGE, MAX_MASS, MAX_PARTICLES, MIN_PARTICLES, POSITION_EXTENT, POSITION_STEPS};
use crate::error::MoleculeError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoleculeFactory {
    min_particles: usize,
    max_particles: usize,
    pub max_mass: u32,
    pub max_charge: i32,
}

impl Default for MoleculeFactory {
    fn default() -> Self {
        Self {
            min_particles: MIN_PARTICLES,
            max_particles: MAX_PARTICLES,
            max_mass: MAX_MASS,
            max_charge: MAX_CHARGE,
        }
    }
}

impl MoleculeFactory {
    /// Factory drawing particle counts from `min..=max`.
    ///
    /// Neutrality needs a free particle to balance the others, so `min` is at
    /// least two; `max` is bounded by the inline storage size.
    pub fn with_particle_range(min: usize, max: usize) -> Result<Self, MoleculeError> {
        if min < MIN_PARTICLES || min > max || max > MAX_PARTICLES {
            return Err(MoleculeError::InvalidParticleRange { min, max, limit: MAX_PARTICLES });
        }
        Ok(Self {
            min_particles: min,
            max_particles: max,
            ..Self::default()
        })
    }

    pub fn particle_range(&self) -> (usize, usize) {
        (self.min_particles, self.max_particles)
    }

    /// Generate a neutral molecule whose bonds form a spanning tree rooted at particle 0.
    ///
    /// Draw order per particle: mass, then (except for the last particle)
    /// charge magnitude and sign, then x magnitude, x sign, y magnitude, y sign,
    /// then (except for particle 0) the bond target.
    pub fn create<R: Rng + ?Sized>(&self, rng: &mut R) -> RigidMolecule {
        let count = rng.random_range(self.min_particles..=self.max_particles);
        let mut bonds = BondGraph::new(count);
        let mut drawn: Particles = Particles::new();
        let mut running_charge = 0.0f32;

        for i in 0..count {
            let mass = rng.random_range(1..=self.max_mass.max(1));
            let charge = if i + 1 < count {
                let magnitude = rng.random_range(1..=self.max_charge.max(1)) as f32;
                let charge = if rng.random_bool(0.5) { magnitude } else { -magnitude };
                running_charge += charge;
                charge
            } else {
                -running_charge
            };
            let x = signed_coordinate(rng);
            let y = signed_coordinate(rng);
            if i > 0 {
                let target = rng.random_range(0..i);
                bonds.link(target, i);
            }
            drawn.push(ChargeParticle::new(mass, charge, Vec2::new(x, y)));
        }

        let center = centroid(drawn.iter().map(|p| (p.mass, p.local_pos)));
        for p in &mut drawn {
            p.local_pos -= center;
        }

        let molecule = RigidMolecule::from_local(drawn, bonds, center);
        assert_eq!(molecule.net_charge(), 0.0, "generated molecule is not neutral");
        assert!(molecule.bonds().is_spanning_tree(), "generated bonds do not span the molecule");
        debug!(
            particles = count,
            mass = molecule.total_mass(),
            "generated molecule at ({:.3}, {:.3})",
            center.x,
            center.y
        );
        molecule
    }
}

fn signed_coordinate<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let magnitude = rng.random_range(0..=POSITION_STEPS) as f32 / POSITION_STEPS as f32 * POSITION_EXTENT;
    if rng.random_bool(0.5) { magnitude } else { -magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_range_is_validated() {
        assert!(MoleculeFactory::with_particle_range(2, 8).is_ok());
        assert!(MoleculeFactory::with_particle_range(3, 3).is_ok());
        assert_eq!(
            MoleculeFactory::with_particle_range(1, 4),
            Err(MoleculeError::InvalidParticleRange { min: 1, max: 4, limit: MAX_PARTICLES })
        );
        assert!(MoleculeFactory::with_particle_range(5, 4).is_err());
        assert!(MoleculeFactory::with_particle_range(2, 9).is_err());
    }

    #[test]
    fn default_range_matches_constants() {
        assert_eq!(MoleculeFactory::default().particle_range(), (MIN_PARTICLES, MAX_PARTICLES));
    }
}
