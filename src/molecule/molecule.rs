// molecule/molecule.rs
// Rigid aggregate of charged particles: kinematic state, local-frame rotation and bond geometry

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use ultraviolet::Vec2;

use super::{BondGraph, ChargeParticle};
use crate::config::{BOND_SUBDIVISIONS, MAX_PARTICLES};
use crate::error::MoleculeError;

pub type Particles = SmallVec<[ChargeParticle; MAX_PARTICLES]>;

/// A rigid body made of point charges.
///
/// Particle positions are stored relative to the center of mass computed when
/// the molecule was built. They are only ever rotated about that origin, never
/// re-centered, so `center_of_mass` stays the translation reference for the
/// molecule's whole life even though rotation moves the true centroid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RigidMolecule {
    particles: Particles,
    bonds: BondGraph,
    total_mass: u32,
    /// Local-frame bond polylines, one per bond in `BondGraph::edges` order
    bond_segments: Vec<Vec<Vec2>>,
    /// World-frame translation of the local origin
    pub center_of_mass: Vec2,
    /// Net velocity, in distance per sub-step
    pub vel: Vec2,
    /// Net force from the last force pass
    pub force: Vec2,
    /// Torque accumulated by the last force pass
    pub torque: f32,
    /// Moment-of-inertia proxy, `sum(m * |r|^2)`, from the last force pass
    pub theta: f32,
    /// Only advanced under `RotationModel::Accumulated`
    pub angular_velocity: f32,
    /// Sum of every rotation applied so far. Diagnostic only.
    pub orientation: f32,
}

impl RigidMolecule {
    /// Build from particles already expressed in the local frame.
    pub(crate) fn from_local(particles: Particles, bonds: BondGraph, center_of_mass: Vec2) -> Self {
        let total_mass = particles.iter().map(|p| p.mass).sum();
        let mut molecule = Self {
            particles,
            bonds,
            total_mass,
            bond_segments: Vec::new(),
            center_of_mass,
            vel: Vec2::zero(),
            force: Vec2::zero(),
            torque: 0.0,
            theta: 0.0,
            angular_velocity: 0.0,
            orientation: 0.0,
        };
        molecule.theta = molecule.inertia();
        molecule.refresh_bond_segments(BOND_SUBDIVISIONS);
        molecule
    }

    /// Build a molecule from `(mass, charge, world position)` triples.
    ///
    /// The center of mass is the mass-weighted centroid of the positions.
    /// Unlike generated molecules, an assembled one may carry net charge.
    pub fn assemble<I>(particles: I, bonds: BondGraph) -> Result<Self, MoleculeError>
    where
        I: IntoIterator<Item = (u32, f32, Vec2)>,
    {
        let raw: Vec<(u32, f32, Vec2)> = particles.into_iter().collect();
        if raw.is_empty() {
            return Err(MoleculeError::Empty);
        }
        if raw.len() > MAX_PARTICLES {
            return Err(MoleculeError::TooManyParticles { count: raw.len(), max: MAX_PARTICLES });
        }
        if let Some(index) = raw.iter().position(|&(mass, _, _)| mass == 0) {
            return Err(MoleculeError::ZeroMass { index });
        }
        if bonds.len() != raw.len() {
            return Err(MoleculeError::BondGraphMismatch { bonds: bonds.len(), particles: raw.len() });
        }
        if !bonds.is_spanning_tree() {
            return Err(MoleculeError::NotSpanningTree);
        }

        let center = centroid(raw.iter().map(|&(mass, _, pos)| (mass, pos)));
        let particles = raw
            .into_iter()
            .map(|(mass, charge, pos)| ChargeParticle::new(mass, charge, pos - center))
            .collect();
        Ok(Self::from_local(particles, bonds, center))
    }

    pub fn particles(&self) -> &[ChargeParticle] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [ChargeParticle] {
        &mut self.particles
    }

    pub fn bonds(&self) -> &BondGraph {
        &self.bonds
    }

    pub fn total_mass(&self) -> u32 {
        self.total_mass
    }

    pub fn net_charge(&self) -> f32 {
        self.particles.iter().map(|p| p.charge).sum()
    }

    pub fn world_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.particles.iter().map(move |p| p.world_pos(self.center_of_mass))
    }

    /// `sum(m * |r|^2)` over the current local positions.
    pub fn inertia(&self) -> f32 {
        self.particles.iter().map(ChargeParticle::inertia).sum()
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.total_mass as f32 * self.vel.mag_sq()
    }

    /// Turn every particle about the local origin.
    pub fn rotate(&mut self, angle: f32) {
        for p in &mut self.particles {
            p.rotate(angle);
        }
        self.orientation += angle;
    }

    /// Rebuild the local-frame bond polylines from the current particle positions.
    ///
    /// Each polyline runs from the lower-indexed particle to the higher one and
    /// holds `subdivisions + 1` points, both endpoints included.
    pub fn refresh_bond_segments(&mut self, subdivisions: usize) {
        let subdivisions = subdivisions.max(1);
        self.bond_segments.clear();
        for (i, j) in self.bonds.edges() {
            let start = self.particles[i].local_pos;
            let delta = self.particles[j].local_pos - start;
            let line = (0..=subdivisions)
                .map(|k| start + delta * (k as f32 / subdivisions as f32))
                .collect();
            self.bond_segments.push(line);
        }
    }

    pub fn bond_segments(&self) -> &[Vec<Vec2>] {
        &self.bond_segments
    }

    /// Bond polylines translated into world coordinates.
    pub fn world_bond_segments(&self) -> Vec<Vec<Vec2>> {
        self.bond_segments
            .iter()
            .map(|line| line.iter().map(|&p| p + self.center_of_mass).collect())
            .collect()
    }
}

/// Mass-weighted centroid. Zero when the total mass is zero.
pub(crate) fn centroid<I>(points: I) -> Vec2
where
    I: IntoIterator<Item = (u32, Vec2)>,
{
    let (weighted, total) = points
        .into_iter()
        .fold((Vec2::zero(), 0u32), |(sum, mass), (m, pos)| (sum + pos * m as f32, mass + m));
    if total == 0 {
        Vec2::zero()
    } else {
        weighted / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dumbbell() -> RigidMolecule {
        RigidMolecule::assemble(
            [(1, 5.0, Vec2::new(0.0, 0.0)), (3, -5.0, Vec2::new(4.0, 0.0))],
            BondGraph::chain(2),
        )
        .unwrap()
    }

    #[test]
    fn assemble_recenters_on_mass_weighted_centroid() {
        let m = dumbbell();
        assert_eq!(m.center_of_mass, Vec2::new(3.0, 0.0));
        assert_eq!(m.particles()[0].local_pos, Vec2::new(-3.0, 0.0));
        assert_eq!(m.particles()[1].local_pos, Vec2::new(1.0, 0.0));
        assert_eq!(m.total_mass(), 4);
        assert_eq!(m.net_charge(), 0.0);
    }

    #[test]
    fn assemble_rejects_bad_structure() {
        let p = (1, 0.0, Vec2::zero());
        assert_eq!(
            RigidMolecule::assemble(Vec::new(), BondGraph::new(0)).unwrap_err(),
            MoleculeError::Empty
        );
        assert_eq!(
            RigidMolecule::assemble([p, p], BondGraph::new(3)).unwrap_err(),
            MoleculeError::BondGraphMismatch { bonds: 3, particles: 2 }
        );
        assert_eq!(
            RigidMolecule::assemble([p, p], BondGraph::new(2)).unwrap_err(),
            MoleculeError::NotSpanningTree
        );
        assert_eq!(
            RigidMolecule::assemble([p, (0, 1.0, Vec2::zero())], BondGraph::chain(2)).unwrap_err(),
            MoleculeError::ZeroMass { index: 1 }
        );
        assert_eq!(
            RigidMolecule::assemble(vec![p; 9], BondGraph::chain(9)).unwrap_err(),
            MoleculeError::TooManyParticles { count: 9, max: MAX_PARTICLES }
        );
    }

    #[test]
    fn bond_segment_has_interior_points() {
        let m = dumbbell();
        let segments = m.bond_segments();
        assert_eq!(segments.len(), 1);
        let line = &segments[0];
        assert_eq!(line.len(), BOND_SUBDIVISIONS + 1);
        assert_eq!(line[0], Vec2::new(-3.0, 0.0));
        assert!((line[BOND_SUBDIVISIONS] - Vec2::new(1.0, 0.0)).mag() < 1e-6);
        assert!((line[1].x - (-3.0 + 4.0 / BOND_SUBDIVISIONS as f32)).abs() < 1e-6);
    }

    #[test]
    fn world_bond_segments_follow_center() {
        let mut m = dumbbell();
        m.center_of_mass = Vec2::new(10.0, 10.0);
        let world = m.world_bond_segments();
        assert_eq!(world[0][0], Vec2::new(7.0, 10.0));
    }

    #[test]
    fn rotate_tracks_orientation_and_keeps_inertia() {
        let mut m = dumbbell();
        let before = m.inertia();
        m.rotate(0.5);
        m.rotate(0.25);
        assert!((m.orientation - 0.75).abs() < 1e-6);
        assert!((m.inertia() - before).abs() < 1e-3);
    }

    #[test]
    fn centroid_of_nothing_is_origin() {
        assert_eq!(centroid(std::iter::empty()), Vec2::zero());
    }
}
