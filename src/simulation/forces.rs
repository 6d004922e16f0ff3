//! Force calculation for the molecule simulation.
//!
//! Provides the Coulomb pair law, the medium drag term and the torque
//! contribution of a particle, plus `compute_all`, which fills in the force,
//! torque and inertia proxy of every molecule for one sub-step.

use smallvec::SmallVec;
use ultraviolet::Vec2;

use crate::config::{DragModel, SimConfig, TorqueModel, MAX_PARTICLES};
use crate::molecule::RigidMolecule;
use crate::profile_scope;
use crate::units::COULOMB_PREFACTOR;

/// Force exerted on charge `q_a` at `pos_a` by charge `q_b` at `pos_b`.
///
/// Magnitude is `scale * e^2 * q_a * q_b / (2*pi*eps0 * r^2)`, pointing away from
/// `pos_b` for like charges and towards it for opposite ones. `r` is clamped to
/// `min_separation` in the denominator. Coincident charges have no direction
/// and contribute nothing.
pub fn coulomb_force(q_a: f32, pos_a: Vec2, q_b: f32, pos_b: Vec2, scale: f32, min_separation: f32) -> Vec2 {
    let sep = pos_a - pos_b;
    let r = sep.mag();
    if r == 0.0 {
        return Vec2::zero();
    }
    let r_eff = r.max(min_separation);
    let magnitude = scale * COULOMB_PREFACTOR * q_a * q_b / (r_eff * r_eff);
    sep / r * magnitude
}

/// Drag on a particle moving at `vel` through the medium.
///
/// `DragModel::Unsigned` squares each component without restoring its sign, so
/// a particle moving towards -x is pushed further towards -x.
pub fn drag_force(vel: Vec2, model: DragModel, density: f32, shape_factor: f32) -> Vec2 {
    let k = -0.5 * density * shape_factor;
    match model {
        DragModel::Unsigned => Vec2::new(vel.x * vel.x, vel.y * vel.y) * k,
        DragModel::Signed => Vec2::new(vel.x * vel.x.abs(), vel.y * vel.y.abs()) * k,
    }
}

/// Torque about the molecule's origin from `force` applied at `local_pos`.
pub fn torque(local_pos: Vec2, force: Vec2, model: TorqueModel) -> f32 {
    let cross = local_pos.x * force.y - local_pos.y * force.x;
    match model {
        TorqueModel::Magnitude => cross.abs(),
        TorqueModel::Signed => cross,
    }
}

type Charges = SmallVec<[(Vec2, f32); MAX_PARTICLES]>;

fn charge_layout(molecule: &RigidMolecule) -> Charges {
    molecule
        .particles()
        .iter()
        .map(|p| (p.world_pos(molecule.center_of_mass), p.charge))
        .collect()
}

/// Sum of the Coulomb forces `source` exerts on the particles of `target`.
pub fn pair_force(target: &RigidMolecule, source: &RigidMolecule, config: &SimConfig) -> Vec2 {
    let sources = charge_layout(source);
    target
        .world_positions()
        .zip(target.particles())
        .fold(Vec2::zero(), |acc, (pos, p)| {
            acc + coulomb_on(p.charge, pos, &sources, config)
        })
}

fn coulomb_on(charge: f32, pos: Vec2, sources: &[(Vec2, f32)], config: &SimConfig) -> Vec2 {
    sources.iter().fold(Vec2::zero(), |acc, &(other_pos, other_charge)| {
        acc + coulomb_force(charge, pos, other_charge, other_pos, config.coulomb_scale, config.min_separation)
    })
}

/// Compute force, torque and inertia proxy for every molecule.
///
/// - Every particle interacts with every particle of every *other* molecule.
///   Particles of the same molecule do not interact.
/// - Each particle also feels drag from its molecule's net velocity.
/// - Positions are read before any molecule is written, so the result does
///   not depend on molecule order.
pub fn compute_all(molecules: &mut [RigidMolecule], config: &SimConfig) {
    profile_scope!("forces_compute_all");
    let layouts: Vec<Charges> = molecules.iter().map(charge_layout).collect();

    for (i, molecule) in molecules.iter_mut().enumerate() {
        let com = molecule.center_of_mass;
        let vel = molecule.vel;
        let drag = drag_force(vel, config.drag_model, config.medium_density, config.shape_factor);
        let mut net_force = Vec2::zero();
        let mut net_torque = 0.0;
        let mut theta = 0.0;

        for p in molecule.particles_mut() {
            let pos = p.world_pos(com);
            let charge = p.charge;
            p.vel = vel;
            p.force = layouts
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i)
                .fold(Vec2::zero(), |acc, (_, other)| acc + coulomb_on(charge, pos, other, config));
            p.force += drag;

            net_force += p.force;
            net_torque += torque(p.local_pos, p.force, config.torque_model);
            theta += p.inertia();
        }

        molecule.force = net_force;
        molecule.torque = net_torque;
        molecule.theta = theta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_SEP: f32 = 1e-3;

    #[test]
    fn opposite_charges_attract() {
        let f = coulomb_force(1.0, Vec2::new(-1.0, 0.0), -1.0, Vec2::new(1.0, 0.0), 1.0, MIN_SEP);
        assert!(f.x > 0.0, "force should point towards the other charge: {:?}", f);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn like_charges_repel() {
        let f = coulomb_force(2.0, Vec2::new(0.0, 1.0), 3.0, Vec2::zero(), 1.0, MIN_SEP);
        assert!(f.y > 0.0);
    }

    #[test]
    fn force_follows_inverse_square() {
        let near = coulomb_force(1.0, Vec2::new(1.0, 0.0), 1.0, Vec2::zero(), 1.0, MIN_SEP).mag();
        let far = coulomb_force(1.0, Vec2::new(2.0, 0.0), 1.0, Vec2::zero(), 1.0, MIN_SEP).mag();
        assert!((near / far - 4.0).abs() < 1e-4, "ratio {}", near / far);
        assert!((near - COULOMB_PREFACTOR).abs() / COULOMB_PREFACTOR < 1e-6);
    }

    #[test]
    fn coincident_charges_give_zero_force() {
        let f = coulomb_force(30.0, Vec2::new(0.5, 0.5), -30.0, Vec2::new(0.5, 0.5), 1.0, MIN_SEP);
        assert_eq!(f, Vec2::zero());
    }

    #[test]
    fn tiny_separation_is_clamped() {
        let clamped = coulomb_force(1.0, Vec2::new(1e-6, 0.0), 1.0, Vec2::zero(), 1.0, MIN_SEP);
        let at_min = coulomb_force(1.0, Vec2::new(MIN_SEP, 0.0), 1.0, Vec2::zero(), 1.0, MIN_SEP);
        assert!(clamped.x.is_finite());
        assert!((clamped.x - at_min.x).abs() / at_min.x < 1e-5);
    }

    #[test]
    fn unsigned_drag_ignores_direction() {
        let rho = 1.0;
        let c = 0.45;
        let forward = drag_force(Vec2::new(2.0, 1.0), DragModel::Unsigned, rho, c);
        let backward = drag_force(Vec2::new(-2.0, -1.0), DragModel::Unsigned, rho, c);
        assert_eq!(forward, backward);
        assert!((forward.x - (-0.5 * 4.0 * 0.45)).abs() < 1e-6);
        // Moving towards -x, the literal formula pushes further towards -x.
        assert!(backward.x < 0.0);
    }

    #[test]
    fn signed_drag_opposes_motion() {
        let f = drag_force(Vec2::new(-2.0, 3.0), DragModel::Signed, 1.0, 0.45);
        assert!(f.x > 0.0 && f.y < 0.0);
        assert!((f.x - 0.5 * 4.0 * 0.45).abs() < 1e-6);
    }

    #[test]
    fn no_drag_at_rest() {
        assert_eq!(drag_force(Vec2::zero(), DragModel::Unsigned, 1.0, 0.45), Vec2::zero());
    }

    #[test]
    fn torque_magnitude_is_never_negative() {
        let r = Vec2::new(1.0, 0.0);
        let clockwise = Vec2::new(0.0, -2.0);
        assert_eq!(torque(r, clockwise, TorqueModel::Signed), -2.0);
        assert_eq!(torque(r, clockwise, TorqueModel::Magnitude), 2.0);
        assert_eq!(torque(r, Vec2::new(5.0, 0.0), TorqueModel::Magnitude), 0.0);
    }
}
