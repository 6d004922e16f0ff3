//! Explicit time stepping of molecule translation and rotation.

use crate::config::{RotationModel, SimConfig};
use crate::molecule::RigidMolecule;
use crate::profile_scope;

/// Advance every molecule by one sub-step using the forces from the last
/// `forces::compute_all`.
pub fn advance_all(molecules: &mut [RigidMolecule], config: &SimConfig) {
    profile_scope!("integrate_advance_all");
    for molecule in molecules {
        advance(molecule, config);
    }
}

/// One sub-step for a single molecule.
///
/// - `vel += force / total_mass * dt`, then `center_of_mass += vel`. Velocity
///   is already a per-sub-step displacement, so no second `dt`.
/// - The angular increment `torque / theta * dt` is applied right away. Under
///   `RotationModel::Instantaneous` it is then dropped; nothing carries the
///   rotation rate into the next sub-step.
/// - Bond polylines are rebuilt from the rotated particles.
pub fn advance(molecule: &mut RigidMolecule, config: &SimConfig) {
    let dt = config.dt;
    let mass = molecule.total_mass() as f32;
    if mass > 0.0 {
        molecule.vel += molecule.force / mass * dt;
    }
    molecule.center_of_mass += molecule.vel;

    let angular_step = angular_step(molecule.torque, molecule.theta, dt);
    let angle = match config.rotation_model {
        RotationModel::Instantaneous => angular_step,
        RotationModel::Accumulated => {
            molecule.angular_velocity += angular_step;
            molecule.angular_velocity
        }
    };
    if angle != 0.0 {
        molecule.rotate(angle);
    }

    molecule.refresh_bond_segments(config.bond_subdivisions);
}

/// `torque / theta * dt`, or zero when every particle sits on the origin.
pub fn angular_step(torque: f32, theta: f32, dt: f32) -> f32 {
    if theta > f32::EPSILON {
        torque / theta * dt
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::BondGraph;
    use ultraviolet::Vec2;

    fn rod() -> RigidMolecule {
        RigidMolecule::assemble(
            [(2, 1.0, Vec2::new(-1.0, 0.0)), (2, -1.0, Vec2::new(1.0, 0.0))],
            BondGraph::chain(2),
        )
        .unwrap()
    }

    #[test]
    fn velocity_then_position() {
        let config = SimConfig::default();
        let mut m = rod();
        m.force = Vec2::new(4.0, 0.0);
        advance(&mut m, &config);
        let expected_vel = 4.0 / 4.0 * config.dt;
        assert!((m.vel.x - expected_vel).abs() < 1e-7);
        // Position moves by the updated velocity, not by velocity * dt.
        assert!((m.center_of_mass.x - expected_vel).abs() < 1e-7);
    }

    #[test]
    fn zero_inertia_does_not_rotate() {
        assert_eq!(angular_step(5.0, 0.0, 0.01), 0.0);
        let mut m = RigidMolecule::assemble([(1, 1.0, Vec2::new(3.0, 3.0))], BondGraph::new(1)).unwrap();
        m.torque = 1.0;
        m.theta = 0.0;
        advance(&mut m, &SimConfig::default());
        assert_eq!(m.orientation, 0.0);
        assert_eq!(m.particles()[0].local_pos, Vec2::zero());
    }

    #[test]
    fn instantaneous_rotation_is_not_carried_over() {
        let config = SimConfig::default();
        let mut m = rod();
        m.theta = m.inertia();
        m.torque = 4.0;
        advance(&mut m, &config);
        let first = m.orientation;
        assert!((first - 4.0 / 4.0 * config.dt).abs() < 1e-7);

        // Torque gone: the molecule stops turning at once.
        m.torque = 0.0;
        advance(&mut m, &config);
        assert_eq!(m.orientation, first);
        assert_eq!(m.angular_velocity, 0.0);
    }

    #[test]
    fn accumulated_rotation_keeps_spinning() {
        let config = SimConfig {
            rotation_model: RotationModel::Accumulated,
            ..SimConfig::default()
        };
        let mut m = rod();
        m.theta = m.inertia();
        m.torque = 4.0;
        advance(&mut m, &config);
        m.torque = 0.0;
        advance(&mut m, &config);
        let step = 4.0 / 4.0 * config.dt;
        assert!((m.angular_velocity - step).abs() < 1e-7);
        assert!((m.orientation - 2.0 * step).abs() < 1e-6);
    }

    #[test]
    fn bond_segments_follow_rotation() {
        let config = SimConfig::default();
        let mut m = rod();
        m.theta = m.inertia();
        m.torque = m.theta * std::f32::consts::FRAC_PI_2 / config.dt;
        advance(&mut m, &config);
        let line = &m.bond_segments()[0];
        // The rod now points along y.
        assert!(line[0].x.abs() < 1e-5 && (line[0].y + 1.0).abs() < 1e-5, "{:?}", line[0]);
    }
}
