use molecule_sim::config::SimConfig;
use molecule_sim::molecule::{BondGraph, RigidMolecule};
use molecule_sim::simulation::World;
use molecule_sim::units::{COULOMB_PREFACTOR, ELEMENTARY_CHARGE_SCALE, VACUUM_PERMITTIVITY};
use ultraviolet::Vec2;

fn main() {
    println!("=== Coulomb check ===");
    println!("e scale          = {:.6e}", ELEMENTARY_CHARGE_SCALE);
    println!("eps0             = {:.6e}", VACUUM_PERMITTIVITY);
    println!("e^2 / (2 pi eps0) = {:.6e}", COULOMB_PREFACTOR);

    // Two point charges, +10 and -10, two units apart
    let config = SimConfig::default();
    let expected = config.coulomb_scale * COULOMB_PREFACTOR * 100.0 / 4.0;
    println!("\nExpected |F| at r = 2 for q = +/-10: {:.6e}", expected);
    println!("Expected |dv| after one sub-step (m = 10): {:.6e}", expected / 10.0 * config.dt);

    let mut world = World::new(config, 0).expect("default config is valid");
    for (charge, x) in [(10.0, -1.0), (-10.0, 1.0)] {
        let molecule = RigidMolecule::assemble([(10, charge, Vec2::new(x, 0.0))], BondGraph::new(1))
            .expect("single particle molecule");
        world.insert(molecule);
    }
    world.step(10);

    for (i, m) in world.molecules().iter().enumerate() {
        println!(
            "molecule {}: force = ({:.6e}, {:.6e}), vel = ({:.6e}, {:.6e}), com = ({:.6}, {:.6})",
            i, m.force.x, m.force.y, m.vel.x, m.vel.y, m.center_of_mass.x, m.center_of_mass.y
        );
    }
}
