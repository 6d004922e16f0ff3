// Invariants every generated molecule must satisfy
use crate::config::{MAX_CHARGE, MAX_MASS, MAX_PARTICLES, MIN_PARTICLES, POSITION_EXTENT};
use crate::molecule::MoleculeFactory;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ultraviolet::Vec2;

const SEEDS: u64 = 500;

#[test]
fn generated_molecules_are_exactly_neutral() {
    let factory = MoleculeFactory::default();
    for seed in 0..SEEDS {
        let m = factory.create(&mut StdRng::seed_from_u64(seed));
        assert_eq!(m.net_charge(), 0.0, "seed {} produced net charge {}", seed, m.net_charge());
    }
}

#[test]
fn generated_bonds_form_spanning_tree() {
    let factory = MoleculeFactory::default();
    for seed in 0..SEEDS {
        let m = factory.create(&mut StdRng::seed_from_u64(seed));
        let n = m.particles().len();
        assert_eq!(m.bonds().edge_count(), n - 1, "seed {}", seed);
        assert!(m.bonds().is_connected(), "seed {} left particles unreachable from 0", seed);
        for (a, b) in m.bonds().edges() {
            assert!(m.bonds().contains(b, a), "bond ({}, {}) is not symmetric", a, b);
        }
    }
}

#[test]
fn draws_stay_within_ranges() {
    let factory = MoleculeFactory::default();
    for seed in 0..SEEDS {
        let m = factory.create(&mut StdRng::seed_from_u64(seed));
        let n = m.particles().len();
        assert!((MIN_PARTICLES..=MAX_PARTICLES).contains(&n), "seed {} drew {} particles", seed, n);
        let last = n - 1;
        for (i, p) in m.particles().iter().enumerate() {
            assert!((1..=MAX_MASS).contains(&p.mass));
            assert_eq!(p.charge.fract(), 0.0, "charges are whole multiples");
            if i != last {
                assert!(p.charge != 0.0 && p.charge.abs() <= MAX_CHARGE as f32);
            }
            // local + center reproduces the drawn coordinate
            let world = p.world_pos(m.center_of_mass);
            assert!(world.x.abs() <= POSITION_EXTENT + 1e-6 && world.y.abs() <= POSITION_EXTENT + 1e-6);
        }
        assert_eq!(m.total_mass(), m.particles().iter().map(|p| p.mass).sum::<u32>());
    }
}

#[test]
fn local_frame_is_centred_on_mass() {
    let factory = MoleculeFactory::default();
    for seed in 0..100 {
        let m = factory.create(&mut StdRng::seed_from_u64(seed));
        let moment = m
            .particles()
            .iter()
            .fold(Vec2::zero(), |acc, p| acc + p.local_pos * p.mass as f32);
        assert!(moment.mag() < 1e-3, "seed {} mass moment {:?}", seed, moment);
        assert_eq!(m.vel, Vec2::zero());
        assert_eq!(m.orientation, 0.0);
    }
}

#[test]
fn narrow_range_factory_respects_bounds() {
    let factory = MoleculeFactory::with_particle_range(4, 5).unwrap();
    for seed in 0..100 {
        let n = factory.create(&mut StdRng::seed_from_u64(seed)).particles().len();
        assert!(n == 4 || n == 5);
    }
}
