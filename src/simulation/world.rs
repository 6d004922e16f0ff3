// simulation/world.rs
// The World owns every molecule and drives the sub-stepped force/integrate loop

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace, warn};

use super::snapshot::{MoleculeSnapshot, WorldSnapshot};
use super::{forces, integrator};
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::init_config::InitConfig;
use crate::molecule::{MoleculeFactory, RigidMolecule};
use crate::profile_scope;

/// What one clock tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Sub-steps actually executed
    pub sub_steps: u64,
    /// True when the tick asked for more than `max_sub_steps_per_tick`
    pub capped: bool,
}

/// The live simulation.
///
/// Molecules are only ever appended. Without `max_molecules` the collection
/// grows for as long as spawns keep arriving.
pub struct World {
    molecules: Vec<RigidMolecule>,
    config: SimConfig,
    factory: MoleculeFactory,
    rng: StdRng,
    frame: u64,
}

impl World {
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: SimConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            molecules: Vec::new(),
            config,
            factory: MoleculeFactory::default(),
            rng,
            frame: 0,
        })
    }

    /// Build a world from an init file and fire its initial spawns.
    /// Without a seed the generator is seeded from the OS.
    pub fn from_init_config(init: &InitConfig) -> Result<Self, ConfigError> {
        let config = init.simulation.clone().unwrap_or_default();
        let rng = match init.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut world = Self::with_rng(config, rng)?;
        for _ in 0..init.initial_spawns {
            world.spawn();
        }
        Ok(world)
    }

    pub fn set_factory(&mut self, factory: MoleculeFactory) {
        self.factory = factory;
    }

    /// Advance by `elapsed_millis` of wall-clock time.
    ///
    /// Runs `elapsed_millis / sub_step_millis` sub-steps (integer division, so
    /// the remainder is dropped), each a full force pass followed by a full
    /// integration pass.
    pub fn step(&mut self, elapsed_millis: u64) -> StepReport {
        profile_scope!("world_step");
        let requested = elapsed_millis / self.config.sub_step_millis;
        let sub_steps = match self.config.max_sub_steps_per_tick {
            Some(cap) if requested > cap => {
                warn!(requested, cap, "tick asked for too many sub-steps, capping");
                cap
            }
            _ => requested,
        };

        for _ in 0..sub_steps {
            self.sub_step();
        }
        trace!(sub_steps, frame = self.frame, molecules = self.molecules.len(), "tick");

        StepReport {
            sub_steps,
            capped: sub_steps < requested,
        }
    }

    /// One fixed `dt` increment: forces for every molecule, then integration for every molecule.
    pub fn sub_step(&mut self) {
        forces::compute_all(&mut self.molecules, &self.config);
        integrator::advance_all(&mut self.molecules, &self.config);
        self.frame += 1;
    }

    /// Append a batch of freshly generated molecules. Returns how many were added.
    pub fn spawn(&mut self) -> usize {
        let mut added = 0;
        for _ in 0..self.config.spawn_batch {
            if let Some(max) = self.config.max_molecules {
                if self.molecules.len() >= max {
                    warn!(max, "molecule limit reached, spawn truncated");
                    break;
                }
            }
            let mut molecule = self.factory.create(&mut self.rng);
            molecule.refresh_bond_segments(self.config.bond_subdivisions);
            self.molecules.push(molecule);
            added += 1;
        }
        debug!(added, total = self.molecules.len(), "spawned molecules");
        added
    }

    /// Add a hand-built molecule. Bypasses `max_molecules`. Returns its index.
    /// Bond polylines are rebuilt at the configured subdivision count.
    pub fn insert(&mut self, mut molecule: RigidMolecule) -> usize {
        molecule.refresh_bond_segments(self.config.bond_subdivisions);
        self.molecules.push(molecule);
        self.molecules.len() - 1
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            frame: self.frame,
            molecules: self.molecules.iter().map(MoleculeSnapshot::from_molecule).collect(),
        }
    }

    pub fn molecules(&self) -> &[RigidMolecule] {
        &self.molecules
    }

    pub fn molecule_count(&self) -> usize {
        self.molecules.len()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Sub-steps executed since construction.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn total_charge(&self) -> f32 {
        self.molecules.iter().map(RigidMolecule::net_charge).sum()
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.molecules.iter().map(RigidMolecule::kinetic_energy).sum()
    }
}
