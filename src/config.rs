// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ====================
// Molecule Generation
// ====================
pub const MIN_PARTICLES: usize = 2; // Fewest particles a generated molecule can have
/// Upper bound on particles per molecule. Also sizes the inline particle storage.
pub const MAX_PARTICLES: usize = 8;
pub const MAX_MASS: u32 = 50; // Particle mass is drawn from 1..=MAX_MASS
pub const MAX_CHARGE: i32 = 30; // Charge magnitude is drawn from 1..=MAX_CHARGE
/// Initial local coordinates are drawn from [-POSITION_EXTENT, POSITION_EXTENT]
pub const POSITION_EXTENT: f32 = 1.0;
/// Resolution of the coordinate draw (positions are multiples of 1/POSITION_STEPS)
pub const POSITION_STEPS: u32 = 100;

// ====================
// Force Parameters
// ====================
pub const MEDIUM_DENSITY: f32 = 1.0; // Density of the surrounding medium
pub const SHAPE_FACTOR: f32 = 0.45; // Drag coefficient of a particle
/// Separation below which the Coulomb denominator is clamped
pub const DEFAULT_MIN_SEPARATION: f32 = 1.0e-3;
pub const COULOMB_SCALE: f32 = 1.0;

// ====================
// Time Stepping
// ====================
pub const DEFAULT_DT: f32 = 0.01; // Time increment per sub-step
pub const SUB_STEP_MILLIS: u64 = 10; // Wall-clock milliseconds per sub-step
/// Sub-steps allowed per clock tick before the remainder is dropped
pub const DEFAULT_MAX_SUB_STEPS: u64 = 500;

// ====================
// World
// ====================
pub const SPAWN_BATCH: usize = 2; // Molecules added per spawn trigger
pub const BOND_SUBDIVISIONS: usize = 25; // Segments per bond polyline

/// How the drag term treats the sign of the velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DragModel {
    /// `-0.5 * v^2 * rho * c` per axis. The square drops the sign of `v`, so the
    /// term always points towards negative x and y.
    #[default]
    Unsigned,
    /// `-0.5 * v * |v| * rho * c` per axis, always opposing motion.
    Signed,
}

/// How a particle's force contributes to its molecule's torque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TorqueModel {
    /// `|r x F|`. Never negative, so molecules only ever turn counter-clockwise.
    #[default]
    Magnitude,
    /// The z component of `r x F`.
    Signed,
}

/// How the angular increment of a sub-step is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RotationModel {
    /// Rotate by `torque / theta * dt` and forget it. No angular velocity is kept.
    #[default]
    Instantaneous,
    /// Add `torque / theta * dt` to a persistent angular velocity and rotate by that.
    Accumulated,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Time increment per sub-step
    pub dt: f32,
    /// Wall-clock milliseconds consumed by one sub-step
    pub sub_step_millis: u64,
    /// Dimensionless multiplier on the Coulomb law
    pub coulomb_scale: f32,
    pub medium_density: f32,
    pub shape_factor: f32,
    /// Separations shorter than this are clamped in the force denominator
    pub min_separation: f32,
    /// Molecules added per spawn trigger
    pub spawn_batch: usize,
    /// Cap on sub-steps per tick. `None` runs however many the clock asks for.
    pub max_sub_steps_per_tick: Option<u64>,
    /// Cap on live molecules. `None` lets the world grow without bound.
    pub max_molecules: Option<usize>,
    /// Segments per bond polyline
    pub bond_subdivisions: usize,
    pub drag_model: DragModel,
    pub torque_model: TorqueModel,
    pub rotation_model: RotationModel,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            sub_step_millis: SUB_STEP_MILLIS,
            coulomb_scale: COULOMB_SCALE,
            medium_density: MEDIUM_DENSITY,
            shape_factor: SHAPE_FACTOR,
            min_separation: DEFAULT_MIN_SEPARATION,
            spawn_batch: SPAWN_BATCH,
            max_sub_steps_per_tick: Some(DEFAULT_MAX_SUB_STEPS),
            max_molecules: None,
            bond_subdivisions: BOND_SUBDIVISIONS,
            drag_model: DragModel::default(),
            torque_model: TorqueModel::default(),
            rotation_model: RotationModel::default(),
        }
    }
}

impl SimConfig {
    /// Reject values that would stall the clock or produce non-finite forces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::Invalid(format!("dt must be positive, got {}", self.dt)));
        }
        if self.sub_step_millis == 0 {
            return Err(ConfigError::Invalid("sub_step_millis must be non-zero".into()));
        }
        if !(self.min_separation.is_finite() && self.min_separation > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_separation must be positive, got {}",
                self.min_separation
            )));
        }
        if !self.coulomb_scale.is_finite() {
            return Err(ConfigError::Invalid("coulomb_scale must be finite".into()));
        }
        if !(self.medium_density.is_finite() && self.shape_factor.is_finite()) {
            return Err(ConfigError::Invalid("drag parameters must be finite".into()));
        }
        if self.max_sub_steps_per_tick == Some(0) {
            return Err(ConfigError::Invalid(
                "max_sub_steps_per_tick must be non-zero when set".into(),
            ));
        }
        if self.bond_subdivisions == 0 {
            return Err(ConfigError::Invalid("bond_subdivisions must be non-zero".into()));
        }
        if self.spawn_batch == 0 {
            return Err(ConfigError::Invalid("spawn_batch must be non-zero".into()));
        }
        Ok(())
    }
}
