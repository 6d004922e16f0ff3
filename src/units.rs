//! Physical constants used by the Coulomb force law.
//!
//! The simulation does not work in SI units. Charges are small integers
//! scaled by `ELEMENTARY_CHARGE_SCALE`, distances are world units and time is
//! measured in sub-steps.

use std::f64::consts::PI;

/// Elementary charge scale applied to every particle charge.
pub const ELEMENTARY_CHARGE_SCALE: f64 = 1.24e-8;
/// Vacuum permittivity ε0.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_817e-12;

/// e² / (2π·ε0), the constant part of the pair force.
pub const COULOMB_PREFACTOR: f32 = (
    ELEMENTARY_CHARGE_SCALE * ELEMENTARY_CHARGE_SCALE / (2.0 * PI * VACUUM_PERMITTIVITY)
) as f32;
