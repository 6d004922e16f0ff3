use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

/// A point charge held rigidly inside a molecule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChargeParticle {
    pub mass: u32,
    pub charge: f32,
    /// Offset from the owning molecule's center of mass
    pub local_pos: Vec2,
    /// Copied from the molecule's net velocity at the start of every force pass
    pub vel: Vec2,
    /// Net force from the last force pass
    pub force: Vec2,
}

impl ChargeParticle {
    pub fn new(mass: u32, charge: f32, local_pos: Vec2) -> Self {
        Self {
            mass,
            charge,
            local_pos,
            vel: Vec2::zero(),
            force: Vec2::zero(),
        }
    }

    #[inline]
    pub fn world_pos(&self, center_of_mass: Vec2) -> Vec2 {
        self.local_pos + center_of_mass
    }

    /// Rotate the local offset about the molecule's origin. Length is kept.
    pub fn rotate(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let p = self.local_pos;
        self.local_pos = Vec2::new(cos * p.x - sin * p.y, sin * p.x + cos * p.y);
    }

    /// Contribution to the moment-of-inertia proxy, `m * |r|^2`.
    #[inline]
    pub fn inertia(&self) -> f32 {
        self.mass as f32 * self.local_pos.mag_sq()
    }
}
