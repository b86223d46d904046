//! Damage policies.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Attacker, CombatTarget};
use skirmish_core::constants::*;
use skirmish_core::enums::AttackerClass;

use crate::collaborators::DamagePolicy;

/// Base damage of an attacker class before variance.
pub fn base_damage(class: AttackerClass) -> f64 {
    match class {
        AttackerClass::Sentry => SENTRY_BASE_DAMAGE,
        AttackerClass::Striker => STRIKER_BASE_DAMAGE,
        AttackerClass::Siege => SIEGE_BASE_DAMAGE,
    }
}

/// Per-class base damage with seeded, symmetric variance.
/// Same seed = same damage sequence.
pub struct ClassDamage {
    rng: ChaCha8Rng,
    /// Fractional spread, e.g. 0.1 for ±10%.
    variance: f64,
}

impl ClassDamage {
    pub fn new(seed: u64, variance: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            variance: variance.clamp(0.0, 1.0),
        }
    }
}

impl DamagePolicy for ClassDamage {
    fn damage(&mut self, attacker: &Attacker, _target: &CombatTarget) -> f64 {
        let base = base_damage(attacker.class);
        if self.variance <= 0.0 {
            return base;
        }
        let roll: f64 = self.rng.gen_range(-self.variance..=self.variance);
        base * (1.0 + roll)
    }
}

/// The same damage for every strike.
#[derive(Debug, Clone, Copy)]
pub struct FixedDamage(pub f64);

impl DamagePolicy for FixedDamage {
    fn damage(&mut self, _attacker: &Attacker, _target: &CombatTarget) -> f64 {
        self.0
    }
}
