//! Target validation: can this attacker legally strike this candidate now?
//!
//! Rejections are ordinary values. They happen every tick and drive
//! retargeting and phase changes. Only unknown ids are errors.

use skirmish_core::components::{Attacker, CombatTarget};
use skirmish_core::config::CombatConfig;
use skirmish_core::enums::{TargetKind, UnitClass, ValidationReason};
use skirmish_core::error::CombatError;
use skirmish_core::types::UnitId;

use crate::collaborators::{EnergyLedger, TargetRegistry};

/// Why a candidate cannot be struck right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    Friendly,
    InvalidType,
    InsufficientEnergy { required: f64 },
    OutOfRange { range: f64, max_range: f64 },
}

impl Rejection {
    pub fn reason(&self) -> ValidationReason {
        match self {
            Rejection::Friendly => ValidationReason::Friendly,
            Rejection::InvalidType => ValidationReason::InvalidType,
            Rejection::InsufficientEnergy { .. } => ValidationReason::InsufficientEnergy,
            Rejection::OutOfRange { .. } => ValidationReason::OutOfRange,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validation {
    /// Strike allowed. Carries the measured range.
    Valid { range: f64 },
    Rejected(Rejection),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }

    pub fn reason(&self) -> Option<ValidationReason> {
        match self {
            Validation::Valid { .. } => None,
            Validation::Rejected(rejection) => Some(rejection.reason()),
        }
    }
}

/// Stateless rule engine over the current config.
#[derive(Debug, Clone, Copy)]
pub struct TargetValidator<'a> {
    config: &'a CombatConfig,
}

impl<'a> TargetValidator<'a> {
    pub fn new(config: &'a CombatConfig) -> Self {
        Self { config }
    }

    /// Full check, in precedence order: finite positions, faction,
    /// type/lifecycle, energy, range.
    pub fn validate(
        &self,
        attacker: &Attacker,
        candidate: &CombatTarget,
        ledger: &dyn EnergyLedger,
    ) -> Validation {
        if !attacker.position.is_finite() || !candidate.position.is_finite() {
            return Validation::Rejected(Rejection::InvalidType);
        }
        if candidate.faction == attacker.faction {
            return Validation::Rejected(Rejection::Friendly);
        }
        if !kind_eligible(&candidate.kind) {
            return Validation::Rejected(Rejection::InvalidType);
        }
        let required = self.config.energy_per_attack;
        if !ledger.can_afford(&attacker.id, required) {
            return Validation::Rejected(Rejection::InsufficientEnergy { required });
        }
        let range = attacker.position.range_to(&candidate.position);
        if range > self.config.attack_radius {
            return Validation::Rejected(Rejection::OutOfRange {
                range,
                max_range: self.config.attack_radius,
            });
        }
        Validation::Valid { range }
    }

    /// Resolve both ids through the registry, then [`validate`](Self::validate).
    /// An id the registry does not know is a caller bug.
    pub fn validate_ids(
        &self,
        registry: &dyn TargetRegistry,
        attacker: &UnitId,
        target: &UnitId,
        ledger: &dyn EnergyLedger,
    ) -> Result<Validation, CombatError> {
        let attacker = registry
            .attacker(attacker)
            .ok_or_else(|| CombatError::UnknownAttacker(attacker.clone()))?;
        let candidate = registry
            .target(target)
            .ok_or_else(|| CombatError::UnknownTarget(target.clone()))?;
        Ok(self.validate(&attacker, &candidate, ledger))
    }

    /// Type-only check for scanning many candidates. Skips energy and range.
    pub fn is_legal_target(&self, attacker: &Attacker, candidate: &CombatTarget) -> bool {
        candidate.position.is_finite()
            && candidate.faction != attacker.faction
            && kind_eligible(&candidate.kind)
    }

    /// Objective-specific path: the objective must be vulnerable.
    pub fn validate_objective(
        &self,
        attacker: &Attacker,
        candidate: &CombatTarget,
        ledger: &dyn EnergyLedger,
    ) -> Validation {
        match candidate.kind {
            TargetKind::Objective { vulnerable: true } => {
                self.validate(attacker, candidate, ledger)
            }
            _ => Validation::Rejected(Rejection::InvalidType),
        }
    }

    /// Structure-specific path: the structure must be constructed.
    pub fn validate_structure(
        &self,
        attacker: &Attacker,
        candidate: &CombatTarget,
        ledger: &dyn EnergyLedger,
    ) -> Validation {
        match candidate.kind {
            TargetKind::Structure {
                constructed: true, ..
            } => self.validate(attacker, candidate, ledger),
            _ => Validation::Rejected(Rejection::InvalidType),
        }
    }
}

/// Hostile units always qualify; objectives and structures only in their
/// targetable lifecycle phase; defender-class units never.
fn kind_eligible(kind: &TargetKind) -> bool {
    match kind {
        TargetKind::Unit {
            class: UnitClass::Defender,
        } => false,
        other => other.lifecycle_eligible(),
    }
}
