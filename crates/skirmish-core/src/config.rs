//! Combat tunables.
//!
//! A `CombatConfig` is read by every component during a tick and replaced
//! wholesale between ticks, never patched field by field.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{TargetKind, UnitClass};
use crate::error::ConfigError;

/// Reward granted when a target of each kind is destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    pub raider: f64,
    pub drainer: f64,
    pub objective: f64,
    pub structure: f64,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            raider: 10.0,
            drainer: 25.0,
            objective: 200.0,
            structure: 120.0,
        }
    }
}

impl RewardTable {
    pub fn reward_for(&self, kind: &TargetKind) -> f64 {
        match kind {
            TargetKind::Unit {
                class: UnitClass::Raider,
            } => self.raider,
            TargetKind::Unit {
                class: UnitClass::Drainer,
            } => self.drainer,
            TargetKind::Unit {
                class: UnitClass::Defender,
            } => 0.0,
            TargetKind::Objective { .. } => self.objective,
            TargetKind::Structure { .. } => self.structure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Radius within which attackers notice candidates.
    pub detection_radius: f64,
    /// Radius within which attackers can strike.
    pub attack_radius: f64,
    /// Energy debited per executed attack.
    pub energy_per_attack: f64,
    /// Cooldown phase length (ms).
    pub attack_cooldown_ms: u64,
    pub rewards: RewardTable,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            detection_radius: DEFAULT_DETECTION_RADIUS,
            attack_radius: DEFAULT_ATTACK_RADIUS,
            energy_per_attack: DEFAULT_ENERGY_PER_ATTACK,
            attack_cooldown_ms: COOLDOWN_DURATION_MS,
            rewards: RewardTable::default(),
        }
    }
}

impl CombatConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CombatConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.detection_radius.is_finite() && self.detection_radius > 0.0) {
            return Err(ConfigError::InvalidRadius {
                field: "detection_radius",
                value: self.detection_radius,
            });
        }
        if !(self.attack_radius.is_finite() && self.attack_radius > 0.0) {
            return Err(ConfigError::InvalidRadius {
                field: "attack_radius",
                value: self.attack_radius,
            });
        }
        if self.attack_radius > self.detection_radius {
            return Err(ConfigError::AttackBeyondDetection {
                attack: self.attack_radius,
                detection: self.detection_radius,
            });
        }
        if !(self.energy_per_attack.is_finite() && self.energy_per_attack >= 0.0) {
            return Err(ConfigError::InvalidEnergyCost(self.energy_per_attack));
        }
        Ok(())
    }
}
