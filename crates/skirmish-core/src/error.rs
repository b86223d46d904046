//! Error types.
//!
//! Only caller contract violations and bad configuration are errors.
//! Expected combat outcomes (friendly target, out of range, no energy)
//! are plain values.

use crate::types::UnitId;

/// Programming errors surfaced by the engine. These are never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CombatError {
    #[error("unknown attacker: {0}")]
    UnknownAttacker(UnitId),

    #[error("unknown target: {0}")]
    UnknownTarget(UnitId),
}

/// Rejected combat configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse combat config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be a positive finite number, got {value}")]
    InvalidRadius { field: &'static str, value: f64 },

    #[error("attack radius {attack} exceeds detection radius {detection}")]
    AttackBeyondDetection { attack: f64, detection: f64 },

    #[error("energy per attack must be non-negative and finite, got {0}")]
    InvalidEnergyCost(f64),
}
