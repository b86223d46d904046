//! Events emitted by the engine for effect and notification consumers.

use serde::{Deserialize, Serialize};

use crate::enums::EngagementPhase;
use crate::types::{Position, UnitId};

/// Cosmetic side effects and player notifications requested during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// Visual strike between attacker and target.
    StrikeEffect { from: Position, to: Position },
    /// Visual destruction at a target's last position.
    DestructionEffect { at: Position },
    /// Attacker could not pay for a strike.
    EnergyShortage { attacker: UnitId, required: f64 },
    /// A target was destroyed.
    TargetDestroyed { kind: String },
    /// An engagement was opened.
    EngagementStarted { attacker: UnitId, target: UnitId },
    /// An engagement reached a terminal phase.
    EngagementEnded {
        attacker: UnitId,
        phase: EngagementPhase,
    },
}
