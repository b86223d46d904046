//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Side a unit or structure fights for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    #[default]
    Defender,
    Hostile,
}

/// Class of a plain (non-objective) unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    /// Ordinary hostile unit.
    #[default]
    Raider,
    /// Hostile unit that drains the defenders' resources. Worth more to kill.
    Drainer,
    /// Defending unit. Never a legal target.
    Defender,
}

/// Closed set of things that can take damage.
///
/// Lifecycle gating is expressed through [`TargetKind::lifecycle_eligible`]
/// so every consumer matches exhaustively instead of probing types at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TargetKind {
    /// Generic unit.
    Unit { class: UnitClass },
    /// High-value objective, open to attack only while vulnerable.
    Objective { vulnerable: bool },
    /// Fortified structure, open to attack only once constructed.
    Structure { constructed: bool, garrison: u32 },
}

impl TargetKind {
    pub fn unit(class: UnitClass) -> Self {
        TargetKind::Unit { class }
    }

    /// Whether the target is in the lifecycle phase that allows attacks.
    pub fn lifecycle_eligible(&self) -> bool {
        match self {
            TargetKind::Unit { .. } => true,
            TargetKind::Objective { vulnerable } => *vulnerable,
            TargetKind::Structure { constructed, .. } => *constructed,
        }
    }

    /// Label reported to the notification sink when a target is destroyed.
    pub fn label(&self) -> &'static str {
        match self {
            TargetKind::Unit {
                class: UnitClass::Raider,
            } => "raider",
            TargetKind::Unit {
                class: UnitClass::Drainer,
            } => "drainer",
            TargetKind::Unit {
                class: UnitClass::Defender,
            } => "defender",
            TargetKind::Objective { .. } => "objective",
            TargetKind::Structure { .. } => "structure",
        }
    }
}

/// Attacker class, consumed by the damage policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackerClass {
    #[default]
    Sentry,
    Striker,
    Siege,
}

/// Engagement lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementPhase {
    /// Detection happened while the attacker was under a move order.
    Moving,
    /// Target registered; orient immediately.
    Detecting,
    /// Orienting toward the target.
    Turning,
    /// Strike executed, firing animation window.
    Firing,
    /// Waiting out the attack cooldown.
    Cooldown,
    /// Target out of attack range, closing distance.
    Engaging,
    /// Control handed back to the movement subsystem.
    ResumingMovement,
    /// Engagement finished.
    Completed,
}

impl EngagementPhase {
    /// No further processing happens in these phases.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EngagementPhase::Completed | EngagementPhase::ResumingMovement
        )
    }
}

/// Reason code for a rejected target validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    Friendly,
    InvalidType,
    InsufficientEnergy,
    OutOfRange,
}

/// Qualitative difficulty of assaulting a fortified structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssaultDifficulty {
    Easy,
    Moderate,
    Hard,
    Impossible,
}

/// Why an objective assault is not advisable right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotAdvisable {
    NotAnObjective,
    NotVulnerable,
    NoAttackers,
}

/// Why a coordinated strike did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssaultFailure {
    NoEligibleTarget,
    NoPayingAttacker,
}
