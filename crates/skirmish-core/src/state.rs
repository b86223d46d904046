//! Engine snapshot: the visible combat state produced after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::EngagementPhase;
use crate::events::CombatEvent;
use crate::types::{Position, SimTime, UnitId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub time: SimTime,
    pub engagements: Vec<EngagementView>,
    pub events: Vec<CombatEvent>,
    pub score: ScoreView,
    pub performance: PerformanceView,
}

/// Engagement status for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementView {
    pub attacker: UnitId,
    pub target: UnitId,
    pub phase: EngagementPhase,
    /// Time spent in the current phase (ms).
    pub phase_elapsed_ms: u64,
    /// Time since the engagement opened (ms).
    pub total_elapsed_ms: u64,
    pub return_to: Option<Position>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub attacks_executed: u32,
    pub strikes_skipped: u32,
    pub targets_destroyed: u32,
    pub energy_spent: f64,
    pub rewards_earned: f64,
    pub assaults_resolved: u32,
}

/// Advisory telemetry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceView {
    pub attacks_per_sec: f64,
    pub avg_attack_ms: f64,
    pub validations_per_sec: f64,
    pub frame_impact_ms: f64,
    pub active_engagements: usize,
    pub performing_well: bool,
    pub recommendations: Vec<String>,
}
