//! Engagement data model: one live record per attacking unit.
//!
//! Stored in `CombatEngine`'s engagement map keyed by attacker id, NOT as
//! ECS entities. Targets are referenced by id and re-resolved every tick.

use skirmish_core::constants::TIMEOUT_DURATION_MS;
use skirmish_core::enums::EngagementPhase;
use skirmish_core::state::{EngagementView, ScoreView};
use skirmish_core::types::{Position, UnitId};

#[derive(Debug, Clone)]
pub struct Engagement {
    pub attacker: UnitId,
    pub target: UnitId,
    pub phase: EngagementPhase,

    // --- Timing (simulation ms) ---
    pub started_ms: u64,
    /// Set by every `set_phase` call. Phase timers measure from here.
    pub phase_started_ms: u64,
    pub last_attack_ms: Option<u64>,

    /// Where the attacker was headed before it engaged.
    pub return_to: Option<Position>,
    /// Opened by a detection scan rather than an explicit order.
    pub detection_triggered: bool,
}

impl Engagement {
    pub fn new(
        attacker: UnitId,
        target: UnitId,
        phase: EngagementPhase,
        now_ms: u64,
        return_to: Option<Position>,
    ) -> Self {
        Self {
            attacker,
            target,
            phase,
            started_ms: now_ms,
            phase_started_ms: now_ms,
            last_attack_ms: None,
            return_to,
            detection_triggered: true,
        }
    }

    pub fn set_phase(&mut self, phase: EngagementPhase, now_ms: u64) {
        self.phase = phase;
        self.phase_started_ms = now_ms;
    }

    pub fn phase_elapsed(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.phase_started_ms)
    }

    pub fn total_elapsed(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_ms)
    }

    pub fn timed_out(&self, now_ms: u64) -> bool {
        self.total_elapsed(now_ms) > TIMEOUT_DURATION_MS
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Point the engagement at a replacement target and restart the cycle.
    pub fn rebind(&mut self, target: UnitId, now_ms: u64) {
        self.target = target;
        self.set_phase(EngagementPhase::Detecting, now_ms);
    }

    pub fn view(&self, now_ms: u64) -> EngagementView {
        EngagementView {
            attacker: self.attacker.clone(),
            target: self.target.clone(),
            phase: self.phase,
            phase_elapsed_ms: self.phase_elapsed(now_ms),
            total_elapsed_ms: self.total_elapsed(now_ms),
            return_to: self.return_to,
        }
    }
}

/// Running combat totals tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub attacks_executed: u32,
    pub strikes_skipped: u32,
    pub targets_destroyed: u32,
    pub energy_spent: f64,
    pub rewards_earned: f64,
    pub assaults_resolved: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            attacks_executed: self.attacks_executed,
            strikes_skipped: self.strikes_skipped,
            targets_destroyed: self.targets_destroyed,
            energy_spent: self.energy_spent,
            rewards_earned: self.rewards_earned,
            assaults_resolved: self.assaults_resolved,
        }
    }
}
