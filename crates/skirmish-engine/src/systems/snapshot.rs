//! Snapshot system: builds the visible combat state after each tick.

use std::collections::BTreeMap;

use skirmish_core::events::CombatEvent;
use skirmish_core::state::{CombatSnapshot, PerformanceView};
use skirmish_core::types::{SimTime, UnitId};

use crate::engagement::{Engagement, ScoreState};

pub fn build_snapshot(
    time: &SimTime,
    engagements: &BTreeMap<UnitId, Engagement>,
    events: Vec<CombatEvent>,
    score: &ScoreState,
    performance: PerformanceView,
) -> CombatSnapshot {
    CombatSnapshot {
        time: *time,
        engagements: engagements
            .values()
            .map(|engagement| engagement.view(time.now_ms))
            .collect(),
        events,
        score: score.view(),
        performance,
    }
}
