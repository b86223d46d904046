//! Cleanup system: drops finished engagements and despawns destroyed targets.

use std::collections::BTreeMap;

use skirmish_core::events::CombatEvent;
use skirmish_core::types::UnitId;

use crate::engagement::Engagement;
use crate::world::{CombatWorld, EventLog};

pub fn run(
    engagements: &mut BTreeMap<UnitId, Engagement>,
    world: &mut CombatWorld,
    events: &mut EventLog,
) {
    engagements.retain(|_, engagement| {
        if engagement.is_finished() {
            events.push(CombatEvent::EngagementEnded {
                attacker: engagement.attacker.clone(),
                phase: engagement.phase,
            });
            false
        } else {
            true
        }
    });

    world.despawn_destroyed();
}
