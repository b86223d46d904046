//! Detection system: idle attackers scan for legal targets and open
//! engagements on the best one.

use std::collections::BTreeMap;

use tracing::debug;

use skirmish_core::components::{Attacker, CombatTarget};
use skirmish_core::enums::EngagementPhase;
use skirmish_core::error::CombatError;
use skirmish_core::types::UnitId;

use crate::collaborators::TickContext;
use crate::engagement::Engagement;
use crate::prioritizer::TargetPrioritizer;
use crate::validator::TargetValidator;

/// Living candidates around `attacker` that pass the type-only check,
/// plus the number of candidates examined.
pub(crate) fn legal_candidates(
    attacker: &Attacker,
    ctx: &TickContext<'_>,
) -> (Vec<CombatTarget>, u32) {
    let validator = TargetValidator::new(ctx.config);
    let nearby = ctx
        .world
        .detect_nearby(&attacker.id, ctx.config.detection_radius);
    let scanned = u32::try_from(nearby.len()).unwrap_or(u32::MAX);
    let legal = nearby
        .into_iter()
        .filter(|candidate| candidate.is_alive() && validator.is_legal_target(attacker, candidate))
        .collect();
    (legal, scanned)
}

/// Outcome of one detection pass.
#[derive(Debug, Default)]
pub struct DetectionReport {
    /// (attacker, target) pairs that opened an engagement.
    pub opened: Vec<(UnitId, UnitId)>,
    pub validations: u32,
}

/// Open an engagement for every attacker that has none and sees a legal target.
pub fn run(
    engagements: &mut BTreeMap<UnitId, Engagement>,
    ctx: &mut TickContext<'_>,
) -> Result<DetectionReport, CombatError> {
    let mut report = DetectionReport::default();
    let prioritizer = TargetPrioritizer::new(ctx.config.detection_radius);

    for attacker_id in ctx.world.attackers() {
        if engagements.contains_key(&attacker_id) {
            continue;
        }
        let attacker = ctx
            .world
            .attacker(&attacker_id)
            .ok_or_else(|| CombatError::UnknownAttacker(attacker_id.clone()))?;

        let (candidates, scanned) = legal_candidates(&attacker, ctx);
        report.validations += scanned;

        let Some(target) = prioritizer.select_consistent(&attacker.position, &candidates) else {
            continue;
        };

        // Detection while under way remembers the destination and stops the unit.
        let phase = if attacker.destination.is_some() {
            EngagementPhase::Moving
        } else {
            EngagementPhase::Detecting
        };
        if attacker.destination.is_some() {
            ctx.world.move_to(&attacker.id, attacker.position);
        }

        debug!(
            target: "skirmish::detection",
            attacker = %attacker.id,
            target_id = %target.id,
            phase = ?phase,
            "Engagement opened"
        );
        report
            .opened
            .push((attacker.id.clone(), target.id.clone()));
        engagements.insert(
            attacker.id.clone(),
            Engagement::new(
                attacker.id.clone(),
                target.id.clone(),
                phase,
                ctx.now_ms,
                attacker.destination,
            ),
        );
    }

    Ok(report)
}
