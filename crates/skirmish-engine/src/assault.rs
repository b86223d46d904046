//! Coordinated assaults: several attackers massed against one fortified
//! target, resolved in a single step instead of independent engagements.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use skirmish_core::components::{Attacker, CombatTarget};
use skirmish_core::constants::*;
use skirmish_core::enums::{AssaultDifficulty, AssaultFailure, NotAdvisable, TargetKind};
use skirmish_core::error::CombatError;
use skirmish_core::types::UnitId;

use crate::collaborators::TickContext;
use crate::engagement::ScoreState;
use crate::systems::phase::{land_damage, StrikeResult};
use crate::validator::TargetValidator;

/// Result of a coordinated strike. On failure nothing was mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssaultOutcome {
    pub success: bool,
    pub failure: Option<AssaultFailure>,
    pub target: UnitId,
    /// Attackers that paid and contributed.
    pub participants: Vec<UnitId>,
    /// Sum of individual contributions before the modifier.
    pub base_damage: f64,
    pub modifier: f64,
    pub total_damage: f64,
    pub target_destroyed: bool,
}

impl AssaultOutcome {
    fn failed(target: &UnitId, failure: AssaultFailure) -> Self {
        Self {
            success: false,
            failure: Some(failure),
            target: target.clone(),
            participants: Vec::new(),
            base_damage: 0.0,
            modifier: 0.0,
            total_damage: 0.0,
            target_destroyed: false,
        }
    }
}

/// Damage multiplier for `attackers` paying attackers against a structure.
/// A lone attacker is penalised; groups earn a capped coordination bonus.
pub fn structure_damage_modifier(attackers: usize) -> f64 {
    match attackers {
        0 => 0.0,
        1 => SOLO_ASSAULT_MULTIPLIER,
        n => {
            let bonus =
                ((n - 1) as f64 * COORDINATION_BONUS_PER_ATTACKER).min(COORDINATION_BONUS_CAP);
            1.0 + bonus
        }
    }
}

/// Resolve a massed strike against one objective or structure.
///
/// Affordability is checked for everyone before anyone pays, so a strike
/// with no paying attacker leaves balances and health untouched.
pub fn coordinate_multi_attacker_damage(
    target_id: &UnitId,
    attacker_ids: &[UnitId],
    ctx: &mut TickContext<'_>,
    score: &mut ScoreState,
) -> Result<AssaultOutcome, CombatError> {
    let target = ctx
        .world
        .target(target_id)
        .ok_or_else(|| CombatError::UnknownTarget(target_id.clone()))?;

    let mut seen = HashSet::new();
    let mut attackers: Vec<Attacker> = Vec::with_capacity(attacker_ids.len());
    for id in attacker_ids {
        if !seen.insert(id) {
            continue;
        }
        let attacker = ctx
            .world
            .attacker(id)
            .ok_or_else(|| CombatError::UnknownAttacker(id.clone()))?;
        attackers.push(attacker);
    }

    if !fortified_and_open(&target) {
        debug!(
            target: "skirmish::assault",
            target_id = %target.id,
            kind = target.kind.label(),
            "Assault target not eligible"
        );
        return Ok(AssaultOutcome::failed(target_id, AssaultFailure::NoEligibleTarget));
    }

    let cost = ctx.config.energy_per_attack;
    let validator = TargetValidator::new(ctx.config);
    let payers: Vec<&Attacker> = attackers
        .iter()
        .filter(|attacker| {
            validator.is_legal_target(attacker, &target)
                && ctx.ledger.can_afford(&attacker.id, cost)
        })
        .collect();

    if payers.is_empty() {
        debug!(
            target: "skirmish::assault",
            target_id = %target.id,
            offered = attackers.len(),
            "No attacker can pay for the assault"
        );
        return Ok(AssaultOutcome::failed(target_id, AssaultFailure::NoPayingAttacker));
    }

    let mut base_damage = 0.0;
    let mut participants = Vec::with_capacity(payers.len());
    for attacker in &payers {
        if !ctx.ledger.debit(&attacker.id, cost, ASSAULT_DEBIT_TAG) {
            continue;
        }
        score.energy_spent += cost;
        ctx.feedback
            .spawn_strike_effect(attacker.position, target.position);
        base_damage += ctx.damage.damage(attacker, &target).max(0.0);
        participants.push(attacker.id.clone());
    }

    let Some(lead) = participants.first().cloned() else {
        return Ok(AssaultOutcome::failed(target_id, AssaultFailure::NoPayingAttacker));
    };

    let modifier = match target.kind {
        TargetKind::Structure { .. } => structure_damage_modifier(participants.len()),
        _ => 1.0,
    };
    let total_damage = base_damage * modifier;
    let strike = land_damage(ctx, &lead, &target, total_damage, score)?;
    score.assaults_resolved += 1;

    let target_destroyed = matches!(strike, StrikeResult::Destroyed { .. });
    info!(
        target: "skirmish::assault",
        target_id = %target.id,
        attackers = participants.len(),
        base_damage,
        modifier,
        total_damage,
        target_destroyed,
        "Assault resolved"
    );

    Ok(AssaultOutcome {
        success: true,
        failure: None,
        target: target_id.clone(),
        participants,
        base_damage,
        modifier,
        total_damage,
        target_destroyed,
    })
}

fn fortified_and_open(target: &CombatTarget) -> bool {
    target.is_alive()
        && matches!(
            target.kind,
            TargetKind::Objective { vulnerable: true }
                | TargetKind::Structure {
                    constructed: true,
                    ..
                }
        )
}

/// Planning view of a structure assault.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructureAssessment {
    pub recommended_attackers: u32,
    pub available_attackers: u32,
    pub difficulty: AssaultDifficulty,
    /// Damage multiplier the available attackers would get.
    pub expected_modifier: f64,
}

/// Rate a structure assault from its garrison size and the attackers at hand.
pub fn assess_structure_assault(garrison: u32, available: u32) -> StructureAssessment {
    let recommended = ASSAULT_BASE_RECOMMENDED + garrison / ASSAULT_DEFENDERS_PER_EXTRA_ATTACKER;
    let difficulty = if available >= recommended {
        AssaultDifficulty::Easy
    } else if available + 1 >= recommended {
        AssaultDifficulty::Moderate
    } else if available >= 1 {
        AssaultDifficulty::Hard
    } else {
        AssaultDifficulty::Impossible
    };
    StructureAssessment {
        recommended_attackers: recommended,
        available_attackers: available,
        difficulty,
        expected_modifier: structure_damage_modifier(available as usize),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveAssessment {
    pub advisable: bool,
    pub reason: Option<NotAdvisable>,
}

/// Objective assaults only make sense while the objective is vulnerable.
pub fn assess_objective_assault(kind: &TargetKind, available: u32) -> ObjectiveAssessment {
    let reason = match kind {
        TargetKind::Objective { vulnerable: false } => Some(NotAdvisable::NotVulnerable),
        TargetKind::Objective { vulnerable: true } if available == 0 => {
            Some(NotAdvisable::NoAttackers)
        }
        TargetKind::Objective { vulnerable: true } => None,
        _ => Some(NotAdvisable::NotAnObjective),
    };
    ObjectiveAssessment {
        advisable: reason.is_none(),
        reason,
    }
}
