//! Phase processor: advances one engagement per tick.
//!
//! Order within an engagement is fixed: timeout, target re-validation and
//! retargeting, range check, then phase dispatch.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use skirmish_core::components::{Attacker, CombatTarget};
use skirmish_core::constants::*;
use skirmish_core::enums::EngagementPhase;
use skirmish_core::error::CombatError;
use skirmish_core::types::UnitId;

use crate::collaborators::TickContext;
use crate::engagement::{Engagement, ScoreState};
use crate::monitor::PerformanceMonitor;
use crate::prioritizer::TargetPrioritizer;
use crate::systems::detection::legal_candidates;
use crate::validator::TargetValidator;

/// Result of a strike attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrikeResult {
    /// Attacker could not pay; no damage dealt.
    Skipped,
    Hit { damage: f64, remaining: f64 },
    Destroyed { damage: f64 },
}

/// What happened to one engagement during one tick.
#[derive(Debug, Default)]
pub struct TickReport {
    pub validations: u32,
    pub strike: Option<StrikeResult>,
    pub attack_time: Option<Duration>,
}

/// Advance every live engagement by one tick.
pub fn run(
    engagements: &mut BTreeMap<UnitId, Engagement>,
    ctx: &mut TickContext<'_>,
    score: &mut ScoreState,
    monitor: &mut PerformanceMonitor,
) -> Result<(), CombatError> {
    for engagement in engagements.values_mut() {
        let report = process_tick(engagement, ctx, score)?;
        monitor.record_validations(report.validations);
        if let Some(elapsed) = report.attack_time {
            monitor.record_attack(elapsed);
        }
    }
    Ok(())
}

/// Advance a single engagement.
pub fn process_tick(
    engagement: &mut Engagement,
    ctx: &mut TickContext<'_>,
    score: &mut ScoreState,
) -> Result<TickReport, CombatError> {
    let mut report = TickReport::default();
    if engagement.is_finished() {
        return Ok(report);
    }

    let now = ctx.now_ms;
    if engagement.timed_out(now) {
        warn!(
            target: "skirmish::phase",
            attacker = %engagement.attacker,
            phase = ?engagement.phase,
            elapsed_ms = engagement.total_elapsed(now),
            "Engagement timed out"
        );
        match engagement.return_to {
            Some(destination) => ctx.world.move_to(&engagement.attacker, destination),
            None => ctx.world.stop(&engagement.attacker),
        }
        engagement.set_phase(EngagementPhase::Completed, now);
        return Ok(report);
    }

    let attacker = ctx
        .world
        .attacker(&engagement.attacker)
        .ok_or_else(|| CombatError::UnknownAttacker(engagement.attacker.clone()))?;

    // Step 1: is the current target still worth shooting at?
    let validator = TargetValidator::new(ctx.config);
    report.validations += 1;
    let target = match ctx.world.target(&engagement.target) {
        Some(target) if target.is_alive() && validator.is_legal_target(&attacker, &target) => {
            target
        }
        _ => {
            retarget(engagement, &attacker, ctx, &mut report);
            return Ok(report);
        }
    };

    // Step 2: range. Out of range suspends the cycle while we close in.
    let range = attacker.position.range_to(&target.position);
    if range > ctx.config.attack_radius {
        if engagement.phase != EngagementPhase::Engaging {
            debug!(
                target: "skirmish::phase",
                attacker = %attacker.id,
                range,
                max_range = ctx.config.attack_radius,
                "Target out of range, closing"
            );
            engagement.set_phase(EngagementPhase::Engaging, now);
        }
        ctx.world.move_to(&attacker.id, target.position);
        return Ok(report);
    }
    if engagement.phase == EngagementPhase::Engaging {
        ctx.world.move_to(&attacker.id, attacker.position);
        engagement.set_phase(EngagementPhase::Detecting, now);
        return Ok(report);
    }

    // Step 3: phase dispatch.
    let elapsed = engagement.phase_elapsed(now);
    match engagement.phase {
        EngagementPhase::Moving => {
            engagement.set_phase(EngagementPhase::Detecting, now);
        }
        EngagementPhase::Detecting => {
            ctx.world.face_toward(&attacker.id, target.position);
            engagement.set_phase(EngagementPhase::Turning, now);
        }
        EngagementPhase::Turning => {
            ctx.world.face_toward(&attacker.id, target.position);
            if elapsed >= TURN_DURATION_MS {
                engagement.set_phase(EngagementPhase::Firing, now);
                let started = Instant::now();
                let strike = execute_attack(engagement, &attacker, &target, ctx, score)?;
                report.attack_time = Some(started.elapsed());
                report.strike = Some(strike);
            }
        }
        EngagementPhase::Firing => {
            if elapsed >= FIRE_DURATION_MS {
                engagement.set_phase(EngagementPhase::Cooldown, now);
            }
        }
        EngagementPhase::Cooldown => {
            if elapsed >= ctx.config.attack_cooldown_ms {
                engagement.set_phase(EngagementPhase::Detecting, now);
            }
        }
        EngagementPhase::Engaging
        | EngagementPhase::ResumingMovement
        | EngagementPhase::Completed => {}
    }

    Ok(report)
}

/// Pick a replacement target or hand the attacker back to movement.
fn retarget(
    engagement: &mut Engagement,
    attacker: &Attacker,
    ctx: &mut TickContext<'_>,
    report: &mut TickReport,
) {
    let (mut candidates, scanned) = legal_candidates(attacker, ctx);
    report.validations += scanned;
    candidates.retain(|candidate| candidate.id != engagement.target);

    let prioritizer = TargetPrioritizer::new(ctx.config.detection_radius);
    if let Some(replacement) = prioritizer.select_consistent(&attacker.position, &candidates) {
        debug!(
            target: "skirmish::phase",
            attacker = %attacker.id,
            previous = %engagement.target,
            replacement = %replacement.id,
            "Retargeted"
        );
        engagement.rebind(replacement.id.clone(), ctx.now_ms);
        return;
    }

    match engagement.return_to {
        Some(destination) => {
            ctx.world.move_to(&attacker.id, destination);
            engagement.set_phase(EngagementPhase::ResumingMovement, ctx.now_ms);
        }
        None => {
            // Idle before engaging, so idle again: drop the chase order.
            ctx.world.stop(&attacker.id);
            engagement.set_phase(EngagementPhase::Completed, ctx.now_ms);
        }
    }
    debug!(
        target: "skirmish::phase",
        attacker = %attacker.id,
        phase = ?engagement.phase,
        "No target left, engagement closed"
    );
}

/// Pay, strike, damage and check for a kill as one uninterrupted step.
fn execute_attack(
    engagement: &mut Engagement,
    attacker: &Attacker,
    target: &CombatTarget,
    ctx: &mut TickContext<'_>,
    score: &mut ScoreState,
) -> Result<StrikeResult, CombatError> {
    let cost = ctx.config.energy_per_attack;
    if !ctx.ledger.can_afford(&attacker.id, cost)
        || !ctx.ledger.debit(&attacker.id, cost, ATTACK_DEBIT_TAG)
    {
        ctx.feedback.notify_energy_shortage(&attacker.id, cost);
        score.strikes_skipped += 1;
        debug!(
            target: "skirmish::phase",
            attacker = %attacker.id,
            required = cost,
            "Strike skipped, energy shortage"
        );
        return Ok(StrikeResult::Skipped);
    }
    score.energy_spent += cost;
    score.attacks_executed += 1;
    engagement.last_attack_ms = Some(ctx.now_ms);

    ctx.feedback
        .spawn_strike_effect(attacker.position, target.position);
    let damage = ctx.damage.damage(attacker, target).max(0.0);
    land_damage(ctx, &attacker.id, target, damage, score)
}

/// Apply damage to a target and, on a kill, run the destruction bookkeeping.
pub(crate) fn land_damage(
    ctx: &mut TickContext<'_>,
    by: &UnitId,
    target: &CombatTarget,
    damage: f64,
    score: &mut ScoreState,
) -> Result<StrikeResult, CombatError> {
    let remaining = ctx
        .world
        .apply_damage(&target.id, damage)
        .ok_or_else(|| CombatError::UnknownTarget(target.id.clone()))?;

    if remaining > 0.0 {
        return Ok(StrikeResult::Hit { damage, remaining });
    }

    ctx.feedback.spawn_destruction_effect(target.position);
    ctx.feedback.notify_target_destroyed(target.kind.label());
    ctx.world.report_destroyed(&target.id, by);
    let reward = ctx.config.rewards.reward_for(&target.kind);
    score.targets_destroyed += 1;
    score.rewards_earned += reward;
    info!(
        target: "skirmish::phase",
        attacker = %by,
        target_id = %target.id,
        kind = target.kind.label(),
        reward,
        "Target destroyed"
    );
    Ok(StrikeResult::Destroyed { damage })
}
