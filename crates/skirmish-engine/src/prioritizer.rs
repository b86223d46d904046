//! Target prioritization.
//!
//! Scores are recomputed on every call. Distance, health and lifecycle flags
//! move every tick, so nothing here is cached.

use std::cmp::Ordering;

use skirmish_core::components::CombatTarget;
use skirmish_core::constants::*;
use skirmish_core::enums::{TargetKind, UnitClass};
use skirmish_core::types::Position;

/// Which type-bonus table to score with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringMode {
    #[default]
    Standard,
    /// Heavier weights for objectives and structures, used when planning
    /// territorial assaults.
    Territorial,
}

/// A candidate with its score and distance from the attacker.
#[derive(Debug, Clone)]
pub struct RankedTarget<'t> {
    pub target: &'t CombatTarget,
    pub score: f64,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct TargetPrioritizer {
    max_detection_range: f64,
    mode: ScoringMode,
}

impl TargetPrioritizer {
    pub fn new(max_detection_range: f64) -> Self {
        Self {
            max_detection_range,
            mode: ScoringMode::Standard,
        }
    }

    pub fn territorial(max_detection_range: f64) -> Self {
        Self {
            max_detection_range,
            mode: ScoringMode::Territorial,
        }
    }

    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// Priority of one candidate as seen from `origin`.
    pub fn score(&self, origin: &Position, candidate: &CombatTarget) -> f64 {
        let distance = origin.range_to(&candidate.position);
        self.score_at(distance, candidate)
    }

    fn score_at(&self, distance: f64, candidate: &CombatTarget) -> f64 {
        let proximity = if self.max_detection_range > 0.0 {
            (self.max_detection_range - distance) / self.max_detection_range
                * PRIORITY_PROXIMITY_WEIGHT
        } else {
            0.0
        };
        let low_health = if candidate.max_health > 0.0 {
            (1.0 - candidate.health / candidate.max_health) * PRIORITY_LOW_HEALTH_WEIGHT
        } else {
            0.0
        };
        PRIORITY_BASE + proximity + low_health + self.type_bonus(&candidate.kind)
    }

    fn type_bonus(&self, kind: &TargetKind) -> f64 {
        match (self.mode, kind) {
            (
                _,
                TargetKind::Unit {
                    class: UnitClass::Drainer,
                },
            ) => PRIORITY_DRAINER_BONUS,
            (_, TargetKind::Unit { .. }) => 0.0,
            (ScoringMode::Standard, TargetKind::Objective { vulnerable: true }) => {
                PRIORITY_OBJECTIVE_BONUS
            }
            (ScoringMode::Territorial, TargetKind::Objective { vulnerable: true }) => {
                TERRITORIAL_OBJECTIVE_BONUS
            }
            (_, TargetKind::Objective { .. }) => 0.0,
            (
                ScoringMode::Standard,
                TargetKind::Structure {
                    constructed: true, ..
                },
            ) => PRIORITY_STRUCTURE_BONUS,
            (
                ScoringMode::Territorial,
                TargetKind::Structure {
                    constructed: true,
                    garrison,
                },
            ) => {
                let garrison_bonus = (*garrison as f64 * TERRITORIAL_GARRISON_BONUS_PER_UNIT)
                    .min(TERRITORIAL_GARRISON_BONUS_CAP);
                TERRITORIAL_STRUCTURE_BONUS + garrison_bonus
            }
            (_, TargetKind::Structure { .. }) => 0.0,
        }
    }

    /// Every candidate, highest priority first. The ranking depends only on
    /// the candidate set, never on the order it was passed in.
    pub fn prioritize<'t>(
        &self,
        origin: &Position,
        candidates: &'t [CombatTarget],
    ) -> Vec<RankedTarget<'t>> {
        let mut by_id: Vec<&'t CombatTarget> = candidates.iter().collect();
        by_id.sort_by(|a, b| a.id.cmp(&b.id));

        let mut ranked: Vec<RankedTarget<'t>> = Vec::with_capacity(candidates.len());
        for target in by_id {
            let distance = origin.range_to(&target.position);
            let entry = RankedTarget {
                target,
                score: self.score_at(distance, target),
                distance,
            };
            // Epsilon equality is not transitive, so a library sort could see
            // an inconsistent order. Insertion keeps the ranking well defined.
            let slot = ranked
                .iter()
                .position(|existing| compare(&entry, existing) == Ordering::Less)
                .unwrap_or(ranked.len());
            ranked.insert(slot, entry);
        }
        ranked
    }

    /// The canonical pick. The same candidate set always gives the same winner.
    pub fn select_consistent<'t>(
        &self,
        origin: &Position,
        candidates: &'t [CombatTarget],
    ) -> Option<&'t CombatTarget> {
        match candidates {
            [] => None,
            [only] => Some(only),
            _ => self
                .prioritize(origin, candidates)
                .first()
                .map(|ranked| ranked.target),
        }
    }
}

/// `Less` means `a` ranks ahead of `b`.
fn compare(a: &RankedTarget<'_>, b: &RankedTarget<'_>) -> Ordering {
    if (a.score - b.score).abs() >= PRIORITY_EPSILON {
        return b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal);
    }
    match a.distance.partial_cmp(&b.distance) {
        Some(Ordering::Equal) | None => a.target.id.cmp(&b.target.id),
        Some(order) => order,
    }
}
