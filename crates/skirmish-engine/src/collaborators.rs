//! Contracts the engine consumes from the rest of the game.
//!
//! The engine never owns targets, balances, or effects. It talks to them
//! through these traits so any registry, ledger, or renderer can sit behind.

use skirmish_core::components::{Attacker, CombatTarget};
use skirmish_core::config::CombatConfig;
use skirmish_core::types::{Position, UnitId};

/// Per-attacker energy balances.
pub trait EnergyLedger {
    fn can_afford(&self, attacker: &UnitId, amount: f64) -> bool;

    /// Remove `amount` from the attacker's balance. Returns false and leaves
    /// the balance untouched when it cannot be paid.
    fn debit(&mut self, attacker: &UnitId, amount: f64, reason: &str) -> bool;
}

/// Source of nearby damageable entities.
pub trait CandidateSource {
    fn detect_nearby(&self, attacker: &UnitId, radius: f64) -> Vec<CombatTarget>;
}

/// Fire-and-forget orders to the movement subsystem. Completion is observed
/// on later ticks, never awaited.
pub trait MovementOrders {
    fn move_to(&mut self, attacker: &UnitId, destination: Position);

    /// Cancel any outstanding move order.
    fn stop(&mut self, attacker: &UnitId);

    fn face_toward(&mut self, attacker: &UnitId, point: Position);
}

/// Lookup and bookkeeping for attackers and targets by id.
pub trait TargetRegistry {
    /// Ids of every unit able to attack, in a stable order.
    fn attackers(&self) -> Vec<UnitId>;

    fn attacker(&self, id: &UnitId) -> Option<Attacker>;

    fn target(&self, id: &UnitId) -> Option<CombatTarget>;

    /// Subtract `amount` from the target's health, clamped at zero.
    /// Returns the remaining health, or `None` if the target is unknown.
    fn apply_damage(&mut self, id: &UnitId, amount: f64) -> Option<f64>;

    /// Hand a destroyed target back to its owner for removal.
    fn report_destroyed(&mut self, id: &UnitId, by: &UnitId);
}

/// Cosmetic effects. Nothing is read back.
pub trait EffectSink {
    fn spawn_strike_effect(&mut self, from: Position, to: Position);

    fn spawn_destruction_effect(&mut self, at: Position);
}

/// Player-facing notifications.
pub trait NotificationSink {
    fn notify_energy_shortage(&mut self, attacker: &UnitId, required: f64);

    fn notify_target_destroyed(&mut self, kind_label: &str);
}

/// Attacker-specific damage formula.
pub trait DamagePolicy {
    fn damage(&mut self, attacker: &Attacker, target: &CombatTarget) -> f64;
}

/// Everything the engine needs from the world the units live in.
pub trait Battlefield: TargetRegistry + CandidateSource + MovementOrders {}

impl<T: TargetRegistry + CandidateSource + MovementOrders> Battlefield for T {}

/// Effects and notifications usually land in the same place.
pub trait CombatFeedback: EffectSink + NotificationSink {}

impl<T: EffectSink + NotificationSink> CombatFeedback for T {}

/// Borrowed collaborators for one unit of work inside a tick.
pub struct TickContext<'a> {
    pub config: &'a CombatConfig,
    pub now_ms: u64,
    pub world: &'a mut dyn Battlefield,
    pub ledger: &'a mut dyn EnergyLedger,
    pub feedback: &'a mut dyn CombatFeedback,
    pub damage: &'a mut dyn DamagePolicy,
}
