//! Reference collaborators: a hecs-backed battlefield, a per-attacker energy
//! bank, and an in-memory event log.
//!
//! Games embedding the engine can swap any of these for their own
//! implementations of the traits in [`crate::collaborators`].

use std::collections::HashMap;

use hecs::{Entity, World};
use tracing::{debug, trace};

use skirmish_core::components::*;
use skirmish_core::enums::{AttackerClass, Faction, TargetKind, UnitClass};
use skirmish_core::events::CombatEvent;
use skirmish_core::types::{Position, UnitId};

use crate::collaborators::*;

/// Default hit points for attacking units.
const ATTACKER_MAX_HEALTH: f64 = 100.0;

/// Units, objectives and structures stored as hecs entities, indexed by id.
#[derive(Default)]
pub struct CombatWorld {
    world: World,
    index: HashMap<UnitId, Entity>,
}

impl CombatWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a unit that can attack. Attackers are damageable defender-class
    /// units of their faction. Re-using an id replaces the old entity.
    pub fn spawn_attacker(
        &mut self,
        id: impl Into<UnitId>,
        position: Position,
        faction: Faction,
        class: AttackerClass,
    ) -> Entity {
        let id = id.into();
        self.forget(&id);
        let entity = self.world.spawn((
            id.clone(),
            position,
            faction,
            TargetKind::unit(UnitClass::Defender),
            Health::full(ATTACKER_MAX_HEALTH),
            Armament { class },
            Heading::default(),
        ));
        self.index.insert(id, entity);
        entity
    }

    /// Spawn anything that can be attacked.
    pub fn spawn_target(
        &mut self,
        id: impl Into<UnitId>,
        position: Position,
        faction: Faction,
        kind: TargetKind,
        max_health: f64,
    ) -> Entity {
        let id = id.into();
        self.forget(&id);
        let entity = self
            .world
            .spawn((id.clone(), position, faction, kind, Health::full(max_health)));
        self.index.insert(id, entity);
        entity
    }

    fn forget(&mut self, id: &UnitId) {
        if let Some(entity) = self.index.remove(id) {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn contains(&self, id: &UnitId) -> bool {
        self.index.contains_key(id)
    }

    /// Change a target's kind, e.g. when an objective turns vulnerable.
    pub fn set_kind(&mut self, id: &UnitId, kind: TargetKind) -> bool {
        self.component_mut(id, |k: &mut TargetKind| *k = kind)
    }

    pub fn set_position(&mut self, id: &UnitId, position: Position) -> bool {
        self.component_mut(id, |p: &mut Position| *p = position)
    }

    pub fn set_health(&mut self, id: &UnitId, current: f64) -> bool {
        self.component_mut(id, |h: &mut Health| h.current = current)
    }

    fn component_mut<T: hecs::Component>(
        &mut self,
        id: &UnitId,
        update: impl FnOnce(&mut T),
    ) -> bool {
        let Some(&entity) = self.index.get(id) else {
            return false;
        };
        match self.world.get::<&mut T>(entity) {
            Ok(mut component) => {
                update(&mut *component);
                true
            }
            Err(_) => false,
        }
    }

    pub fn position(&self, id: &UnitId) -> Option<Position> {
        let entity = *self.index.get(id)?;
        let position = *self.world.get::<&Position>(entity).ok()?;
        Some(position)
    }

    pub fn health(&self, id: &UnitId) -> Option<f64> {
        let entity = *self.index.get(id)?;
        let current = self.world.get::<&Health>(entity).ok()?.current;
        Some(current)
    }

    pub fn heading(&self, id: &UnitId) -> Option<f64> {
        let entity = *self.index.get(id)?;
        let heading = self.world.get::<&Heading>(entity).ok()?.0;
        Some(heading)
    }

    pub fn move_order(&self, id: &UnitId) -> Option<Position> {
        let entity = *self.index.get(id)?;
        let destination = self.world.get::<&MoveOrder>(entity).ok()?.destination;
        Some(destination)
    }

    pub fn is_destroyed(&self, id: &UnitId) -> bool {
        self.index
            .get(id)
            .is_some_and(|&entity| self.world.get::<&Destroyed>(entity).is_ok())
    }

    /// Remove every target marked destroyed. Returns their ids.
    pub fn despawn_destroyed(&mut self) -> Vec<UnitId> {
        let doomed: Vec<(Entity, UnitId)> = self
            .world
            .query::<(&UnitId, &Destroyed)>()
            .iter()
            .map(|(entity, (id, _))| (entity, id.clone()))
            .collect();

        for (entity, id) in &doomed {
            let _ = self.world.despawn(*entity);
            self.index.remove(id);
        }
        doomed.into_iter().map(|(_, id)| id).collect()
    }

    pub fn ecs(&self) -> &World {
        &self.world
    }

    pub(crate) fn ecs_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl TargetRegistry for CombatWorld {
    fn attackers(&self) -> Vec<UnitId> {
        let mut ids: Vec<UnitId> = self
            .world
            .query::<(&UnitId, &Armament)>()
            .iter()
            .map(|(_, (id, _))| id.clone())
            .collect();
        ids.sort();
        ids
    }

    fn attacker(&self, id: &UnitId) -> Option<Attacker> {
        let entity = *self.index.get(id)?;
        let class = self.world.get::<&Armament>(entity).ok()?.class;
        let position = *self.world.get::<&Position>(entity).ok()?;
        let faction = *self.world.get::<&Faction>(entity).ok()?;
        let destination = self
            .world
            .get::<&MoveOrder>(entity)
            .ok()
            .map(|order| order.destination);
        Some(Attacker {
            id: id.clone(),
            position,
            faction,
            class,
            destination,
        })
    }

    fn target(&self, id: &UnitId) -> Option<CombatTarget> {
        let entity = *self.index.get(id)?;
        if self.world.get::<&Destroyed>(entity).is_ok() {
            return None;
        }
        let position = *self.world.get::<&Position>(entity).ok()?;
        let health = *self.world.get::<&Health>(entity).ok()?;
        let faction = *self.world.get::<&Faction>(entity).ok()?;
        let kind = *self.world.get::<&TargetKind>(entity).ok()?;
        Some(CombatTarget {
            id: id.clone(),
            position,
            health: health.current,
            max_health: health.max,
            faction,
            kind,
        })
    }

    fn apply_damage(&mut self, id: &UnitId, amount: f64) -> Option<f64> {
        let entity = *self.index.get(id)?;
        let mut health = self.world.get::<&mut Health>(entity).ok()?;
        health.current = (health.current - amount).max(0.0);
        Some(health.current)
    }

    fn report_destroyed(&mut self, id: &UnitId, by: &UnitId) {
        if let Some(&entity) = self.index.get(id) {
            let _ = self.world.insert_one(entity, Destroyed);
            debug!(target: "skirmish::world", target_id = %id, by = %by, "Target marked destroyed");
        }
    }
}

impl CandidateSource for CombatWorld {
    fn detect_nearby(&self, attacker: &UnitId, radius: f64) -> Vec<CombatTarget> {
        let Some(origin) = self.position(attacker) else {
            return Vec::new();
        };
        let mut found: Vec<CombatTarget> = self
            .world
            .query::<(
                &UnitId,
                &Position,
                &Health,
                &Faction,
                &TargetKind,
                Option<&Destroyed>,
            )>()
            .iter()
            .filter(|(_, (id, pos, _, _, _, destroyed))| {
                destroyed.is_none() && *id != attacker && origin.range_to(pos) <= radius
            })
            .map(|(_, (id, pos, health, faction, kind, _))| CombatTarget {
                id: id.clone(),
                position: *pos,
                health: health.current,
                max_health: health.max,
                faction: *faction,
                kind: *kind,
            })
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }
}

impl MovementOrders for CombatWorld {
    fn move_to(&mut self, attacker: &UnitId, destination: Position) {
        if let Some(&entity) = self.index.get(attacker) {
            let _ = self.world.insert_one(entity, MoveOrder { destination });
        }
    }

    fn stop(&mut self, attacker: &UnitId) {
        if let Some(&entity) = self.index.get(attacker) {
            let _ = self.world.remove_one::<MoveOrder>(entity);
        }
    }

    fn face_toward(&mut self, attacker: &UnitId, point: Position) {
        let Some(&entity) = self.index.get(attacker) else {
            return;
        };
        let Ok(position) = self.world.get::<&Position>(entity).map(|p| *p) else {
            return;
        };
        if let Ok(mut heading) = self.world.get::<&mut Heading>(entity) {
            heading.0 = position.bearing_to(&point);
        }
    }
}

/// Per-attacker energy balances.
#[derive(Debug, Clone, Default)]
pub struct EnergyBank {
    balances: HashMap<UnitId, f64>,
}

impl EnergyBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deposit(&mut self, attacker: impl Into<UnitId>, amount: f64) {
        *self.balances.entry(attacker.into()).or_insert(0.0) += amount;
    }

    pub fn set_balance(&mut self, attacker: impl Into<UnitId>, amount: f64) {
        self.balances.insert(attacker.into(), amount);
    }

    pub fn balance(&self, attacker: &UnitId) -> f64 {
        self.balances.get(attacker).copied().unwrap_or(0.0)
    }
}

impl EnergyLedger for EnergyBank {
    fn can_afford(&self, attacker: &UnitId, amount: f64) -> bool {
        self.balance(attacker) >= amount
    }

    fn debit(&mut self, attacker: &UnitId, amount: f64, reason: &str) -> bool {
        if !self.can_afford(attacker, amount) {
            return false;
        }
        *self.balances.entry(attacker.clone()).or_insert(0.0) -= amount;
        trace!(target: "skirmish::energy", attacker = %attacker, amount, reason, "Energy debited");
        true
    }
}

/// Collects effect requests and notifications for the current tick.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<CombatEvent>,
}

impl EventLog {
    pub fn push(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EffectSink for EventLog {
    fn spawn_strike_effect(&mut self, from: Position, to: Position) {
        self.push(CombatEvent::StrikeEffect { from, to });
    }

    fn spawn_destruction_effect(&mut self, at: Position) {
        self.push(CombatEvent::DestructionEffect { at });
    }
}

impl NotificationSink for EventLog {
    fn notify_energy_shortage(&mut self, attacker: &UnitId, required: f64) {
        self.push(CombatEvent::EnergyShortage {
            attacker: attacker.clone(),
            required,
        });
    }

    fn notify_target_destroyed(&mut self, kind_label: &str) {
        self.push(CombatEvent::TargetDestroyed {
            kind: kind_label.to_owned(),
        });
    }
}
