//! ECS components and the resolved combatant views built from them.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in the engine's systems, not here.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, UnitId};

/// Hit points of anything that can be damaged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }
}

/// Marks an entity as able to attack, with its class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Armament {
    pub class: AttackerClass,
}

/// Facing in radians (0 = North, clockwise).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Heading(pub f64);

/// Outstanding move order. Removed by the movement system on arrival.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveOrder {
    pub destination: Position,
}

/// Marks a target whose destruction has been reported to its registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Destroyed;

/// Everything the engine needs to know about a damageable entity this tick.
///
/// Built fresh from the registry on every lookup; the engine never holds
/// one across ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatTarget {
    pub id: UnitId,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub faction: Faction,
    pub kind: TargetKind,
}

impl CombatTarget {
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

/// Combat view of an attacking unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attacker {
    pub id: UnitId,
    pub position: Position,
    pub faction: Faction,
    pub class: AttackerClass,
    /// Destination of the move order the attacker was following, if any.
    pub destination: Option<Position>,
}
