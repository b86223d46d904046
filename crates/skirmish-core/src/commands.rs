//! Commands sent from higher layers to the engine.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::config::CombatConfig;
use crate::types::{Position, UnitId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatCommand {
    /// Replace the combat config as a whole.
    SetConfig { config: CombatConfig },
    /// Order an attacker to move. Its destination becomes the return-to
    /// point of any engagement it opens on the way.
    OrderMove {
        attacker: UnitId,
        destination: Position,
    },
    /// Drop the attacker's engagement, if any.
    Disengage { attacker: UnitId },
    /// Resolve a massed strike against one fortified target.
    AssaultTarget {
        target: UnitId,
        attackers: Vec<UnitId>,
    },
}
