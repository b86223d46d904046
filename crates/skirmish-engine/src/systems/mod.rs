//! Systems run by the engine each tick.
//!
//! Systems are functions over borrowed state. They own nothing; engagements
//! live in the engine and units live behind the collaborator traits.

pub mod cleanup;
pub mod detection;
pub mod movement;
pub mod phase;
pub mod snapshot;
