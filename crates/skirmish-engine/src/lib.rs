//! Combat engagement engine for SKIRMISH.
//!
//! Validates and ranks targets, drives the per-attacker engagement state
//! machine, resolves massed assaults on fortified targets, and wraps it all
//! in a headless tick loop over a hecs-backed reference battlefield.

pub mod assault;
pub mod collaborators;
pub mod damage;
pub mod engagement;
pub mod engine;
pub mod monitor;
pub mod prioritizer;
pub mod systems;
pub mod validator;
pub mod world;

pub use skirmish_core as core;
pub use engine::{CombatEngine, SimConfig};
