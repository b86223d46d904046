//! Core types and definitions for the SKIRMISH combat engine.
//!
//! This crate defines the vocabulary shared across the workspace:
//! identities, geometry, target kinds, configuration, ECS components,
//! events, snapshot views, and error types. It contains no simulation logic.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
