//! Core engine types: sides, players, stats, status effects, state, actions,
//! RNG, configuration, and errors.
//!
//! Everything else in the crate is built on these records. None of them know
//! about card text or turn sequencing.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod stats;
pub mod status;

pub use action::{Action, ActionKind, ActionRecord};
pub use config::GameConfig;
pub use error::EngineError;
pub use player::{Player, Side, SideMap};
pub use rng::GameRng;
pub use state::{GameState, Phase, WinReason};
pub use stats::{Resource, ResourcePool, Stat};
pub use status::{StatusEffect, StatusEffects, StatusKind};
