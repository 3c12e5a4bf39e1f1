//! # astromage
//!
//! Rules engine for AstroMage, a two-player turn-based card game.
//!
//! Each player has health, a hull that absorbs damage first, three resource
//! stocks with matching production rates, and a fixed-size hand. On a turn a
//! player plays one affordable card or discards one, then production and
//! status effects are applied. A player wins by destroying the opponent or by
//! pushing health or any resource stock to the win threshold.
//!
//! ## Design
//!
//! - **Single owner**: `rules::Game` owns both players and the match state.
//!   Card resolution borrows the caster and the opponent for one call.
//!
//! - **Persistent collections**: hands, status lists and history are
//!   `im::Vector`s, so snapshotting a game is cheap.
//!
//! - **Events out, nothing in**: the engine buffers `GameEvent`s for a
//!   presentation layer and never waits on it.
//!
//! - **Deterministic**: all randomness comes from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: sides, stats, status effects, actions, state, config, errors, RNG
//! - `cards`: card definitions, the card pool, the standard catalog
//! - `effects`: card effects and their resolution
//! - `zones`: hand slot cycling
//! - `rules`: economy, status processing, win check, the `Game` state machine
//! - `events`: state-transition events
//! - `opponent`: computer opponent strategies

pub mod core;
pub mod cards;
pub mod effects;
pub mod zones;
pub mod rules;
pub mod events;
pub mod opponent;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord,
    EngineError, GameConfig, GameRng,
    GameState, Phase, WinReason,
    Player, Side, SideMap,
    Resource, ResourcePool, Stat,
    StatusEffect, StatusEffects, StatusKind,
};

pub use crate::cards::{standard_catalog, CardDefinition, CardId, CardRegistry};

pub use crate::effects::{CardEffect, EffectResolver, PlayOutcome, StatDelta, StatusGrant, Target};

pub use crate::rules::{Game, StatusTick};

pub use crate::events::{GameEvent, Pulse, Vitals};

pub use crate::opponent::{GreedyStrategy, OpponentStrategy, RandomStrategy};
