//! Decision procedures for the computer-controlled side.
//!
//! Strategies are trait-based so difficulty levels can be swapped without
//! touching the turn state machine:
//! - `GreedyStrategy`: biggest affordable play, else dump the worst card
//! - `RandomStrategy`: seeded uniform choice among legal actions

pub mod strategy;

pub use strategy::{play_turn, GreedyStrategy, OpponentStrategy, RandomStrategy};
