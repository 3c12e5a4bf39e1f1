//! Game configuration.
//!
//! `GameConfig` holds the constants a match is dealt from: starting stats,
//! hand size, the resource win threshold, and the RNG seed. Values can be set
//! with builder methods or overridden from the environment.

use serde::{Deserialize, Serialize};
use std::env;

use super::stats::ResourcePool;

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Stats every player starts with.
    pub starting_stats: ResourcePool,

    /// Cards in hand. Constant for the whole match.
    pub hand_size: usize,

    /// A player whose health or any tradable stock reaches this value wins.
    pub win_threshold: i64,

    /// Seed for dealing and refilling hands.
    pub seed: u64,
}

impl GameConfig {
    pub const DEFAULT_HAND_SIZE: usize = 6;
    pub const DEFAULT_WIN_THRESHOLD: i64 = 50;
    pub const DEFAULT_SEED: u64 = 42;

    /// Starting stats for a fresh player.
    pub const DEFAULT_STARTING_STATS: ResourcePool = ResourcePool {
        health: 25,
        hull: 10,
        material: 5,
        energy: 5,
        ammunition: 5,
        material_prod: 2,
        energy_prod: 2,
        ammunition_prod: 2,
    };

    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            starting_stats: Self::DEFAULT_STARTING_STATS,
            hand_size: Self::DEFAULT_HAND_SIZE,
            win_threshold: Self::DEFAULT_WIN_THRESHOLD,
            seed: Self::DEFAULT_SEED,
        }
    }

    /// Defaults overridden by `ASTROMAGE_*` environment variables.
    ///
    /// Unparseable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Some(seed) = read_env::<u64>("ASTROMAGE_SEED") {
            config.seed = seed;
        }
        if let Some(size) = read_env::<usize>("ASTROMAGE_HAND_SIZE") {
            config.hand_size = size.max(1);
        }
        if let Some(threshold) = read_env::<i64>("ASTROMAGE_WIN_THRESHOLD") {
            config.win_threshold = threshold;
        }
        if let Some(health) = read_env::<i64>("ASTROMAGE_START_HEALTH") {
            config.starting_stats.health = health;
        }
        if let Some(hull) = read_env::<i64>("ASTROMAGE_START_HULL") {
            config.starting_stats.hull = hull;
        }

        config
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hand size must be at least 1");
        self.hand_size = size;
        self
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: i64) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the starting stats.
    #[must_use]
    pub fn with_starting_stats(mut self, stats: ResourcePool) -> Self {
        self.starting_stats = stats;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
