//! Win detection.
//!
//! A player wins when the opponent's health is at or below zero, or when
//! any one of their own health, material, energy or ammunition stocks has
//! reached the threshold. Each of the four stocks is compared on its own;
//! which one happens to be non-zero first does not matter.

use crate::core::{Player, ResourcePool, Side, SideMap, Stat, WinReason};

/// Whether `player` has won against `opponent`.
#[must_use]
pub fn has_won(
    player: &ResourcePool,
    opponent: &ResourcePool,
    threshold: i64,
) -> Option<WinReason> {
    if opponent.health <= 0 {
        return Some(WinReason::OpponentDestroyed);
    }

    Stat::THRESHOLD_STOCKS
        .into_iter()
        .find(|&stat| player.get(stat) >= threshold)
        .map(WinReason::Threshold)
}

/// Check both sides, player one then player two.
///
/// Each side is evaluated on its own. If both qualify in the same round,
/// the later check stands, so player two wins the tie.
#[must_use]
pub fn check_win(players: &SideMap<Player>, threshold: i64) -> Option<(Side, WinReason)> {
    Side::ALL
        .into_iter()
        .filter_map(|side| {
            has_won(&players[side].stats, &players[side.other()].stats, threshold)
                .map(|reason| (side, reason))
        })
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use im::Vector;

    const START: ResourcePool = GameConfig::DEFAULT_STARTING_STATS;

    #[test]
    fn test_no_win_at_start() {
        assert_eq!(has_won(&START, &START, 50), None);
    }

    #[test]
    fn test_opponent_destroyed() {
        let opponent = ResourcePool { health: 0, ..START };
        assert_eq!(
            has_won(&START, &opponent, 50),
            Some(WinReason::OpponentDestroyed)
        );

        let opponent = ResourcePool { health: -4, ..START };
        assert_eq!(
            has_won(&START, &opponent, 50),
            Some(WinReason::OpponentDestroyed)
        );
    }

    #[test]
    fn test_each_stock_reaches_threshold() {
        for stat in Stat::THRESHOLD_STOCKS {
            let mut player = START;
            player.set(stat, 50);
            assert_eq!(
                has_won(&player, &START, 50),
                Some(WinReason::Threshold(stat)),
                "{stat}"
            );
        }
    }

    #[test]
    fn test_threshold_not_shadowed_by_earlier_stock() {
        // Health and material are non-zero but below threshold; only
        // ammunition qualifies.
        let player = ResourcePool {
            ammunition: 61,
            ..START
        };
        assert_eq!(
            has_won(&player, &START, 50),
            Some(WinReason::Threshold(Stat::Ammunition))
        );
    }

    #[test]
    fn test_hull_and_production_do_not_count() {
        let player = ResourcePool {
            hull: 80,
            energy_prod: 80,
            ..START
        };
        assert_eq!(has_won(&player, &START, 50), None);
    }

    #[test]
    fn test_player_two_wins_ties() {
        let mut players = SideMap::new(|side| Player::new(side.identity(), Vector::new(), START));
        players[Side::PlayerOne].stats.energy = 50;
        players[Side::PlayerTwo].stats.material = 50;

        assert_eq!(
            check_win(&players, 50),
            Some((Side::PlayerTwo, WinReason::Threshold(Stat::Material)))
        );
    }

    #[test]
    fn test_single_qualifier_wins() {
        let mut players = SideMap::new(|side| Player::new(side.identity(), Vector::new(), START));
        players[Side::PlayerOne].stats.energy = 50;

        assert_eq!(
            check_win(&players, 50),
            Some((Side::PlayerOne, WinReason::Threshold(Stat::Energy)))
        );

        players[Side::PlayerOne].stats.energy = 5;
        assert_eq!(check_win(&players, 50), None);
    }
}
