//! Headless AstroMage simulator.
//!
//! Plays computer-vs-computer matches (greedy as player 1, random as
//! player 2) and reports the results. Useful for eyeballing balance and for
//! watching the event stream with `RUST_LOG=astromage=debug`.
//!
//! # Environment
//!
//! - `ASTROMAGE_GAMES`: matches to play (default 10)
//! - `ASTROMAGE_MAX_ROUNDS`: rounds before a match is abandoned (default 500)
//! - everything read by `GameConfig::from_env`

use astromage::{
    standard_catalog, EngineError, Game, GameConfig, GameEvent, GreedyStrategy, OpponentStrategy,
    RandomStrategy, Side, SideMap,
};

const DEFAULT_GAMES: u32 = 10;
const DEFAULT_MAX_ROUNDS: u32 = 500;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::from_env();
    let games = env_or("ASTROMAGE_GAMES", DEFAULT_GAMES);
    let max_rounds = env_or("ASTROMAGE_MAX_ROUNDS", DEFAULT_MAX_ROUNDS);

    tracing::info!(
        seed = config.seed,
        hand_size = config.hand_size,
        threshold = config.win_threshold,
        games,
        "starting simulation"
    );

    let mut game = Game::new(config.clone(), standard_catalog())?;
    let mut strategies = SideMap::<Box<dyn OpponentStrategy>>::from_pair(
        Box::new(GreedyStrategy),
        Box::new(RandomStrategy::new(config.seed.wrapping_add(1))),
    );
    let mut wins: SideMap<u32> = SideMap::with_value(0);
    let mut abandoned = 0u32;

    for match_no in 1..=games {
        game.new_game()?;

        let mut winner = None;
        while winner.is_none() && game.state().round < max_rounds {
            let side = game.state().turn;
            winner = game.opponent_turn(strategies[side].as_mut())?.1;

            for event in game.drain_events() {
                match &event {
                    GameEvent::GameWon { .. } => tracing::debug!(?event),
                    _ => tracing::trace!(?event),
                }
            }
        }

        match winner {
            Some(side) => {
                wins[side] += 1;
                tracing::info!(
                    match_no,
                    %side,
                    reason = ?game.state().win_reason,
                    rounds = game.state().round,
                    "match finished"
                );
            }
            None => {
                abandoned += 1;
                tracing::warn!(match_no, max_rounds, "match abandoned");
            }
        }
    }

    for side in Side::ALL {
        println!("{side} ({}): {} wins", strategies[side].name(), wins[side]);
    }
    println!("abandoned: {abandoned}");
    Ok(())
}
