//! The turn/game state machine.
//!
//! `Game` exclusively owns both players, the match state, the card pool and
//! the RNG for the lifetime of a session. Every other component gets a
//! borrow for a single operation.
//!
//! ## Round structure
//!
//! 1. The side whose `turn` it is takes one action: `play_card(slot)`
//!    (resolve, then cycle the slot) or `discard_card(slot)`.
//! 2. `end_round()` processes that side's status effects, adds its
//!    production, flips the turn, and runs the win check for both sides.
//!
//! `take_turn` and `opponent_turn` do both steps in one call.

use im::Vector;
use tracing::{debug, info};

use super::economy::update_resources;
use super::status::status_handler;
use super::win::check_win;
use crate::cards::{CardId, CardRegistry};
use crate::core::{
    Action, ActionKind, ActionRecord, EngineError, GameConfig, GameRng, GameState, Player, Side,
    SideMap, WinReason,
};
use crate::effects::{EffectResolver, PlayOutcome, Target};
use crate::events::{GameEvent, Vitals};
use crate::opponent::{play_turn, OpponentStrategy};
use crate::zones::{self, Discarded};

/// A game session: one match at a time, restartable with `new_game`.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    catalog: CardRegistry,
    /// Session RNG; each match forks its own stream from it.
    session_rng: GameRng,
    /// RNG for the current match.
    rng: GameRng,
    state: GameState,
    players: SideMap<Player>,
    /// Action taken by the side to move in the current round.
    acted: Option<Action>,
    history: Vector<ActionRecord>,
    events: Vec<GameEvent>,
}

impl Game {
    /// Create the initial instance: players dealt, no match started.
    ///
    /// The instance starts in `Phase::NotStarted` rather than `Playing`, so
    /// a caller can show the dealt table before the first `new_game()`.
    /// Every action returns `GameNotInProgress` until then.
    ///
    /// Fails only if the catalog is empty.
    pub fn new(config: GameConfig, catalog: CardRegistry) -> Result<Self, EngineError> {
        let mut session_rng = GameRng::new(config.seed);
        let mut rng = session_rng.fork();
        let players = Self::deal_players(&config, &catalog, &mut rng)?;

        Ok(Self {
            config,
            catalog,
            session_rng,
            rng,
            state: GameState::initial(),
            players,
            acted: None,
            history: Vector::new(),
            events: Vec::new(),
        })
    }

    /// Player factory: a full hand from the pool and the configured starting stats.
    ///
    /// Deals from a fork of the match RNG, so calling it mid-match does not
    /// change which cards later refills draw.
    pub fn new_player(&mut self, side: Side) -> Result<Player, EngineError> {
        let mut rng = self.rng.fork();
        Self::make_player(&self.config, &self.catalog, &mut rng, side)
    }

    /// Start a fresh match from any phase, discarding whatever was in flight.
    pub fn new_game(&mut self) -> Result<&GameState, EngineError> {
        let mut rng = self.session_rng.fork();
        let players = Self::deal_players(&self.config, &self.catalog, &mut rng)?;

        self.rng = rng;
        self.players = players;
        self.state = GameState::new_game();
        self.acted = None;
        self.history = Vector::new();
        self.events.clear();
        self.events.push(GameEvent::GameStarted);

        info!(seed = self.rng.seed(), "new game");
        Ok(&self.state)
    }

    // === Accessors ===

    /// Match progress.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Configuration the session was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The card pool hands are drawn from.
    #[must_use]
    pub fn catalog(&self) -> &CardRegistry {
        &self.catalog
    }

    /// A player's current record.
    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side]
    }

    /// Mutable access to a player, for setting up scenarios.
    ///
    /// Changes made here bypass the rules; the win check sees them on the
    /// next `end_round` or `check_win`.
    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side]
    }

    /// Both players.
    #[must_use]
    pub fn players(&self) -> &SideMap<Player> {
        &self.players
    }

    /// Actions taken so far this match.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Whether the side to move has already acted this round.
    #[must_use]
    pub fn has_acted(&self) -> bool {
        self.acted.is_some()
    }

    /// Take all buffered events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Actions ===

    /// Play the card in `slot` for the side to move, then cycle that slot.
    ///
    /// Refused (with no state change) if the card is unaffordable.
    pub fn play_card(&mut self, slot: usize) -> Result<PlayOutcome, EngineError> {
        let side = self.ready_to_act()?;
        let opponent_side = side.other();
        zones::check_slot(&self.players[side], slot)?;

        let card = self.players[side].hand[slot].clone();
        let before = self.vitals();

        let outcome = {
            let (player, opponent) = self.players.pair_mut(side);
            EffectResolver::play_card(&card, player, opponent)?
        };

        self.events.push(GameEvent::CardPlayed {
            side,
            slot,
            card: card.id,
            name: card.name.clone(),
            resource: card.resource,
            cost: card.cost,
        });
        if let Some((target, kind)) = outcome.status_attached {
            let holder = match target {
                Target::Caster => side,
                Target::Opponent => opponent_side,
            };
            self.events.push(GameEvent::StatusAttached { side: holder, kind });
        }
        self.push_vitals_changes(before);

        self.cycle_slot(side, slot)?;
        self.record(side, Action::play(slot), card.id);
        Ok(outcome)
    }

    /// Discard the card in `slot` for the side to move. Always legal.
    pub fn discard_card(&mut self, slot: usize) -> Result<Discarded, EngineError> {
        let side = self.ready_to_act()?;
        let discarded = self.cycle_slot(side, slot)?;
        self.record(side, Action::discard(slot), discarded.discarded.id);
        Ok(discarded)
    }

    /// Perform an action descriptor for the side to move.
    pub fn act(&mut self, action: Action) -> Result<(), EngineError> {
        match action.kind {
            ActionKind::Play => self.play_card(action.index).map(|_| ()),
            ActionKind::Discard => self.discard_card(action.index).map(|_| ()),
        }
    }

    /// Close the round for the side that just acted.
    ///
    /// Runs its status effects and production, passes the turn, then checks
    /// both sides for a win. Returns the winner if the match just ended.
    pub fn end_round(&mut self) -> Result<Option<Side>, EngineError> {
        if !self.state.is_playing() {
            return Err(EngineError::GameNotInProgress);
        }
        let side = self.state.turn;
        if self.acted.is_none() {
            return Err(EngineError::NoActionTaken(side));
        }

        let before = self.vitals();
        let player = &mut self.players[side];

        for tick in status_handler(player) {
            self.events.push(GameEvent::StatusTicked { side, tick });
            if tick.expired() {
                self.events.push(GameEvent::StatusExpired { side, kind: tick.kind });
            }
        }

        update_resources(&mut player.stats);
        self.events.push(GameEvent::ResourcesProduced {
            side,
            material: player.stats.material_prod,
            energy: player.stats.energy_prod,
            ammunition: player.stats.ammunition_prod,
        });
        self.push_vitals_changes(before);

        self.acted = None;
        self.state.flip_turn();
        self.events.push(GameEvent::RoundEnded {
            side,
            next: self.state.turn,
            round: self.state.round,
        });
        debug!(round = self.state.round, next = %self.state.turn, "round ended");

        Ok(self.check_win())
    }

    /// One full round: the action, then `end_round`.
    pub fn take_turn(&mut self, action: Action) -> Result<Option<Side>, EngineError> {
        self.act(action)?;
        self.end_round()
    }

    /// Let `strategy` play a full round for the side to move.
    ///
    /// Returns the action taken and the winner, if the round ended the match.
    pub fn opponent_turn(
        &mut self,
        strategy: &mut dyn OpponentStrategy,
    ) -> Result<(Action, Option<Side>), EngineError> {
        let side = self.ready_to_act()?;
        let action = play_turn(strategy, &self.players[side]).ok_or(EngineError::EmptyHand(side))?;
        let winner = self.take_turn(action)?;
        Ok((action, winner))
    }

    /// Run the win check now. Player two wins if both sides qualify.
    ///
    /// Normally called by `end_round`; exposed for callers that changed
    /// stats through `player_mut`.
    pub fn check_win(&mut self) -> Option<Side> {
        if !self.state.is_playing() {
            return self.state.winner;
        }
        let (winner, reason) = check_win(&self.players, self.config.win_threshold)?;
        self.declare_winner(winner, reason);
        Some(winner)
    }

    // === Internals ===

    fn declare_winner(&mut self, winner: Side, reason: WinReason) {
        self.state.declare_winner(winner, reason);
        self.acted = None;
        self.events.push(GameEvent::GameWon { winner, reason });
        info!(%winner, %reason, round = self.state.round, "game won");
    }

    /// The side to move, if it may act right now.
    fn ready_to_act(&self) -> Result<Side, EngineError> {
        if !self.state.is_playing() {
            return Err(EngineError::GameNotInProgress);
        }
        let side = self.state.turn;
        if self.acted.is_some() {
            return Err(EngineError::ActionAlreadyTaken(side));
        }
        Ok(side)
    }

    fn cycle_slot(&mut self, side: Side, slot: usize) -> Result<Discarded, EngineError> {
        let discarded =
            zones::discard_card(&mut self.players[side], slot, &self.catalog, &mut self.rng)?;
        self.events.push(GameEvent::CardDiscarded {
            side,
            slot,
            discarded: discarded.discarded.id,
            drawn: discarded.drawn.id,
        });
        Ok(discarded)
    }

    fn record(&mut self, side: Side, action: Action, card: CardId) {
        self.acted = Some(action);
        self.history
            .push_back(ActionRecord::new(side, action, card, self.state.round + 1));
    }

    fn vitals(&self) -> SideMap<Vitals> {
        SideMap::new(|side| Vitals::from(&self.players[side].stats))
    }

    fn push_vitals_changes(&mut self, before: SideMap<Vitals>) {
        for side in Side::ALL {
            let after = Vitals::from(&self.players[side].stats);
            if let Some(event) = GameEvent::stats_changed(side, before[side], after) {
                self.events.push(event);
            }
        }
    }

    fn make_player(
        config: &GameConfig,
        catalog: &CardRegistry,
        rng: &mut GameRng,
        side: Side,
    ) -> Result<Player, EngineError> {
        let hand = catalog.deal(config.hand_size, rng)?;
        Ok(Player::new(side.identity(), hand, config.starting_stats))
    }

    fn deal_players(
        config: &GameConfig,
        catalog: &CardRegistry,
        rng: &mut GameRng,
    ) -> Result<SideMap<Player>, EngineError> {
        let one = Self::make_player(config, catalog, rng, Side::PlayerOne)?;
        let two = Self::make_player(config, catalog, rng, Side::PlayerTwo)?;
        Ok(SideMap::from_pair(one, two))
    }
}
