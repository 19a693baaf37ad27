//! Turn engine and match state management.

use alloc::vec::Vec;
use core::time::Duration;

use tracing::debug;

use crate::card::Card;
use crate::combatant::Combatant;
use crate::deck::Deck;
use crate::options::MatchOptions;
use crate::random::{RandomSource, SeededRandom};

mod actions;
mod opponent;
mod resolution;
pub mod state;

pub use state::{Play, Side, StepEvent, TurnState};

/// A match between the player and the scripted opponent.
///
/// The match owns both combatants and is the only thing that mutates them:
/// every action borrows the acting side and its opponent for exactly one
/// rule application. All randomness comes from the injected source `R`.
pub struct Match<R = SeededRandom> {
    /// Match options.
    pub options: MatchOptions,
    player: Combatant,
    opponent: Combatant,
    state: TurnState,
    /// Card drawn by the opponent at the start of its turn.
    revealed: Option<Card>,
    last_play: Option<Play>,
    /// Time spent waiting in the current automatic stage.
    stage_elapsed: Duration,
    turn: u32,
    rng: R,
}

impl Match<SeededRandom> {
    /// Creates a match with two freshly shuffled standard decks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardclash::{Match, MatchOptions, TurnState};
    ///
    /// let battle = Match::new(MatchOptions::default(), 42);
    /// assert_eq!(battle.state(), TurnState::PlayerTurn);
    /// assert_eq!(battle.player().hand().len(), 3);
    /// ```
    #[must_use]
    pub fn new(options: MatchOptions, seed: u64) -> Self {
        Self::with_rng(options, SeededRandom::new(seed))
    }
}

impl<R: RandomSource> Match<R> {
    /// Creates a match with two standard decks shuffled by `rng`.
    #[must_use]
    pub fn with_rng(options: MatchOptions, mut rng: R) -> Self {
        let player_deck = Deck::new(&mut rng);
        let opponent_deck = Deck::new(&mut rng);
        Self::with_decks(options, player_deck, opponent_deck, rng)
    }

    /// Creates a match from prepared decks. The decks are used in their
    /// current order.
    ///
    /// Both sides draw their opening hands and the player moves first.
    #[must_use]
    pub fn with_decks(options: MatchOptions, player_deck: Deck, opponent_deck: Deck, rng: R) -> Self {
        let mut player = Combatant::new(player_deck, &options);
        let mut opponent = Combatant::new(opponent_deck, &options);
        for _ in 0..options.opening_hand {
            player.draw();
            opponent.draw();
        }

        debug!(
            player_hand = player.hand().len(),
            opponent_hand = opponent.hand().len(),
            "match started"
        );

        Self {
            options,
            player,
            opponent,
            state: TurnState::PlayerTurn,
            revealed: None,
            last_play: None,
            stage_elapsed: Duration::ZERO,
            turn: 1,
            rng,
        }
    }

    /// Advances the clock by `elapsed`.
    ///
    /// Automatic stages wait [`MatchOptions::stage_delay`] before stepping;
    /// turn resolution steps on the next tick. At most one step is taken per
    /// tick. Returns the step taken, if any.
    pub fn tick(&mut self, elapsed: Duration) -> Option<StepEvent> {
        if !self.state.is_automatic() {
            return None;
        }

        self.stage_elapsed = self.stage_elapsed.saturating_add(elapsed);
        if self.stage_elapsed < self.current_stage_delay() {
            return None;
        }

        self.step().ok()
    }

    /// Runs automatic stages until the player is to act or the match is
    /// over. Returns every step taken.
    pub fn run_until_player(&mut self) -> Vec<StepEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.step() {
            events.push(event);
        }
        events
    }

    /// Returns how long the current automatic stage still waits before it
    /// steps, or `None` while the player is to act or the match is over.
    ///
    /// Turn resolution never waits.
    #[must_use]
    pub fn time_until_step(&self) -> Option<Duration> {
        self.state
            .is_automatic()
            .then(|| self.current_stage_delay().saturating_sub(self.stage_elapsed))
    }

    fn current_stage_delay(&self) -> Duration {
        match self.state {
            TurnState::OpponentReveal | TurnState::OpponentSelect | TurnState::OpponentApply => {
                self.options.stage_delay
            }
            _ => Duration::ZERO,
        }
    }

    fn enter(&mut self, state: TurnState) {
        debug!(from = ?self.state, to = ?state, "turn state changed");
        self.state = state;
        self.stage_elapsed = Duration::ZERO;
    }

    /// Returns the acting side and its opponent, mutably.
    fn sides_mut(&mut self, side: Side) -> (&mut Combatant, &mut Combatant) {
        match side {
            Side::Player => (&mut self.player, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.player),
        }
    }

    /// Returns the current turn state.
    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the winner, once the match is over.
    #[must_use]
    pub const fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::GameOver(winner) => Some(winner),
            _ => None,
        }
    }

    /// Returns whether the match is over.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver(_))
    }

    /// Returns the player's state.
    #[must_use]
    pub const fn player(&self) -> &Combatant {
        &self.player
    }

    /// Returns the opponent's state.
    #[must_use]
    pub const fn opponent(&self) -> &Combatant {
        &self.opponent
    }

    /// Returns the given side's state.
    #[must_use]
    pub const fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Returns the given side's state for scenario setup.
    ///
    /// Changes made through this handle bypass the turn rules.
    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Returns the card the opponent drew at the start of its turn, while
    /// that turn is running.
    #[must_use]
    pub const fn revealed_card(&self) -> Option<Card> {
        self.revealed
    }

    /// Returns the most recently played card.
    #[must_use]
    pub const fn last_play(&self) -> Option<Play> {
        self.last_play
    }

    /// Returns the turn number, starting at 1 with the player's first turn.
    #[must_use]
    pub const fn turn_number(&self) -> u32 {
        self.turn
    }
}
