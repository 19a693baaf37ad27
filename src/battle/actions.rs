use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::random::RandomSource;

use super::{Match, Play, Side, TurnState};

impl<R: RandomSource> Match<R> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == TurnState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Ends the acting side's turn once its mana is overspent.
    pub(super) fn end_turn_if_overspent(&mut self, side: Side) {
        if self.combatant(side).mana() < 0 {
            self.enter(TurnState::TurnResolution(side));
        }
    }

    /// Player action: select the card in the given hand slot.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the slot is empty.
    pub fn select(&mut self, slot: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;
        self.player.select_slot(slot)
    }

    /// Player action: select a specific card from the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the card is not in
    /// the player's hand.
    pub fn select_card(&mut self, card: Card) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.player.select(card)
    }

    /// Player action: play the selected card against the opponent.
    ///
    /// If the card's cost drives the player's mana below zero, the turn
    /// moves to [`TurnState::TurnResolution`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the player's mana is
    /// already below zero, or no card is selected. Nothing changes in that
    /// case.
    pub fn play(&mut self) -> Result<Play, ActionError> {
        self.ensure_player_turn()?;
        if self.player.mana() < 0 {
            return Err(ActionError::InvalidState);
        }

        let (card, effect) = self.player.play_selected(&mut self.opponent)?;
        let play = Play {
            side: Side::Player,
            card,
            effect,
        };
        self.last_play = Some(play);

        self.end_turn_if_overspent(Side::Player);
        Ok(play)
    }

    /// Player action: pay [`MatchOptions::draw_cost`](crate::MatchOptions::draw_cost)
    /// mana and draw a card.
    ///
    /// The mana is paid even if the deck is empty, so drawing always moves
    /// the turn toward its end. Returns the drawn card, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn draw(&mut self) -> Result<Option<Card>, ActionError> {
        self.ensure_player_turn()?;

        let card = self.player.buy_draw(self.options.draw_cost.max(1));
        debug!(card = ?card, mana = self.player.mana(), "player bought a draw");

        self.end_turn_if_overspent(Side::Player);
        Ok(card)
    }
}
