use tracing::debug;

use crate::error::ActionError;
use crate::random::RandomSource;

use super::{Match, Play, Side, StepEvent, TurnState};

impl<R: RandomSource> Match<R> {
    /// Advances one automatic stage immediately, ignoring the stage delay.
    ///
    /// The opponent's turn runs reveal, then select and apply repeatedly
    /// until its mana is overspent, then resolution.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the player is to act or the
    /// match is over.
    pub fn step(&mut self) -> Result<StepEvent, ActionError> {
        match self.state {
            TurnState::OpponentReveal => {
                self.enter(TurnState::OpponentSelect);
                Ok(StepEvent::Revealed(self.revealed))
            }
            TurnState::OpponentSelect => Ok(self.opponent_select()),
            TurnState::OpponentApply => self.opponent_apply(),
            TurnState::TurnResolution(side) => Ok(self.resolve_turn(side)),
            TurnState::PlayerTurn | TurnState::GameOver(_) => Err(ActionError::InvalidState),
        }
    }

    /// Picks a card uniformly at random from the opponent's hand. With an
    /// empty hand the opponent pays for a draw instead.
    fn opponent_select(&mut self) -> StepEvent {
        let held = self.opponent.hand().len();
        if let Some(slot) = self.rng.choose(held) {
            // `choose` only returns in-range slots.
            if let Ok(card) = self.opponent.select_slot(slot) {
                debug!(%card, "opponent selected a card");
                self.enter(TurnState::OpponentApply);
                return StepEvent::Selected(card);
            }
        }

        let card = self.opponent.buy_draw(self.options.draw_cost.max(1));
        debug!(card = ?card, mana = self.opponent.mana(), "opponent hand empty, bought a draw");
        if self.opponent.mana() < 0 {
            self.end_turn_if_overspent(Side::Opponent);
        } else {
            self.enter(TurnState::OpponentSelect);
        }
        StepEvent::Drew(card)
    }

    fn opponent_apply(&mut self) -> Result<StepEvent, ActionError> {
        let (card, effect) = match self.opponent.play_selected(&mut self.player) {
            Ok(played) => played,
            Err(err) => {
                self.enter(TurnState::OpponentSelect);
                return Err(err);
            }
        };
        let play = Play {
            side: Side::Opponent,
            card,
            effect,
        };
        self.last_play = Some(play);

        if self.opponent.mana() < 0 {
            self.end_turn_if_overspent(Side::Opponent);
        } else {
            self.enter(TurnState::OpponentSelect);
        }
        Ok(StepEvent::Played(play))
    }
}
