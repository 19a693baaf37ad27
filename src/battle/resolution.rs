use tracing::info;

use crate::random::RandomSource;

use super::{Match, Side, StepEvent, TurnState};

impl<R: RandomSource> Match<R> {
    /// Resolves the end of `side`'s turn, then either ends the match or
    /// hands the turn over.
    ///
    /// The match ends when a side's life drops to zero or below, or when
    /// both sides have emptied their decks and hands.
    pub(super) fn resolve_turn(&mut self, side: Side) -> StepEvent {
        let options = self.options;
        let (actor, defender) = self.sides_mut(side);
        let report = actor.end_turn(defender, &options);

        info!(
            ?side,
            poison_damage = report.poison_damage,
            strike_damage = report.strike_damage,
            mana_carried = ?report.mana_carried,
            actor_life = actor.life(),
            defender_life = defender.life(),
            "turn resolved"
        );

        let winner = if defender.is_defeated() {
            Some(side)
        } else if actor.is_defeated() {
            Some(side.other())
        } else if actor.is_out_of_cards() && defender.is_out_of_cards() {
            // Nothing left to play: higher life wins, ties go to the acting side.
            info!(
                actor_life = actor.life(),
                defender_life = defender.life(),
                "both sides out of cards"
            );
            Some(if defender.life() > actor.life() {
                side.other()
            } else {
                side
            })
        } else {
            None
        };

        match winner {
            Some(winner) => {
                info!(?winner, turn = self.turn, "match over");
                self.revealed = None;
                self.enter(TurnState::GameOver(winner));
            }
            None => self.begin_turn(side.other()),
        }

        StepEvent::Resolved { side, report }
    }

    /// Starts `side`'s turn with its turn-start draw.
    fn begin_turn(&mut self, side: Side) {
        self.turn += 1;
        let drawn = self.combatant_mut(side).draw();

        match side {
            Side::Player => {
                self.revealed = None;
                self.enter(TurnState::PlayerTurn);
            }
            Side::Opponent => {
                self.revealed = drawn;
                self.enter(TurnState::OpponentReveal);
            }
        }
    }
}
