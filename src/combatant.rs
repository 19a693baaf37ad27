//! One side's battle state and the card effect rules.

use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::{ActionError, CardParseError};
use crate::options::MatchOptions;

/// What a played card did.
///
/// Every suit has two effects, picked by the parity of the rank value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEffect {
    /// Hearts: the actor gained this much life.
    Heal(i32),
    /// Odd Clubs: the opponent gained this much poison.
    Poison(i32),
    /// Even Clubs: the actor's poison dropped from `before` to `after`.
    Cleanse {
        /// Poison before the card.
        before: i32,
        /// Poison after the card.
        after: i32,
    },
    /// Odd Diamonds: the actor gained this much shield.
    Shield(i32),
    /// Even Diamonds: the opponent's shield was broken and the actor's own
    /// shield was readied as pending damage.
    ShieldBash {
        /// Shield removed from the opponent.
        broken: i32,
        /// Pending damage readied.
        pending: i32,
    },
    /// Spades: this much damage is pending until the end of the turn.
    Strike(i32),
}

/// Damage dealt by an end-of-turn resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Life the defender lost to poison.
    pub poison_damage: i32,
    /// Life the defender lost to pending damage after shield.
    pub strike_damage: i32,
    /// Mana handed to the defender for its next turn, if the actor overspent.
    pub mana_carried: Option<i32>,
}

/// The numeric part of a combatant's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Life. Zero or below means defeat.
    pub life: i32,
    /// Shield absorbing pending damage.
    pub shield: i32,
    /// Poison ticking each time the other side ends a turn.
    pub poison: i32,
    /// Mana left this turn.
    pub mana: i32,
    /// Damage waiting for the end of the turn.
    pub pending_damage: i32,
}

/// One side's live battle state.
#[derive(Debug, Clone)]
pub struct Combatant {
    life: i32,
    shield: i32,
    poison: i32,
    mana: i32,
    pending_damage: i32,
    hand: Vec<Card>,
    hand_limit: usize,
    selected: Option<Card>,
    deck: Deck,
}

impl Combatant {
    /// Creates a combatant with starting life and mana from `options` and
    /// an empty hand.
    #[must_use]
    pub fn new(deck: Deck, options: &MatchOptions) -> Self {
        Self {
            life: options.starting_life,
            shield: 0,
            poison: 0,
            mana: options.starting_mana,
            pending_damage: 0,
            hand: Vec::new(),
            hand_limit: options.hand_limit,
            selected: None,
            deck,
        }
    }

    /// Returns current life. Zero or below means this side has lost.
    #[must_use]
    pub const fn life(&self) -> i32 {
        self.life
    }

    /// Returns current shield.
    #[must_use]
    pub const fn shield(&self) -> i32 {
        self.shield
    }

    /// Returns current poison.
    #[must_use]
    pub const fn poison(&self) -> i32 {
        self.poison
    }

    /// Returns current mana. Below zero means the turn is over.
    #[must_use]
    pub const fn mana(&self) -> i32 {
        self.mana
    }

    /// Returns damage waiting for the end of the turn.
    #[must_use]
    pub const fn pending_damage(&self) -> i32 {
        self.pending_damage
    }

    /// Returns all numeric stats at once.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        Stats {
            life: self.life,
            shield: self.shield,
            poison: self.poison,
            mana: self.mana,
            pending_damage: self.pending_damage,
        }
    }

    /// Overwrites the numeric stats, e.g. to set up a scenario. Negative
    /// shield or poison is raised to zero.
    pub const fn set_stats(&mut self, stats: Stats) {
        self.life = stats.life;
        self.shield = if stats.shield < 0 { 0 } else { stats.shield };
        self.poison = if stats.poison < 0 { 0 } else { stats.poison };
        self.mana = stats.mana;
        self.pending_damage = stats.pending_damage;
    }

    /// Returns whether this side has lost.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.life <= 0
    }

    /// Returns whether this side has no card left to draw or play.
    #[must_use]
    pub fn is_out_of_cards(&self) -> bool {
        self.deck.is_empty() && self.hand.is_empty()
    }

    /// Returns the hand, oldest card first.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the selected card, which is always in the hand.
    #[must_use]
    pub const fn selected_card(&self) -> Option<Card> {
        self.selected
    }

    /// Returns this side's deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns this side's deck for editing.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Selects a card from the hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotInHand`] if the card is not held.
    pub fn select(&mut self, card: Card) -> Result<(), ActionError> {
        if !self.hand.contains(&card) {
            return Err(ActionError::NotInHand);
        }
        self.selected = Some(card);
        Ok(())
    }

    /// Selects the card in the given hand slot and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandSlotOutOfRange`] if the slot is empty.
    pub fn select_slot(&mut self, slot: usize) -> Result<Card, ActionError> {
        let card = *self
            .hand
            .get(slot)
            .ok_or(ActionError::HandSlotOutOfRange(slot))?;
        self.selected = Some(card);
        Ok(card)
    }

    /// Clears the selection.
    pub const fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Draws one card from the deck into the hand.
    ///
    /// If the hand goes past its limit the oldest card is discarded. Returns
    /// `None` if the deck is empty or the drawn card was discarded at once,
    /// which only happens with a hand limit of zero.
    pub fn draw(&mut self) -> Option<Card> {
        let card = match self.deck.draw_one() {
            Ok(card) => card,
            Err(err) => {
                warn!(%err, "draw failed");
                return None;
            }
        };

        self.hand.push(card);
        if self.hand.len() > self.hand_limit {
            let excess = self.hand.len() - self.hand_limit;
            for discarded in self.hand.drain(..excess) {
                debug!(card = %discarded, "hand full, discarding oldest card");
            }
            self.forget_selection_if_gone();
        }

        // The new card is the last one to go.
        (!self.hand.is_empty()).then_some(card)
    }

    /// Pays `cost` mana and draws one card. The mana is spent even if the
    /// deck is empty.
    pub fn buy_draw(&mut self, cost: i32) -> Option<Card> {
        self.mana = self.mana.saturating_sub(cost);
        self.draw()
    }

    /// Removes the selected card from the hand and applies it against
    /// `opponent`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoSelection`] if nothing is selected. Nothing
    /// changes in that case.
    pub fn play_selected(&mut self, opponent: &mut Self) -> Result<(Card, CardEffect), ActionError> {
        let card = self.selected.ok_or(ActionError::NoSelection)?;
        let index = self
            .hand
            .iter()
            .position(|&held| held == card)
            .ok_or(ActionError::NotInHand)?;

        self.hand.remove(index);
        self.selected = None;

        Ok((card, self.apply_card(card, opponent)))
    }

    /// Applies a card's effect. The card does not have to be in the hand.
    pub fn apply_card(&mut self, card: Card, opponent: &mut Self) -> CardEffect {
        let effect = self.apply_value(card.value(), card.suit, opponent);
        debug!(%card, ?effect, mana = self.mana, "card applied");
        effect
    }

    /// Parses a card identifier and applies it.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier does not parse. Nothing changes in
    /// that case, not even mana.
    pub fn apply_card_str(
        &mut self,
        identifier: &str,
        opponent: &mut Self,
    ) -> Result<CardEffect, CardParseError> {
        let card: Card = identifier.parse()?;
        Ok(self.apply_card(card, opponent))
    }

    /// Applies an effect of the given rank value and suit.
    ///
    /// The value is paid from mana first, then the suit and the value's
    /// parity pick the effect. Shield and poison never drop below zero.
    /// Card values are `2..=14`; other values are accepted and the
    /// arithmetic saturates at the `i32` bounds.
    pub fn apply_value(&mut self, value: i32, suit: Suit, opponent: &mut Self) -> CardEffect {
        self.mana = self.mana.saturating_sub(value);

        let odd = value % 2 != 0;
        match suit {
            Suit::Hearts => {
                self.life = self.life.saturating_add(value);
                CardEffect::Heal(value)
            }
            Suit::Clubs if odd => {
                opponent.poison = opponent.poison.saturating_add(value).max(0);
                CardEffect::Poison(value)
            }
            Suit::Clubs => {
                let before = self.poison;
                self.poison = self.poison.saturating_sub(value.saturating_sub(1)).max(0);
                CardEffect::Cleanse {
                    before,
                    after: self.poison,
                }
            }
            Suit::Diamonds if odd => {
                let gained = value.saturating_mul(2);
                self.shield = self.shield.saturating_add(gained).max(0);
                CardEffect::Shield(gained)
            }
            Suit::Diamonds => {
                let before = opponent.shield;
                opponent.shield = opponent.shield.saturating_sub(value).max(0);
                self.pending_damage = self.shield;
                CardEffect::ShieldBash {
                    broken: before - opponent.shield,
                    pending: self.pending_damage,
                }
            }
            Suit::Spades => {
                self.pending_damage = value;
                CardEffect::Strike(value)
            }
        }
    }

    /// Resolves the end of this side's turn against `opponent`.
    ///
    /// The order is fixed: poison ticks on the opponent, pending damage hits
    /// the opponent through its shield, the opponent's shield decays, this
    /// side's poison decays, overspent mana carries over to the opponent and
    /// pending damage is cleared.
    pub fn end_turn(&mut self, opponent: &mut Self, options: &MatchOptions) -> TurnReport {
        let poison_damage = opponent.poison;
        opponent.life = opponent.life.saturating_sub(poison_damage);

        let strike_damage = self.pending_damage.saturating_sub(opponent.shield).max(0);
        opponent.life = opponent.life.saturating_sub(strike_damage);

        opponent.shield = opponent.shield.saturating_sub(options.shield_decay).max(0);
        self.poison = self.poison.saturating_sub(options.poison_decay).max(0);

        let mana_carried = (self.mana < 0).then(|| self.mana.saturating_abs());
        if let Some(mana) = mana_carried {
            opponent.mana = mana;
        }

        self.pending_damage = 0;

        TurnReport {
            poison_damage,
            strike_damage,
            mana_carried,
        }
    }

    fn forget_selection_if_gone(&mut self) {
        if self.selected.is_some_and(|card| !self.hand.contains(&card)) {
            self.selected = None;
        }
    }
}
