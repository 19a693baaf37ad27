//! Turn state types.

use crate::card::Card;
use crate::combatant::{CardEffect, TurnReport};

/// One side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human-controlled side.
    Player,
    /// The scripted side.
    Opponent,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Turn state.
///
/// The opponent's turn is split into stages so a presentation layer can
/// pause between them. No state changes while a stage is waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the player to select, play or draw.
    PlayerTurn,
    /// The opponent's turn-start draw is on display.
    OpponentReveal,
    /// The opponent is about to pick a card from its hand.
    OpponentSelect,
    /// The opponent is about to play its selected card.
    OpponentApply,
    /// The given side has overspent its mana and its turn is about to be
    /// resolved.
    TurnResolution(Side),
    /// The match is over. Holds the winner.
    GameOver(Side),
}

impl TurnState {
    /// Returns whether the engine advances this state on its own, without
    /// player input.
    #[must_use]
    pub const fn is_automatic(self) -> bool {
        matches!(
            self,
            Self::OpponentReveal
                | Self::OpponentSelect
                | Self::OpponentApply
                | Self::TurnResolution(_)
        )
    }
}

/// A card that was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    /// Who played it.
    pub side: Side,
    /// The card.
    pub card: Card,
    /// What it did.
    pub effect: CardEffect,
}

/// What an automatic step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// The opponent's reveal pause ended. Holds the revealed card, if the
    /// turn-start draw found one.
    Revealed(Option<Card>),
    /// The opponent picked a card to play.
    Selected(Card),
    /// The opponent had nothing to play and paid for a draw instead.
    Drew(Option<Card>),
    /// The opponent played a card.
    Played(Play),
    /// A side's turn was resolved.
    Resolved {
        /// The side whose turn ended.
        side: Side,
        /// Damage and mana carried by the resolution.
        report: TurnReport,
    },
}
