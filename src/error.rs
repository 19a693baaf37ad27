//! Error types for card parsing, deck handling and match actions.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when parsing a card identifier or asset key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// The identifier is not of the form `"<Rank> of <Suit>"`.
    #[error("card identifier must be of the form \"<rank> of <suit>\"")]
    MissingSeparator,
    /// The rank label is not one of 2-10, Jack, Queen, King, Ace.
    #[error("unknown rank: {0:?}")]
    UnknownRank(String),
    /// The suit name is not one of Hearts, Diamonds, Clubs, Spades.
    #[error("unknown suit: {0:?}")]
    UnknownSuit(String),
    /// The asset key is not of the form `card_<suit>_<code>`.
    #[error("invalid asset key: {0:?}")]
    InvalidAssetKey(String),
}

/// Errors that can occur during deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards left to satisfy the draw. The deck is unchanged.
    #[error("insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// The deck position does not exist.
    #[error("deck position {index} out of range for {len} cards")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of cards in the deck.
        len: usize,
    },
}

/// A deck list line that does not hold a valid card identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card on line {line}")]
pub struct DeckListError {
    /// One-based line number.
    pub line: usize,
    /// The underlying parse error.
    #[source]
    pub source: CardParseError,
}

/// Errors that can occur while reading a deck file.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum DeckFileError {
    /// The file could not be read.
    #[error("failed to read deck file")]
    Io(#[from] std::io::Error),
    /// The file contents are not a valid deck list.
    #[error(transparent)]
    List(#[from] DeckListError),
}

/// Errors that can occur during match actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not allowed in the current turn state, including any
    /// action after the match is over.
    #[error("invalid turn state for this action")]
    InvalidState,
    /// No card is selected.
    #[error("no card selected")]
    NoSelection,
    /// The card is not in the acting side's hand.
    #[error("card is not in hand")]
    NotInHand,
    /// The hand slot does not hold a card.
    #[error("hand slot {0} is empty")]
    HandSlotOutOfRange(usize),
}
