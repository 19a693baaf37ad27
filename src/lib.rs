//! A two-player card battle engine with optional `no_std` support.
//!
//! Each side draws standard playing cards from its own deck and plays them
//! for effects picked by suit and by the parity of the rank value: Hearts
//! heal, Clubs poison or cleanse, Diamonds shield or bash, Spades strike.
//! A card's rank value is also its mana cost; overspending mana ends the
//! turn, and the overspend becomes the other side's mana for its turn.
//!
//! The [`Match`] type runs the whole flow: player actions, the scripted
//! opponent's staged turn, end-of-turn resolution and the terminal check.
//!
//! # Example
//!
//! ```
//! use cardclash::{Match, MatchOptions, TurnState};
//!
//! let mut battle = Match::new(MatchOptions::default(), 42);
//! battle.select(0).unwrap();
//! battle.play().unwrap();
//!
//! // Every card costs at least two mana, so the first play ends the turn.
//! assert!(matches!(battle.state(), TurnState::TurnResolution(_)));
//! battle.run_until_player();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod asset;
pub mod battle;
pub mod card;
pub mod combatant;
pub mod deck;
pub mod error;
pub mod options;
pub mod random;

// Re-export main types
pub use asset::{AssetKey, CardImages};
pub use battle::{Match, Play, Side, StepEvent, TurnState};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use combatant::{CardEffect, Combatant, Stats, TurnReport};
pub use deck::{Deck, parse_deck_list};
#[cfg(feature = "std")]
pub use error::DeckFileError;
pub use error::{ActionError, CardParseError, DeckError, DeckListError};
pub use options::MatchOptions;
pub use random::{RandomSource, SeededRandom};
