//! Deck of cards and the deck list file format.
//!
//! A deck list is plain text with one card identifier per line, e.g.
//!
//! ```text
//! Jack of Spades
//! 4 of Clubs
//! Ace of Hearts
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use tracing::debug;

use crate::card::{Card, DECK_SIZE};
use crate::error::{DeckError, DeckListError};
#[cfg(feature = "std")]
use crate::error::DeckFileError;
use crate::random::RandomSource;

/// Parses a deck list, one card identifier per line.
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
///
/// # Errors
///
/// Returns the first line that is not a valid card identifier. Line numbers
/// are one-based and count blank lines.
pub fn parse_deck_list(text: &str) -> Result<Vec<Card>, DeckListError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, identifier)| {
            identifier
                .parse()
                .map_err(|source| DeckListError { line, source })
        })
        .collect()
}

/// An ordered pile of cards. Draws come off the front, returned cards go
/// to the back.
///
/// A custom deck may hold any multiset of cards; only a freshly reset deck
/// is guaranteed to be the 52 distinct catalog cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a standard 52-card deck and shuffles it.
    #[must_use]
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// Creates a standard 52-card deck in catalog order, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        let mut deck = Self { cards: Vec::new() };
        deck.reset();
        deck
    }

    /// Creates a deck from the given cards and shuffles it.
    #[must_use]
    pub fn from_cards<R: RandomSource>(cards: Vec<Card>, rng: &mut R) -> Self {
        let mut deck = Self { cards };
        deck.shuffle(rng);
        deck
    }

    /// Replaces the contents with the 52 catalog cards in catalog order.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);
        self.cards.extend(Card::catalog());
    }

    /// Shuffles the current contents.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Draws `n` cards from the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `n` cards
    /// remain. The deck is left unchanged in that case.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Draws a single card from the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if the deck is empty.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::InsufficientCards {
                requested: 1,
                remaining: 0,
            });
        }
        Ok(self.cards.remove(0))
    }

    /// Appends a card to the back of the deck.
    pub fn put_back(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Replaces the contents wholesale, then shuffles.
    pub fn load<R: RandomSource>(&mut self, cards: Vec<Card>, rng: &mut R) {
        debug!(cards = cards.len(), "loading deck");
        self.cards = cards;
        self.shuffle(rng);
    }

    /// Parses a deck list and loads it.
    ///
    /// # Errors
    ///
    /// Returns an error if any line is not a valid card identifier. The deck
    /// is left unchanged in that case.
    pub fn load_list<R: RandomSource>(
        &mut self,
        text: &str,
        rng: &mut R,
    ) -> Result<(), DeckListError> {
        let cards = parse_deck_list(text)?;
        self.load(cards, rng);
        Ok(())
    }

    /// Reads a deck list file and loads it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds an invalid line.
    /// The deck is left unchanged in that case.
    #[cfg(feature = "std")]
    pub fn load_file<R: RandomSource>(
        &mut self,
        path: impl AsRef<std::path::Path>,
        rng: &mut R,
    ) -> Result<(), DeckFileError> {
        let text = std::fs::read_to_string(path)?;
        self.load_list(&text, rng)?;
        Ok(())
    }

    /// Replaces the card at `index`, returning the card that was there.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if `index` is past the end.
    pub fn replace(&mut self, index: usize, card: Card) -> Result<Card, DeckError> {
        let len = self.cards.len();
        let slot = self
            .cards
            .get_mut(index)
            .ok_or(DeckError::IndexOutOfRange { index, len })?;
        Ok(core::mem::replace(slot, card))
    }

    /// Returns the position of the first copy of `card`, if any.
    #[must_use]
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// Renders the deck in the deck list format, front first.
    #[must_use]
    pub fn to_list(&self) -> String {
        let mut out = String::new();
        for card in &self.cards {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{card}");
        }
        out
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
