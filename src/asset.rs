//! Mapping between cards and display asset keys.
//!
//! Asset keys name card images as `card_<suit>_<code>`, with the suit in
//! lowercase and the rank written as a two-digit number (`02`..`10`) or a
//! single letter for face cards and aces (`J`, `Q`, `K`, `A`).

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::card::{Card, Rank, Suit};
use crate::error::CardParseError;

const PREFIX: &str = "card_";

const fn rank_code(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "02",
        Rank::Three => "03",
        Rank::Four => "04",
        Rank::Five => "05",
        Rank::Six => "06",
        Rank::Seven => "07",
        Rank::Eight => "08",
        Rank::Nine => "09",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

const fn suit_code(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "hearts",
        Suit::Diamonds => "diamonds",
        Suit::Clubs => "clubs",
        Suit::Spades => "spades",
    }
}

/// The display asset key of a card.
///
/// ```
/// use cardclash::{AssetKey, Card, Rank, Suit};
///
/// let key = AssetKey::from(Card::new(Rank::Two, Suit::Clubs));
/// assert_eq!(key.to_string(), "card_clubs_02");
///
/// let back: AssetKey = "card_spades_J".parse().unwrap();
/// assert_eq!(back.card(), Card::new(Rank::Jack, Suit::Spades));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetKey(Card);

impl AssetKey {
    /// Returns the card this key names.
    #[must_use]
    pub const fn card(self) -> Card {
        self.0
    }
}

impl From<Card> for AssetKey {
    fn from(card: Card) -> Self {
        Self(card)
    }
}

impl From<AssetKey> for Card {
    fn from(key: AssetKey) -> Self {
        key.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PREFIX}{}_{}",
            suit_code(self.0.suit),
            rank_code(self.0.rank)
        )
    }
}

impl FromStr for AssetKey {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardParseError::InvalidAssetKey(s.to_string());

        let rest = s.strip_prefix(PREFIX).ok_or_else(invalid)?;
        let (suit, rank) = rest.split_once('_').ok_or_else(invalid)?;
        let suit = Suit::ALL
            .into_iter()
            .find(|&candidate| suit_code(candidate) == suit)
            .ok_or_else(invalid)?;
        let rank = Rank::ALL
            .into_iter()
            .find(|&candidate| rank_code(candidate) == rank)
            .ok_or_else(invalid)?;

        Ok(Self(Card::new(rank, suit)))
    }
}

/// Lookup from asset key to a displayable image, supplied by the
/// presentation layer. The engine never inspects the images themselves.
pub trait CardImages {
    /// The presentation layer's image handle.
    type Image;

    /// Returns the image for `key`, if one is loaded.
    fn image(&self, key: AssetKey) -> Option<&Self::Image>;

    /// Returns the image for `card`, if one is loaded.
    fn card_image(&self, card: Card) -> Option<&Self::Image> {
        self.image(AssetKey::from(card))
    }
}

#[cfg(feature = "std")]
impl<T, S: core::hash::BuildHasher> CardImages for std::collections::HashMap<AssetKey, T, S> {
    type Image = T;

    fn image(&self, key: AssetKey) -> Option<&T> {
        self.get(&key)
    }
}

impl<T> CardImages for alloc::collections::BTreeMap<AssetKey, T> {
    type Image = T;

    fn image(&self, key: AssetKey) -> Option<&T> {
        self.get(&key)
    }
}
