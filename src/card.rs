//! Card types and the canonical suit and rank vocabularies.

use alloc::string::String;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Returns the suit's name as used in card labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
}

impl Rank {
    /// Returns the rank's name as used in card labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Suits in canonical deck order (outer iteration).
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];

/// Ranks in canonical deck order (inner iteration).
pub const RANKS: [Rank; 4] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four];

/// Number of cards in a freshly built deck.
pub const DECK_SIZE: usize = SUITS.len() * RANKS.len();

/// A playing card.
///
/// A card is identified only by its label, e.g. `"Ace of Spades"`. Two cards
/// are equal when their labels are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(String);

impl Card {
    /// Creates the card `"<rank> of <suit>"`.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self(alloc::format!("{rank} of {suit}"))
    }

    /// Wraps an arbitrary label.
    ///
    /// Note: This function does not validate the label. Labels containing
    /// [`DELIMITER`](crate::codec::DELIMITER) are accepted but will not
    /// survive an encode/decode round-trip.
    #[must_use]
    pub fn from_label(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the card's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }

    /// Consumes the card and returns its label.
    #[must_use]
    pub fn into_label(self) -> String {
        self.0
    }
}

impl AsRef<str> for Card {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
