//! Text encoding of decks.
//!
//! A deck is stored as its card labels joined by [`DELIMITER`], with no
//! trailing delimiter, brackets, or escaping:
//!
//! ```text
//! Ace of Spades,Two of Spades,Three of Spades
//! ```
//!
//! Because nothing is escaped, a deck only survives an encode/decode
//! round-trip when none of its labels contain the delimiter. The canonical
//! vocabularies never do; [`is_encodable`] checks arbitrary decks.

use alloc::string::String;
use core::convert::Infallible;
use core::str::FromStr;

use crate::card::Card;
use crate::deck::Deck;

/// Separator placed between card labels.
pub const DELIMITER: char = ',';

/// Joins the labels of `cards` with [`DELIMITER`].
#[must_use]
pub fn encode(cards: &[Card]) -> String {
    let mut text = String::with_capacity(cards.iter().map(|card| card.label().len() + 1).sum());

    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            text.push(DELIMITER);
        }
        text.push_str(card.label());
    }

    text
}

/// Splits `text` on [`DELIMITER`] into a deck.
///
/// Every substring becomes a card verbatim, without checking that it names a
/// real card. Text without a delimiter yields a single-card deck. The empty
/// string yields the empty deck, so that an empty deck round-trips.
#[must_use]
pub fn decode(text: &str) -> Deck {
    if text.is_empty() {
        return Deck::default();
    }

    text.split(DELIMITER).map(Card::from_label).collect()
}

/// Returns whether no label in `cards` contains [`DELIMITER`].
#[must_use]
pub fn is_encodable(cards: &[Card]) -> bool {
    cards.iter().all(|card| !card.label().contains(DELIMITER))
}

impl Deck {
    /// Encodes the deck as delimited text. See [`encode`].
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let (hand, _) = Deck::new().deal(2).unwrap();
    /// assert_eq!(hand.encode(), "Ace of Spades,Two of Spades");
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        encode(self.cards())
    }

    /// Decodes delimited text into a deck. See [`decode`].
    #[must_use]
    pub fn decode(text: &str) -> Self {
        decode(text)
    }
}

impl FromStr for Deck {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(decode(s))
    }
}
