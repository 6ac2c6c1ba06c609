//! The deck: construction, shuffling, and dealing.

use alloc::vec::Vec;
use core::fmt;

use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::error::DealError;

/// An ordered sequence of cards.
///
/// A deck is built whole, either by [`Deck::new`] or by decoding stored text.
/// It can be reordered but never grows. Order is significant and is preserved
/// exactly by [`Deck::encode`] and [`Deck::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck in canonical order.
    ///
    /// Suits form the outer loop and ranks the inner one, so the rank varies
    /// fastest: `Ace of Spades`, `Two of Spades`, ..., `Four of Clubs`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.cards()[0].label(), "Ace of Spades");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterates over the cards in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Shuffles the deck in place using `rng`.
    ///
    /// Runs a Fisher-Yates pass: walking down from the last position, each
    /// card is swapped with one drawn uniformly from the positions not yet
    /// fixed, itself included. Every ordering is equally likely. Decks of
    /// zero or one card are left as they are.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut a = Deck::new();
    /// let mut b = Deck::new();
    /// a.shuffle_with(&mut ChaCha8Rng::seed_from_u64(7));
    /// b.shuffle_with(&mut ChaCha8Rng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // Draws are explicit rather than `SliceRandom::shuffle` so that each
        // swap index is `rng.random_range(0..=i)` and nothing else.
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        trace!("shuffled deck of {} cards", self.cards.len());
    }

    /// Shuffles the deck with a generator seeded from `seed`.
    ///
    /// The same seed always produces the same ordering.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffles the deck with a generator seeded from the current time.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle(&mut self) {
        self.shuffle_seeded(time_seed());
    }

    /// Splits the deck after the first `hand_size` cards.
    ///
    /// The first deck holds cards `[0, hand_size)` and the second holds the
    /// rest, both in their original order. Appending the second to the first
    /// gives back the original deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::HandSizeOutOfRange`] if `hand_size` exceeds the
    /// number of cards. The error carries the deck back unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let (hand, rest) = Deck::new().deal(5).unwrap();
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(rest.len(), 11);
    /// ```
    pub fn deal(mut self, hand_size: usize) -> Result<(Self, Self), DealError> {
        if hand_size > self.cards.len() {
            return Err(DealError::HandSizeOutOfRange {
                hand_size,
                len: self.cards.len(),
                deck: self,
            });
        }

        let rest = self.cards.split_off(hand_size);
        Ok((self, Self { cards: rest }))
    }
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits.
#[cfg(feature = "std")]
fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Lists the cards one per line as `<index> <label>`.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            writeln!(f, "{i} {card}")?;
        }
        Ok(())
    }
}
