//! A playing-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that is built in a fixed canonical
//! order, shuffled in place, dealt into two parts, and saved to or loaded
//! from any [`Storage`] backend as comma-separated text.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, MemoryStore};
//!
//! let mut deck = Deck::new();
//! deck.shuffle_seeded(42);
//!
//! let (hand, rest) = deck.deal(5).unwrap();
//! assert_eq!(hand.len() + rest.len(), deckrs::DECK_SIZE);
//!
//! let mut store = MemoryStore::new();
//! rest.save(&mut store, "my_cards").unwrap();
//! assert_eq!(Deck::load(&store, "my_cards").unwrap(), rest);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![expect(
    clippy::cargo_common_metadata,
    reason = "no public repository or homepage to point at yet"
)]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod codec;
pub mod deck;
pub mod error;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod options;
pub mod storage;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use codec::DELIMITER;
pub use deck::Deck;
pub use error::{DealError, StorageError, StorageErrorKind};
#[cfg(feature = "std")]
pub use options::FileStoreOptions;
#[cfg(feature = "std")]
pub use storage::FileStore;
pub use storage::{MemoryStore, Storage};
