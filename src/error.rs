//! Error types for deck operations.

use alloc::string::String;

use thiserror::Error;

use crate::deck::Deck;

/// Errors that can occur when dealing a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    /// The hand size exceeds the number of cards in the deck.
    ///
    /// The deck is returned untouched; see [`DealError::into_deck`].
    #[error("hand size {hand_size} is out of range for a deck of {len} cards")]
    HandSizeOutOfRange {
        /// Requested hand size.
        hand_size: usize,
        /// Number of cards in the deck.
        len: usize,
        /// The deck that was passed in.
        deck: Deck,
    },
}

impl DealError {
    /// Recovers the deck that failed to be dealt.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        match self {
            Self::HandSizeOutOfRange { deck, .. } => deck,
        }
    }
}

/// Broad category of a [`StorageError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageErrorKind {
    /// Nothing is stored at the location.
    NotFound,
    /// The location cannot be accessed.
    PermissionDenied,
    /// The stored bytes are not valid text.
    InvalidData,
    /// Any other storage failure.
    Other,
}

/// Errors that can occur when reading or writing a storage location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Nothing is stored at the location.
    #[error("no data stored at {location}")]
    NotFound {
        /// Location that was accessed.
        location: String,
    },
    /// The location cannot be accessed.
    #[error("permission denied for {location}")]
    PermissionDenied {
        /// Location that was accessed.
        location: String,
    },
    /// The stored bytes are not valid UTF-8.
    #[error("data stored at {location} is not valid UTF-8")]
    InvalidData {
        /// Location that was accessed.
        location: String,
    },
    /// Any other storage failure.
    #[error("storage error at {location}: {message}")]
    Other {
        /// Location that was accessed.
        location: String,
        /// Description reported by the storage backend.
        message: String,
    },
}

impl StorageError {
    /// Returns the error's category.
    #[must_use]
    pub const fn kind(&self) -> StorageErrorKind {
        match self {
            Self::NotFound { .. } => StorageErrorKind::NotFound,
            Self::PermissionDenied { .. } => StorageErrorKind::PermissionDenied,
            Self::InvalidData { .. } => StorageErrorKind::InvalidData,
            Self::Other { .. } => StorageErrorKind::Other,
        }
    }

    /// Returns the location the failed operation targeted.
    #[must_use]
    pub fn location(&self) -> &str {
        match self {
            Self::NotFound { location }
            | Self::PermissionDenied { location }
            | Self::InvalidData { location }
            | Self::Other { location, .. } => location,
        }
    }

    /// Maps an I/O error for `location` onto a storage error.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_io(location: &str, err: &std::io::Error) -> Self {
        use alloc::string::ToString;

        let location = String::from(location);
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { location },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { location },
            std::io::ErrorKind::InvalidData => Self::InvalidData { location },
            _ => Self::Other {
                location,
                message: err.to_string(),
            },
        }
    }
}
