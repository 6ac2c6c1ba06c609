//! Persistent storage for encoded decks.
//!
//! Storage backends implement [`Storage`], a location-addressed byte store.
//! [`Deck::save`] and [`Deck::load`] layer the text encoding from
//! [`codec`](crate::codec) on top. Each location holds one record; writing
//! replaces whatever was there.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use log::{debug, warn};
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::codec;
use crate::deck::Deck;
use crate::error::StorageError;

/// A location-addressed byte store.
pub trait Storage {
    /// Reads the full contents stored at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if nothing is stored there, or
    /// another [`StorageError`] if the backend fails.
    fn read(&self, location: &str) -> Result<Vec<u8>, StorageError>;

    /// Replaces the contents stored at `location` with `bytes`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend fails.
    fn write(&mut self, location: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// An in-memory [`Storage`] backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether anything is stored at `location`.
    #[must_use]
    pub fn contains(&self, location: &str) -> bool {
        self.entries.contains_key(location)
    }

    /// Removes and returns the contents stored at `location`.
    pub fn remove(&mut self, location: &str) -> Option<Vec<u8>> {
        self.entries.remove(location)
    }

    /// Returns the number of occupied locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no location is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStore {
    fn read(&self, location: &str) -> Result<Vec<u8>, StorageError> {
        self.entries
            .get(location)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                location: String::from(location),
            })
    }

    fn write(&mut self, location: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.entries.insert(String::from(location), bytes.to_vec());
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::FileStore;

#[cfg(feature = "std")]
mod file {
    use std::fs::{self, OpenOptions};
    use std::io::Write;
    use std::path::PathBuf;

    use alloc::vec::Vec;

    use super::Storage;
    use crate::error::StorageError;
    use crate::options::FileStoreOptions;

    /// A [`Storage`] backend that keeps each location in its own file.
    ///
    /// Locations are paths relative to [`FileStoreOptions::root`].
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[derive(Debug, Clone, Default)]
    pub struct FileStore {
        options: FileStoreOptions,
    }

    impl FileStore {
        /// Creates a store with the given options.
        #[must_use]
        pub const fn new(options: FileStoreOptions) -> Self {
            Self { options }
        }

        /// Returns the store's options.
        #[must_use]
        pub const fn options(&self) -> &FileStoreOptions {
            &self.options
        }

        /// Resolves `location` to a filesystem path.
        #[must_use]
        pub fn path(&self, location: &str) -> PathBuf {
            self.options.root.join(location)
        }
    }

    impl Storage for FileStore {
        fn read(&self, location: &str) -> Result<Vec<u8>, StorageError> {
            fs::read(self.path(location)).map_err(|err| StorageError::from_io(location, &err))
        }

        fn write(&mut self, location: &str, bytes: &[u8]) -> Result<(), StorageError> {
            let path = self.path(location);
            let io_err = |err: std::io::Error| StorageError::from_io(location, &err);

            if self.options.create_dirs {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(io_err)?;
                }
            }

            let mut open = OpenOptions::new();
            open.write(true).create(true).truncate(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                open.mode(self.options.mode);
            }

            let mut file = open.open(&path).map_err(io_err)?;
            file.write_all(bytes).map_err(io_err)?;
            file.flush().map_err(io_err)
        }
    }
}

impl Deck {
    /// Encodes the deck and writes it to `location`.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] reported by `store`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, MemoryStore};
    ///
    /// let mut store = MemoryStore::new();
    /// let deck = Deck::new();
    /// deck.save(&mut store, "my_cards").unwrap();
    /// assert_eq!(Deck::load(&store, "my_cards").unwrap(), deck);
    /// ```
    pub fn save<S: Storage + ?Sized>(
        &self,
        store: &mut S,
        location: &str,
    ) -> Result<(), StorageError> {
        if !codec::is_encodable(self.cards()) {
            warn!(
                "saving deck to {location} with labels containing {:?}; it will not load back unchanged",
                codec::DELIMITER
            );
        }

        store.write(location, self.encode().as_bytes())?;
        debug!("saved {} cards to {location}", self.len());
        Ok(())
    }

    /// Reads `location` and decodes its contents into a deck.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] reported by `store`, or
    /// [`StorageError::InvalidData`] if the contents are not UTF-8.
    pub fn load<S: Storage + ?Sized>(store: &S, location: &str) -> Result<Self, StorageError> {
        let bytes = store.read(location)?;
        let text = String::from_utf8(bytes).map_err(|_| StorageError::InvalidData {
            location: String::from(location),
        })?;

        let deck = codec::decode(&text);
        debug!("loaded {} cards from {location}", deck.len());
        Ok(deck)
    }
}
