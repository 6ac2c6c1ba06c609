//! File storage configuration options.

use std::path::PathBuf;

/// Permission bits applied to newly created files on Unix.
pub const DEFAULT_FILE_MODE: u32 = 0o666;

/// Configuration options for a [`FileStore`](crate::storage::FileStore).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::FileStoreOptions;
///
/// let options = FileStoreOptions::default()
///     .with_root("/tmp/decks")
///     .with_create_dirs(true)
///     .with_mode(0o600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStoreOptions {
    /// Directory that locations are resolved against.
    pub root: PathBuf,
    /// Whether missing parent directories are created on write.
    pub create_dirs: bool,
    /// Permission bits for newly created files. Ignored outside Unix.
    pub mode: u32,
}

impl Default for FileStoreOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            create_dirs: false,
            mode: DEFAULT_FILE_MODE,
        }
    }
}

impl FileStoreOptions {
    /// Sets the root directory.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::FileStoreOptions;
    /// use std::path::Path;
    ///
    /// let options = FileStoreOptions::default().with_root("saves");
    /// assert_eq!(options.root, Path::new("saves"));
    /// ```
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets whether missing parent directories are created on write.
    #[must_use]
    pub const fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Sets the permission bits for newly created files.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::FileStoreOptions;
    ///
    /// let options = FileStoreOptions::default().with_mode(0o600);
    /// assert_eq!(options.mode, 0o600);
    /// ```
    #[must_use]
    pub const fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }
}
