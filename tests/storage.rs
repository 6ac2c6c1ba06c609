//! Save and load tests against the in-memory and file backends.

use deckrs::{
    DECK_SIZE, Deck, FileStore, FileStoreOptions, MemoryStore, Storage, StorageError,
    StorageErrorKind,
};

/// Backend whose every operation is refused.
struct LockedStore;

impl Storage for LockedStore {
    fn read(&self, location: &str) -> Result<Vec<u8>, StorageError> {
        Err(StorageError::PermissionDenied {
            location: location.to_owned(),
        })
    }

    fn write(&mut self, location: &str, _bytes: &[u8]) -> Result<(), StorageError> {
        Err(StorageError::PermissionDenied {
            location: location.to_owned(),
        })
    }
}

fn file_store(dir: &tempfile::TempDir) -> FileStore {
    FileStore::new(FileStoreOptions::default().with_root(dir.path()))
}

#[test]
fn memory_store_round_trip() {
    let mut store = MemoryStore::new();
    let mut deck = Deck::new();
    deck.shuffle_seeded(9);

    deck.save(&mut store, "_decktesting").unwrap();
    assert!(store.contains("_decktesting"));
    assert_eq!(store.len(), 1);

    let loaded = Deck::load(&store, "_decktesting").unwrap();
    assert_eq!(loaded, deck);
    assert_eq!(loaded.len(), DECK_SIZE);
}

#[test]
fn memory_store_holds_one_record_per_location() {
    let mut store = MemoryStore::new();
    Deck::new().save(&mut store, "cards").unwrap();

    let (hand, _) = Deck::new().deal(2).unwrap();
    hand.save(&mut store, "cards").unwrap();

    assert_eq!(store.read("cards").unwrap(), b"Ace of Spades,Two of Spades");
    assert_eq!(Deck::load(&store, "cards").unwrap(), hand);

    assert!(store.remove("cards").is_some());
    assert!(store.is_empty());
}

#[test]
fn load_missing_location_is_not_found() {
    let store = MemoryStore::new();
    let err = Deck::load(&store, "nowhere").unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::NotFound);
    assert_eq!(err.location(), "nowhere");
}

#[test]
fn load_rejects_non_utf8() {
    let mut store = MemoryStore::new();
    store.write("binary", &[0xff, 0xfe, b',']).unwrap();

    let err = Deck::load(&store, "binary").unwrap_err();
    assert_eq!(
        err,
        StorageError::InvalidData {
            location: "binary".to_owned()
        }
    );
}

#[test]
fn backend_errors_are_returned() {
    let mut store = LockedStore;
    let err = Deck::new().save(&mut store, "vault").unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::PermissionDenied);
    assert_eq!(err.to_string(), "permission denied for vault");

    let err = Deck::load(&store, "vault").unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::PermissionDenied);
}

#[test]
fn loads_text_written_elsewhere() {
    let mut store = MemoryStore::new();
    store.write("hand", b"Joker,Ace of Spades").unwrap();

    let deck = Deck::load(&store, "hand").unwrap();
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.cards()[0].label(), "Joker");
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = file_store(&dir);
    let mut deck = Deck::new();
    deck.shuffle_seeded(21);

    deck.save(&mut store, "_decktesting").unwrap();
    let on_disk = std::fs::read_to_string(dir.path().join("_decktesting")).unwrap();
    assert_eq!(on_disk, deck.encode());

    assert_eq!(Deck::load(&store, "_decktesting").unwrap(), deck);
}

#[test]
fn file_store_overwrites_previous_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = file_store(&dir);

    Deck::new().save(&mut store, "cards").unwrap();
    let (hand, _) = Deck::new().deal(1).unwrap();
    hand.save(&mut store, "cards").unwrap();

    assert_eq!(Deck::load(&store, "cards").unwrap(), hand);
}

#[test]
fn file_store_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    let err = Deck::load(&store, "missing").unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::NotFound);
}

#[test]
fn file_store_creates_parent_dirs_when_enabled() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = file_store(&dir);
    let err = Deck::new().save(&mut store, "saves/a/cards").unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::NotFound);

    let mut store = FileStore::new(
        FileStoreOptions::default()
            .with_root(dir.path())
            .with_create_dirs(true),
    );
    assert!(store.options().create_dirs);
    assert_eq!(store.options().root, dir.path());
    Deck::new().save(&mut store, "saves/a/cards").unwrap();
    assert!(store.path("saves/a/cards").is_file());
    assert_eq!(Deck::load(&store, "saves/a/cards").unwrap(), Deck::new());
}

#[cfg(unix)]
#[test]
fn file_store_applies_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(
        FileStoreOptions::default()
            .with_root(dir.path())
            .with_mode(0o600),
    );
    Deck::new().save(&mut store, "private").unwrap();

    let mode = std::fs::metadata(store.path("private"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn options_builder_sets_fields() {
    let options = FileStoreOptions::default()
        .with_root("decks")
        .with_create_dirs(true)
        .with_mode(0o640);

    assert_eq!(options.root, std::path::Path::new("decks"));
    assert!(options.create_dirs);
    assert_eq!(options.mode, 0o640);

    let defaults = FileStoreOptions::default();
    assert_eq!(defaults.root, std::path::Path::new("."));
    assert!(!defaults.create_dirs);
    assert_eq!(defaults.mode, 0o666);
}

#[test]
fn io_errors_map_to_kinds() {
    use std::io::{Error, ErrorKind};

    let err = StorageError::from_io("x", &Error::from(ErrorKind::NotFound));
    assert_eq!(err.kind(), StorageErrorKind::NotFound);

    let err = StorageError::from_io("x", &Error::from(ErrorKind::PermissionDenied));
    assert_eq!(err.kind(), StorageErrorKind::PermissionDenied);

    let err = StorageError::from_io("x", &Error::other("disk on fire"));
    assert_eq!(err.kind(), StorageErrorKind::Other);
    assert_eq!(err.to_string(), "storage error at x: disk on fire");
}
