//! CLI deck example.
//!
//! Usage: `cargo run --example cli_deck -- [hand_size] [file]`

use std::process::ExitCode;

use deckrs::{Deck, FileStore, FileStoreOptions};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let hand_size = match args.next().map(|arg| arg.parse::<usize>()) {
        None => 5,
        Some(Ok(size)) => size,
        Some(Err(err)) => {
            eprintln!("Invalid hand size: {err}");
            return ExitCode::FAILURE;
        }
    };
    let location = args.next().unwrap_or_else(|| String::from("my_cards"));

    let mut deck = Deck::new();
    deck.shuffle();

    let (hand, rest) = match deck.deal(hand_size) {
        Ok(parts) => parts,
        Err(err) => {
            eprintln!("Deal error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Hand:");
    print!("{hand}");
    println!("Remaining deck:");
    print!("{rest}");

    let mut store = FileStore::new(FileStoreOptions::default());
    if let Err(err) = rest.save(&mut store, &location) {
        eprintln!("Save error: {err}");
        return ExitCode::FAILURE;
    }

    match Deck::load(&store, &location) {
        Ok(loaded) if loaded == rest => {
            println!("Saved and reloaded {} cards from {location}", loaded.len());
            ExitCode::SUCCESS
        }
        Ok(_) => {
            eprintln!("Reloaded deck from {location} does not match");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Load error: {err}");
            ExitCode::FAILURE
        }
    }
}
