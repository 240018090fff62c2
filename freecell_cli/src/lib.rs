mod error;
mod game;
pub use error::*;
pub use game::*;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use freecell::{Card, GameType};

/// Everything needed to set up a game, apart from the deck.
pub struct GameConfig {
    /// Used for shuffling the deck.
    pub rng: rand::rngs::StdRng,
    pub game_type: GameType,
    pub num_cascades: usize,
    pub num_opens: usize,
    pub shuffle: bool,
}

/// Reads a deck from a JSON file containing a list of cards, e.g.
/// `[{"suit": "♣", "rank": "A"}, ...]`.
///
/// The deck is not validated here, that happens when the game starts.
pub fn load_deck(path: &Path) -> anyhow::Result<Vec<Card>> {
    load_json(path)
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path).with_context(|| format!("Could not open '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse '{}'", path.display()))
}
