use serde::{Deserialize, Serialize};

/// The three kinds of piles on a Freecell board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PileType {
    /// One of the four piles that are built up from ace to king in suit.
    Foundation,
    /// One of the tableau columns the deck is dealt into.
    Cascade,
    /// A free cell, holding at most one card.
    Open,
}

impl std::fmt::Display for PileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileType::Foundation => write!(f, "foundation"),
            PileType::Cascade => write!(f, "cascade"),
            PileType::Open => write!(f, "open"),
        }
    }
}

/// Specifies which cards to move, and where.
///
/// All indices are 0-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub source: PileType,
    pub source_pile: usize,
    /// Index of the lowest moved card within the source pile. Everything
    /// above it moves along with it.
    pub card_index: usize,
    pub dest: PileType,
    pub dest_pile: usize,
}

impl Move {
    pub fn new(
        source: PileType,
        source_pile: usize,
        card_index: usize,
        dest: PileType,
        dest_pile: usize,
    ) -> Self {
        Self {
            source,
            source_pile,
            card_index,
            dest,
            dest_pile,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} card {} -> {} {}",
            self.source, self.source_pile, self.card_index, self.dest, self.dest_pile
        )
    }
}
