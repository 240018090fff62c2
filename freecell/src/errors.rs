use crate::{Card, PileType};

/// Why a deck handed to [`Board::start_game()`](crate::Board::start_game) was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckError {
    WrongSize { len: usize },
    DuplicateCard { card: Card },
}

impl std::error::Error for DeckError {}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::WrongSize { len } => write!(f, "Deck has {} cards instead of 52", len),
            DeckError::DuplicateCard { card } => write!(f, "Deck contains {} more than once", card),
        }
    }
}

/// The rule that a rejected move violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    EmptySource,
    NotTopCard { card_index: usize, pile_len: usize },
    SamePile,
    OpenPileOccupied { existing_card: Card },
    FoundationNeedsAce { card: Card },
    IncompatibleFoundation { card: Card, existing_card: Card },
    IncompatibleCascade { card: Card, existing_card: Card },
    TooManyCards { num_cards: usize, capacity: usize },
    BrokenRun { upper: Card, lower: Card },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::EmptySource => write!(f, "The source pile is empty"),
            IllegalMove::NotTopCard { card_index, pile_len } => write!(
                f,
                "Only the top card can be moved, but card {} of a pile of {} was selected",
                card_index, pile_len
            ),
            IllegalMove::SamePile => write!(f, "Cards cannot be moved onto their own pile"),
            IllegalMove::OpenPileOccupied { existing_card } => {
                write!(f, "The open pile already holds {}", existing_card)
            }
            IllegalMove::FoundationNeedsAce { card } => {
                write!(f, "Cannot place {} on an empty foundation pile", card)
            }
            IllegalMove::IncompatibleFoundation {
                card,
                existing_card,
            } => write!(f, "Cannot place {} on {} in a foundation pile", card, existing_card),
            IllegalMove::IncompatibleCascade {
                card,
                existing_card,
            } => write!(f, "Cannot place {} on {} in a cascade pile", card, existing_card),
            IllegalMove::TooManyCards {
                num_cards,
                capacity,
            } => write!(
                f,
                "Impossible to move this many cards: {} requested, at most {} possible",
                num_cards, capacity
            ),
            IllegalMove::BrokenRun { upper, lower } => write!(
                f,
                "The cards do not form a run: {} cannot lie on {}",
                upper, lower
            ),
        }
    }
}

/// The error type for everything the [`Board`](crate::Board) and the move rules report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FreecellError {
    RankOutOfRange {
        rank: u8,
    },
    InvalidLayout {
        num_cascades: usize,
        num_opens: usize,
    },
    InvalidDeck(DeckError),
    NotStarted,
    IndexOutOfRange {
        pile_type: PileType,
        index: usize,
        len: usize,
    },
    IllegalMove(IllegalMove),
}

impl std::error::Error for FreecellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FreecellError::InvalidDeck(err) => Some(err),
            FreecellError::IllegalMove(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for FreecellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FreecellError::RankOutOfRange { rank } => {
                write!(f, "Rank {} is out of bounds [1, 13]", rank)
            }
            FreecellError::InvalidLayout {
                num_cascades,
                num_opens,
            } => write!(
                f,
                "Need at least 4 cascade piles and 1 open pile, got {} and {}",
                num_cascades, num_opens
            ),
            FreecellError::InvalidDeck(_) => write!(f, "Invalid deck"),
            FreecellError::NotStarted => write!(f, "The game has not started"),
            FreecellError::IndexOutOfRange {
                pile_type,
                index,
                len,
            } => write!(
                f,
                "Index {} is out of range for {} ({} available)",
                index, pile_type, len
            ),
            FreecellError::IllegalMove(_) => write!(f, "Illegal move"),
        }
    }
}

impl From<DeckError> for FreecellError {
    fn from(err: DeckError) -> Self {
        FreecellError::InvalidDeck(err)
    }
}

impl From<IllegalMove> for FreecellError {
    fn from(err: IllegalMove) -> Self {
        FreecellError::IllegalMove(err)
    }
}
