use std::ops::Deref;

use crate::Card;

/// A single pile of cards, bottom card first.
///
/// Piles can only be changed by the [`Board`](crate::Board) itself, which
/// hands them out read-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pile {
    pub(super) cards: Vec<Card>,
}

impl Pile {
    pub(super) fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// The card that is currently accessible, if any.
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// The cards from `from` (inclusive) up to the top.
    pub fn run_from(&self, from: usize) -> &[Card] {
        &self.cards[from.min(self.cards.len())..]
    }
}

impl Deref for Pile {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}
