use crate::{Card, DeckError, CARDS_PER_DECK};

/// A compact set of [`Card`]s.
///
/// ```
/// use freecell::{card, CardsSet};
/// let mut set = CardsSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `CardsSet`.
/// set = set.insert(card!("7♥"));
/// set = set.insert(card!("7♥"));  // Inserting a second time has no effect
/// assert!(set.contains(card!("7♥")));
/// assert!(!set.contains(card!("2♥")));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CardsSet {
    // Only the low 52 bits are used.
    bits: u64,
}

/// Every card of the deck.
pub const FULL_DECK_SET: CardsSet = CardsSet {
    bits: (1u64 << CARDS_PER_DECK) - 1,
};

impl CardsSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn contains(self, card: Card) -> bool {
        (self.bits & (1u64 << card.to_index())) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, card: Card) -> Self {
        Self {
            bits: self.bits | (1u64 << card.to_index()),
        }
    }

    /// Collects a deck into a set, rejecting decks that are not exactly one
    /// copy of every card.
    pub fn from_deck(deck: &[Card]) -> Result<Self, DeckError> {
        if deck.len() != CARDS_PER_DECK {
            return Err(DeckError::WrongSize { len: deck.len() });
        }
        let mut set = Self::new();
        for &card in deck {
            if set.contains(card) {
                return Err(DeckError::DuplicateCard { card });
            }
            set = set.insert(card);
        }
        // 52 distinct cards out of 52 possible ones
        debug_assert_eq!(set, FULL_DECK_SET);
        Ok(set)
    }
}

impl FromIterator<Card> for CardsSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut bits = 0;
        for card in iter {
            bits |= 1u64 << card.to_index();
        }
        Self { bits }
    }
}
