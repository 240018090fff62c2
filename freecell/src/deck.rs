use crate::{Card, CARDS_PER_DECK};

/// All 52 cards in canonical order.
///
/// Ranks ascend from ace to king, and within each rank the suits come in the
/// order ♣, ♦, ♥, ♠, so the deck starts with `A♣ A♦ A♥ A♠ 2♣`.
pub fn generate_deck() -> Vec<Card> {
    (0..CARDS_PER_DECK as u8).map(Card::from_index).collect()
}
