use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{generate_deck, Card, Move, PileType, Rank, Suit};

/// A permutation of the full deck.
#[derive(Clone, Debug)]
pub struct ShuffledDeck(pub Vec<Card>);

impl Arbitrary for ShuffledDeck {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        let mut deck = generate_deck();
        deck.shuffle(&mut rng);
        ShuffledDeck(deck)
    }
}

/// A move that usually refers to existing piles.
///
/// The card index is given relative to the top of the source pile, since
/// the pile sizes are only known once the move is played.
#[derive(Clone, Copy, Debug)]
pub struct MoveInput {
    pub source: PileType,
    pub source_pile: usize,
    pub cards_below_top: usize,
    pub dest: PileType,
    pub dest_pile: usize,
}

impl MoveInput {
    pub fn to_move(self, source_len: usize) -> Move {
        Move {
            source: self.source,
            source_pile: self.source_pile,
            card_index: source_len.saturating_sub(1 + self.cards_below_top),
            dest: self.dest,
            dest_pile: self.dest_pile,
        }
    }
}

impl Arbitrary for MoveInput {
    fn arbitrary(g: &mut Gen) -> Self {
        // Runs are more interesting between cascades
        let cards_below_top = if bool::arbitrary(g) {
            0
        } else {
            usize::arbitrary(g) % 6
        };
        MoveInput {
            source: PileType::arbitrary(g),
            source_pile: usize::arbitrary(g) % 9,
            cards_below_top,
            dest: PileType::arbitrary(g),
            dest_pile: usize::arbitrary(g) % 9,
        }
    }
}

impl Arbitrary for PileType {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[
            PileType::Foundation,
            PileType::Cascade,
            PileType::Cascade,
            PileType::Open,
        ])
        .unwrap()
    }
}

impl Arbitrary for Suit {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade])
            .unwrap()
    }
}

impl Arbitrary for Rank {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ])
        .unwrap()
    }
}

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            rank: Rank::arbitrary(g),
            suit: Suit::arbitrary(g),
        }
    }
}
