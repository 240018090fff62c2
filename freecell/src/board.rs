mod pile;

pub use pile::*;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::{Card, CardsSet, FreecellError, PileType, NUM_RANKS};

pub const NUM_FOUNDATION_PILES: usize = 4;
pub const MIN_CASCADE_PILES: usize = 4;
pub const MIN_OPEN_PILES: usize = 1;

/// The state of a game of Freecell.
///
/// A board starts out empty. [`Self::start_game()`] deals a deck, and from
/// then on the board is only changed by moves, see [`MoveRules`](crate::MoveRules).
//
// `piles` is `None` until the first successful deal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    piles: Option<Piles>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Piles {
    foundations: Vec<Pile>,
    cascades: Vec<Pile>,
    opens: Vec<Pile>,
}

/// A validated relocation of the top cards of one pile onto another.
///
/// Only the move rules create these, and only after all checks passed. A
/// transfer holds on to the board it was checked against, so it can only
/// ever be applied to that board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer<'a> {
    board: &'a Board,
    source: (PileType, usize),
    from: usize,
    dest: (PileType, usize),
}

impl<'a> Transfer<'a> {
    pub(crate) fn new(
        board: &'a Board,
        source: (PileType, usize),
        from: usize,
        dest: (PileType, usize),
    ) -> Self {
        Self {
            board,
            source,
            from,
            dest,
        }
    }

    /// Applies the transfer, returning the board after the move.
    pub fn execute(self) -> Board {
        let mut board = self.board.clone();
        if let Some(piles) = board.piles.as_mut() {
            let run = piles.of_type_mut(self.source.0)[self.source.1]
                .cards
                .split_off(self.from);
            piles.of_type_mut(self.dest.0)[self.dest.1].cards.extend(run);
        }
        board
    }
}

impl Piles {
    fn of_type(&self, pile_type: PileType) -> &[Pile] {
        match pile_type {
            PileType::Foundation => &self.foundations,
            PileType::Cascade => &self.cascades,
            PileType::Open => &self.opens,
        }
    }

    fn of_type_mut(&mut self, pile_type: PileType) -> &mut [Pile] {
        match pile_type {
            PileType::Foundation => &mut self.foundations,
            PileType::Cascade => &mut self.cascades,
            PileType::Open => &mut self.opens,
        }
    }
}

impl Board {
    /// Creates a board on which no game has been started yet.
    pub fn new() -> Self {
        Self { piles: None }
    }

    /// Deals `deck` in the given order.
    ///
    /// If `shuffle` is set, the deck is shuffled with the thread-local RNG
    /// first. Use [`Self::start_game_with_rng()`] for reproducible shuffles.
    ///
    /// On error, the board is left as it was.
    pub fn start_game(
        &mut self,
        deck: &[Card],
        num_cascades: usize,
        num_opens: usize,
        shuffle: bool,
    ) -> Result<(), FreecellError> {
        if shuffle {
            return self.start_game_with_rng(deck, num_cascades, num_opens, &mut rand::thread_rng());
        }
        validate_setup(deck, num_cascades, num_opens)?;
        self.deal(deck.to_vec(), num_cascades, num_opens);
        debug!(num_cascades, num_opens, shuffled = false, "Started game");
        Ok(())
    }

    /// Shuffles `deck` with `rng`, then deals it.
    pub fn start_game_with_rng<R: Rng + ?Sized>(
        &mut self,
        deck: &[Card],
        num_cascades: usize,
        num_opens: usize,
        rng: &mut R,
    ) -> Result<(), FreecellError> {
        validate_setup(deck, num_cascades, num_opens)?;
        let mut deck = deck.to_vec();
        deck.shuffle(rng);
        self.deal(deck, num_cascades, num_opens);
        debug!(num_cascades, num_opens, shuffled = true, "Started game");
        Ok(())
    }

    // Card i goes to cascade i mod num_cascades.
    fn deal(&mut self, deck: Vec<Card>, num_cascades: usize, num_opens: usize) {
        let mut cascades = vec![Pile::new(); num_cascades];
        for (i, card) in deck.into_iter().enumerate() {
            cascades[i % num_cascades].cards.push(card);
        }
        self.piles = Some(Piles {
            foundations: vec![Pile::new(); NUM_FOUNDATION_PILES],
            cascades,
            opens: vec![Pile::new(); num_opens],
        });
    }

    pub fn has_started(&self) -> bool {
        self.piles.is_some()
    }

    /// All piles of the given type.
    pub fn piles(&self, pile_type: PileType) -> Result<&[Pile], FreecellError> {
        self.piles
            .as_ref()
            .map(|piles| piles.of_type(pile_type))
            .ok_or(FreecellError::NotStarted)
    }

    /// A single pile.
    ///
    /// Every lookup of a pile goes through this function, so it is the one
    /// place that checks that the game started and the index exists.
    pub fn pile(&self, pile_type: PileType, index: usize) -> Result<&Pile, FreecellError> {
        let piles = self.piles(pile_type)?;
        piles.get(index).ok_or(FreecellError::IndexOutOfRange {
            pile_type,
            index,
            len: piles.len(),
        })
    }

    pub fn num_foundation_piles(&self) -> Result<usize, FreecellError> {
        self.piles(PileType::Foundation).map(<[Pile]>::len)
    }

    pub fn num_cascade_piles(&self) -> Result<usize, FreecellError> {
        self.piles(PileType::Cascade).map(<[Pile]>::len)
    }

    pub fn num_open_piles(&self) -> Result<usize, FreecellError> {
        self.piles(PileType::Open).map(<[Pile]>::len)
    }

    /// The number of cards in a pile.
    pub fn pile_len(&self, pile_type: PileType, index: usize) -> Result<usize, FreecellError> {
        self.pile(pile_type, index).map(|pile| pile.len())
    }

    /// The card at `card_index` in a pile, where 0 is the bottom card.
    pub fn card_at(
        &self,
        pile_type: PileType,
        pile_index: usize,
        card_index: usize,
    ) -> Result<Card, FreecellError> {
        let pile = self.pile(pile_type, pile_index)?;
        pile.get(card_index)
            .copied()
            .ok_or(FreecellError::IndexOutOfRange {
                pile_type,
                index: card_index,
                len: pile.len(),
            })
    }

    /// The card in an open pile, or `None` if the pile is empty.
    pub fn open_card_at(&self, pile_index: usize) -> Result<Option<Card>, FreecellError> {
        self.pile(PileType::Open, pile_index).map(Pile::top)
    }

    /// Counts the empty piles of a type, not counting the piles in `excluded`.
    pub fn num_empty_piles(
        &self,
        pile_type: PileType,
        excluded: &[usize],
    ) -> Result<usize, FreecellError> {
        Ok(self
            .piles(pile_type)?
            .iter()
            .enumerate()
            .filter(|(i, pile)| pile.is_empty() && !excluded.contains(i))
            .count())
    }

    /// Has every card reached the foundations?
    pub fn is_game_over(&self) -> bool {
        self.piles.as_ref().is_some_and(|piles| {
            piles
                .foundations
                .iter()
                .all(|pile| pile.len() == NUM_RANKS)
        })
    }
}

#[cfg(test)]
impl Board {
    /// All cards currently on the board.
    pub(crate) fn cards(&self) -> CardsSet {
        match &self.piles {
            Some(piles) => [&piles.foundations, &piles.cascades, &piles.opens]
                .into_iter()
                .flatten()
                .flat_map(|pile| pile.iter().copied())
                .collect(),
            None => CardsSet::new(),
        }
    }

    /// Builds an arbitrary position, without checking that it could arise in a game.
    pub(crate) fn from_piles(
        foundations: [Vec<Card>; NUM_FOUNDATION_PILES],
        cascades: Vec<Vec<Card>>,
        opens: Vec<Option<Card>>,
    ) -> Self {
        let to_pile = |cards| Pile { cards };
        Self {
            piles: Some(Piles {
                foundations: foundations.into_iter().map(to_pile).collect(),
                cascades: cascades.into_iter().map(to_pile).collect(),
                opens: opens
                    .into_iter()
                    .map(|card| to_pile(card.into_iter().collect()))
                    .collect(),
            }),
        }
    }
}

fn validate_setup(deck: &[Card], num_cascades: usize, num_opens: usize) -> Result<(), FreecellError> {
    if num_cascades < MIN_CASCADE_PILES || num_opens < MIN_OPEN_PILES {
        return Err(FreecellError::InvalidLayout {
            num_cascades,
            num_opens,
        });
    }
    CardsSet::from_deck(deck)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arbitrary::ShuffledDeck;
    use crate::{card, generate_deck, DeckError, FULL_DECK_SET};

    fn total_cards(board: &Board) -> usize {
        [PileType::Foundation, PileType::Cascade, PileType::Open]
            .into_iter()
            .map(|pile_type| {
                board
                    .piles(pile_type)
                    .unwrap()
                    .iter()
                    .map(|pile| pile.len())
                    .sum::<usize>()
            })
            .sum()
    }

    quickcheck! {
        fn deal_keeps_all_cards(deck: ShuffledDeck, num_cascades: u8, num_opens: u8) -> TestResult {
            let (num_cascades, num_opens) = (num_cascades as usize % 12, num_opens as usize % 6);
            if num_cascades < 4 || num_opens < 1 {
                return TestResult::discard();
            }
            let mut board = Board::new();
            board.start_game(&deck.0, num_cascades, num_opens, false).unwrap();
            TestResult::from_bool(
                total_cards(&board) == 52
                    && board.cards() == FULL_DECK_SET
                    && board.num_cascade_piles() == Ok(num_cascades)
                    && board.num_open_piles() == Ok(num_opens)
                    && board.num_foundation_piles() == Ok(4)
            )
        }
    }

    #[test]
    fn queries_before_start() {
        let board = Board::new();
        assert!(!board.has_started());
        assert_eq!(board.num_cascade_piles(), Err(FreecellError::NotStarted));
        assert_eq!(board.num_open_piles(), Err(FreecellError::NotStarted));
        assert_eq!(
            board.pile_len(PileType::Foundation, 0),
            Err(FreecellError::NotStarted)
        );
        assert_eq!(
            board.card_at(PileType::Cascade, 0, 0),
            Err(FreecellError::NotStarted)
        );
        assert_eq!(board.open_card_at(0), Err(FreecellError::NotStarted));
        assert!(!board.is_game_over());
    }

    #[test]
    fn invalid_layouts() {
        let mut board = Board::new();
        for (num_cascades, num_opens) in [(3, 4), (8, 0), (0, 0)] {
            assert_eq!(
                board.start_game(&generate_deck(), num_cascades, num_opens, false),
                Err(FreecellError::InvalidLayout {
                    num_cascades,
                    num_opens
                })
            );
        }
        assert!(!board.has_started());
        assert!(board.start_game(&generate_deck(), 4, 1, false).is_ok());
    }

    #[test]
    fn invalid_decks() {
        let mut board = Board::new();
        let mut deck = generate_deck();

        deck.push(card!("A♣"));
        assert_eq!(
            board.start_game(&deck, 8, 4, false),
            Err(FreecellError::InvalidDeck(DeckError::WrongSize { len: 53 }))
        );

        deck.truncate(51);
        assert_eq!(
            board.start_game(&deck, 8, 4, false),
            Err(FreecellError::InvalidDeck(DeckError::WrongSize { len: 51 }))
        );

        // Missing K♠, but A♣ twice
        deck.push(card!("A♣"));
        assert_eq!(
            board.start_game(&deck, 8, 4, true),
            Err(FreecellError::InvalidDeck(DeckError::DuplicateCard {
                card: card!("A♣")
            }))
        );

        assert_eq!(
            board.start_game(&[], 8, 4, false),
            Err(FreecellError::InvalidDeck(DeckError::WrongSize { len: 0 }))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn failed_restart_keeps_game() {
        let mut board = Board::new();
        board.start_game(&generate_deck(), 4, 4, false).unwrap();
        let before = board.clone();
        assert!(board.start_game(&generate_deck(), 2, 4, false).is_err());
        assert!(board.start_game(&generate_deck()[1..], 4, 4, false).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn round_robin_deal() {
        let deck = generate_deck();
        let mut board = Board::new();
        board.start_game(&deck, 4, 4, false).unwrap();

        // Cascade 1 gets cards 1, 5, ..., 49 of the deck
        assert_eq!(board.pile_len(PileType::Cascade, 0), Ok(13));
        assert_eq!(board.card_at(PileType::Cascade, 0, 0), Ok(deck[0]));
        assert_eq!(board.card_at(PileType::Cascade, 0, 12), Ok(deck[48]));
        assert_eq!(board.card_at(PileType::Cascade, 3, 12), Ok(deck[51]));
        for i in 0..4 {
            assert_eq!(board.pile_len(PileType::Foundation, i), Ok(0));
            assert_eq!(board.open_card_at(i), Ok(None));
        }

        board.start_game(&deck, 8, 1, false).unwrap();
        let lens: Vec<usize> = board
            .piles(PileType::Cascade)
            .unwrap()
            .iter()
            .map(|pile| pile.len())
            .collect();
        assert_eq!(lens, [7, 7, 7, 7, 6, 6, 6, 6]);
        assert_eq!(board.card_at(PileType::Cascade, 1, 1), Ok(deck[9]));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut board_1 = Board::new();
        let mut board_2 = Board::new();
        board_1
            .start_game_with_rng(&generate_deck(), 8, 4, &mut StdRng::seed_from_u64(3))
            .unwrap();
        board_2
            .start_game_with_rng(&generate_deck(), 8, 4, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(board_1, board_2);
        assert_eq!(board_1.cards(), FULL_DECK_SET);

        let mut unshuffled = Board::new();
        unshuffled.start_game(&generate_deck(), 8, 4, false).unwrap();
        assert_ne!(board_1, unshuffled);
    }

    #[test]
    fn out_of_range_queries() {
        let mut board = Board::new();
        board.start_game(&generate_deck(), 8, 4, false).unwrap();
        assert_eq!(
            board.pile_len(PileType::Foundation, 4),
            Err(FreecellError::IndexOutOfRange {
                pile_type: PileType::Foundation,
                index: 4,
                len: 4
            })
        );
        assert_eq!(
            board.pile_len(PileType::Cascade, 8),
            Err(FreecellError::IndexOutOfRange {
                pile_type: PileType::Cascade,
                index: 8,
                len: 8
            })
        );
        assert_eq!(
            board.open_card_at(4),
            Err(FreecellError::IndexOutOfRange {
                pile_type: PileType::Open,
                index: 4,
                len: 4
            })
        );
        assert_eq!(
            board.card_at(PileType::Cascade, 0, 7),
            Err(FreecellError::IndexOutOfRange {
                pile_type: PileType::Cascade,
                index: 7,
                len: 7
            })
        );
        assert_eq!(
            board.card_at(PileType::Foundation, 0, 0),
            Err(FreecellError::IndexOutOfRange {
                pile_type: PileType::Foundation,
                index: 0,
                len: 0
            })
        );
    }

    #[test]
    fn game_over_needs_all_foundations() {
        let mut board = Board::new();
        board.start_game(&generate_deck(), 4, 4, false).unwrap();
        assert!(!board.is_game_over());

        // With the canonical order and four cascades, cascade i is the whole
        // suit i from ace (bottom) to king (top).
        for i in 0..4 {
            let piles = board.piles.as_mut().unwrap();
            let suit: Vec<Card> = std::mem::take(&mut piles.cascades[i].cards);
            piles.foundations[i].cards = suit;
            assert_eq!(board.is_game_over(), i == 3);
        }
        assert_eq!(board.cards(), FULL_DECK_SET);
    }
}
