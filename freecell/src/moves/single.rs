use crate::{
    Board, Card, FreecellError, IllegalMove, Move, MoveRules, Pile, PileType, Rank, Transfer,
};

/// The basic rules: exactly one card, the top card of its pile, is moved.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleMove;

impl MoveRules for SingleMove {
    fn plan<'a>(&self, board: &'a Board, mv: Move) -> Result<Transfer<'a>, FreecellError> {
        let source = board.pile(mv.source, mv.source_pile)?;
        let dest = board.pile(mv.dest, mv.dest_pile)?;

        let card = source.top().ok_or(IllegalMove::EmptySource)?;
        if mv.card_index + 1 != source.len() {
            return Err(IllegalMove::NotTopCard {
                card_index: mv.card_index,
                pile_len: source.len(),
            }
            .into());
        }
        if (mv.source, mv.source_pile) == (mv.dest, mv.dest_pile) {
            return Err(IllegalMove::SamePile.into());
        }
        check_placement(card, mv.dest, dest)?;

        Ok(Transfer::new(
            board,
            (mv.source, mv.source_pile),
            mv.card_index,
            (mv.dest, mv.dest_pile),
        ))
    }
}

/// Can `card` be put on top of `dest`, which is a pile of type `dest_type`?
pub(crate) fn check_placement(card: Card, dest_type: PileType, dest: &Pile) -> Result<(), IllegalMove> {
    match (dest_type, dest.top()) {
        (PileType::Open, None) => Ok(()),
        (PileType::Open, Some(existing_card)) => {
            Err(IllegalMove::OpenPileOccupied { existing_card })
        }
        (PileType::Foundation, None) => {
            if card.rank == Rank::Ace {
                Ok(())
            } else {
                Err(IllegalMove::FoundationNeedsAce { card })
            }
        }
        (PileType::Foundation, Some(existing_card)) => {
            if card.can_be_built_on(existing_card) {
                Ok(())
            } else {
                Err(IllegalMove::IncompatibleFoundation {
                    card,
                    existing_card,
                })
            }
        }
        (PileType::Cascade, None) => Ok(()),
        (PileType::Cascade, Some(existing_card)) => {
            if card.can_be_stacked_on(existing_card) {
                Ok(())
            } else {
                Err(IllegalMove::IncompatibleCascade {
                    card,
                    existing_card,
                })
            }
        }
    }
}
