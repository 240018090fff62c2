use super::single::check_placement;
use crate::{Board, FreecellError, IllegalMove, Move, MoveRules, PileType, SingleMove, Transfer};

/// Rules that allow moving a whole run of cards from one cascade to another.
///
/// A run can be moved when it could also be moved one card at a time, using
/// the empty open piles and empty cascades as temporary storage. Everything
/// that is not a run of at least two cards between cascades falls back to
/// [`SingleMove`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MultiMove;

impl MoveRules for MultiMove {
    fn plan<'a>(&self, board: &'a Board, mv: Move) -> Result<Transfer<'a>, FreecellError> {
        if mv.source != PileType::Cascade || mv.dest != PileType::Cascade {
            return SingleMove.plan(board, mv);
        }
        let source = board.pile(PileType::Cascade, mv.source_pile)?;
        let dest = board.pile(PileType::Cascade, mv.dest_pile)?;

        let num_cards = source.len().saturating_sub(mv.card_index);
        if num_cards < 2 {
            return SingleMove.plan(board, mv);
        }
        if mv.source_pile == mv.dest_pile {
            return Err(IllegalMove::SamePile.into());
        }

        let capacity = max_run_len(board, mv.source_pile, mv.dest_pile)?;
        if num_cards > capacity {
            return Err(IllegalMove::TooManyCards {
                num_cards,
                capacity,
            }
            .into());
        }

        // Walk the run from the top card down
        let run = source.run_from(mv.card_index);
        for pair in run.windows(2).rev() {
            let (lower, upper) = (pair[0], pair[1]);
            if !upper.can_be_stacked_on(lower) {
                return Err(IllegalMove::BrokenRun { upper, lower }.into());
            }
        }

        check_placement(run[0], PileType::Cascade, dest)?;

        Ok(Transfer::new(
            board,
            (PileType::Cascade, mv.source_pile),
            mv.card_index,
            (PileType::Cascade, mv.dest_pile),
        ))
    }
}

/// The longest run that can be moved from one cascade to another.
///
/// Each empty open pile can hold one card while the run is moved, and each
/// empty cascade doubles the number of cards that can be moved. Neither the
/// source nor the destination cascade count as empty cascades, even if the
/// destination is empty.
pub fn max_run_len(board: &Board, source_pile: usize, dest_pile: usize) -> Result<usize, FreecellError> {
    let empty_opens = board.num_empty_piles(PileType::Open, &[])?;
    let empty_cascades = board.num_empty_piles(PileType::Cascade, &[source_pile, dest_pile])?;
    let factor = 2usize.saturating_pow(empty_cascades.try_into().unwrap_or(u32::MAX));
    Ok((empty_opens + 1).saturating_mul(factor))
}
