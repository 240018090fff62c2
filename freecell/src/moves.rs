mod multi;
mod single;

pub use multi::*;
pub use single::*;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Board, FreecellError, Move, Transfer};

/// A set of rules deciding which moves are legal.
///
/// Checking a move never changes the board. Only once a move has been found
/// to be legal in its entirety is it applied, so a rejected move leaves the
/// board exactly as it was.
pub trait MoveRules {
    /// Checks the move against the current board and plans its effect.
    fn plan<'a>(&self, board: &'a Board, mv: Move) -> Result<Transfer<'a>, FreecellError>;

    /// Checks the move and, if it is legal, performs it.
    fn make_move(&self, board: &mut Board, mv: Move) -> Result<(), FreecellError> {
        let transfer = match self.plan(board, mv) {
            Ok(transfer) => transfer,
            Err(err) => {
                trace!(%mv, error = ?err, "Rejected move");
                return Err(err);
            }
        };
        debug!(%mv, "Moving");
        *board = transfer.execute();
        Ok(())
    }
}

/// The two variants of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    /// Only one card may be moved at a time.
    Single,
    /// Runs of cards may be moved between cascades in one go.
    #[default]
    Multi,
}

impl GameType {
    /// The rules for this variant.
    pub fn rules(self) -> &'static dyn MoveRules {
        match self {
            GameType::Single => &SingleMove,
            GameType::Multi => &MultiMove,
        }
    }
}
