use crate::{Board, Pile, PileType};

/// Renders the board as text, one line per pile.
///
/// Foundation piles come first (`F1:` to `F4:`), then the open piles
/// (`O1:`, ...), then the cascades (`C1:`, ...). Each pile lists its cards
/// from bottom to top:
///
/// ```text
/// F1: A♣, 2♣
/// F2:
/// ```
///
/// A board without a game renders as the empty string.
pub fn render_board(board: &Board) -> String {
    let mut lines = Vec::new();
    for (pile_type, prefix) in [
        (PileType::Foundation, 'F'),
        (PileType::Open, 'O'),
        (PileType::Cascade, 'C'),
    ] {
        let Ok(piles) = board.piles(pile_type) else {
            return String::new();
        };
        for (i, pile) in piles.iter().enumerate() {
            lines.push(render_pile(&format!("{}{}", prefix, i + 1), pile));
        }
    }
    lines.join("\n")
}

fn render_pile(label: &str, pile: &Pile) -> String {
    let mut result = format!("{}:", label);
    if !pile.is_empty() {
        let cards: Vec<String> = pile.iter().map(|card| card.to_string()).collect();
        result += " ";
        result += &cards.join(", ");
    }
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{card, generate_deck, GameType, Move};

    #[test]
    fn unstarted_board_is_empty() {
        assert_eq!(render_board(&Board::new()), "");
    }

    #[test]
    fn fresh_deal() {
        let mut board = Board::new();
        board.start_game(&generate_deck(), 4, 1, false).unwrap();
        let expected = "\
F1:
F2:
F3:
F4:
O1:
C1: A♣, 2♣, 3♣, 4♣, 5♣, 6♣, 7♣, 8♣, 9♣, 10♣, J♣, Q♣, K♣
C2: A♦, 2♦, 3♦, 4♦, 5♦, 6♦, 7♦, 8♦, 9♦, 10♦, J♦, Q♦, K♦
C3: A♥, 2♥, 3♥, 4♥, 5♥, 6♥, 7♥, 8♥, 9♥, 10♥, J♥, Q♥, K♥
C4: A♠, 2♠, 3♠, 4♠, 5♠, 6♠, 7♠, 8♠, 9♠, 10♠, J♠, Q♠, K♠";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn after_moves() {
        let mut board = Board::from_piles(
            [vec![card!("A♣"), card!("2♣")], vec![], vec![], vec![]],
            vec![vec![card!("5♦")], vec![], vec![], vec![card!("K♠"), card!("Q♥")]],
            vec![Some(card!("3♥")), None],
        );
        let rules = GameType::Single.rules();
        rules
            .make_move(&mut board, Move::new(PileType::Open, 0, 0, PileType::Cascade, 1))
            .unwrap();
        let expected = "\
F1: A♣, 2♣
F2:
F3:
F4:
O1:
O2:
C1: 5♦
C2: 3♥
C3:
C4: K♠, Q♥";
        assert_eq!(render_board(&board), expected);
    }
}
