use std::collections::VecDeque;
use std::io::{BufRead, Write};

use freecell::{Board, Card, FreecellError, Move, MoveRules, PileType};
use tracing::{debug, info, trace, warn};

use crate::error::TokenError;
use crate::GameConfig;

#[derive(Debug)]
pub enum GameOutcome {
    Won,
    Quit,
    CouldNotStart(FreecellError),
}

/// Where the player is in typing a move.
///
/// Indices are 1-based, as typed, and not yet checked to be positive.
#[derive(Clone, Copy, Debug)]
enum MoveState {
    Source,
    CardIndex {
        source: (PileType, i32),
    },
    Dest {
        source: (PileType, i32),
        card_index: i32,
    },
}

/// Splits the input into whitespace separated tokens, reading one line at a time.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
    // A re-usable buffer for IO.
    buf: String,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            buf: String::new(),
        }
    }

    /// Returns `None` once the input is exhausted.
    fn next_token(&mut self) -> anyhow::Result<Option<String>> {
        while self.pending.is_empty() {
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.buf.split_whitespace().map(String::from));
        }
        Ok(self.pending.pop_front())
    }
}

/// Plays one game, reading moves from `input` and writing the board and
/// messages to `output`.
///
/// Returns an error only on IO failure or when the input ends before the
/// game does, not when an illegal move is entered.
pub fn play_game<R: BufRead, W: Write>(
    config: &mut GameConfig,
    deck: &[Card],
    input: R,
    output: &mut W,
) -> anyhow::Result<GameOutcome> {
    let mut board = Board::new();
    let started = if config.shuffle {
        board.start_game_with_rng(deck, config.num_cascades, config.num_opens, &mut config.rng)
    } else {
        board.start_game(deck, config.num_cascades, config.num_opens, false)
    };
    if let Err(err) = started {
        warn!(%err, "Could not start game");
        write!(output, "Could not start game.")?;
        return Ok(GameOutcome::CouldNotStart(err));
    }

    let mut tokens = Tokens::new(input);
    loop {
        writeln!(output, "{}", board)?;
        output.flush()?;

        if !player_move(config, &mut board, &mut tokens, output)? {
            info!("Player quit");
            write!(output, "Game quit prematurely.")?;
            return Ok(GameOutcome::Quit);
        }

        if board.is_game_over() {
            info!("Game won");
            writeln!(output, "{}", board)?;
            write!(output, "Game over.")?;
            return Ok(GameOutcome::Won);
        }
    }
}

/// Reads tokens until a legal move was made. Returns `false` if the player quit.
fn player_move<R: BufRead, W: Write>(
    config: &GameConfig,
    board: &mut Board,
    tokens: &mut Tokens<R>,
    output: &mut W,
) -> anyhow::Result<bool> {
    let rules = config.game_type.rules();
    let mut state = MoveState::Source;

    loop {
        let Some(token) = tokens.next_token()? else {
            anyhow::bail!("Input ended before the game was over");
        };
        trace!(token = %token, ?state, "Read token");

        if token == "q" || token == "Q" {
            return Ok(false);
        }

        state = match state {
            MoveState::Source => match parse_pile(&token) {
                Ok(source) => MoveState::CardIndex { source },
                Err(TokenError::InvalidPileType) => {
                    writeln!(output, "Invalid PileType for source pile. Try again.")?;
                    MoveState::Source
                }
                Err(TokenError::InvalidIndex) => {
                    writeln!(output, "Index of source pile must be an integer. Try again.")?;
                    MoveState::Source
                }
            },
            MoveState::CardIndex { source } => match parse_index(&token) {
                Ok(card_index) => MoveState::Dest { source, card_index },
                Err(_) => {
                    writeln!(output, "Card index must be an integer. Try again.")?;
                    state
                }
            },
            MoveState::Dest { source, card_index } => match parse_pile(&token) {
                Ok(dest) => {
                    if attempt_move(rules, board, source, card_index, dest) {
                        return Ok(true);
                    }
                    writeln!(output, "Invalid move. Try again.")?;
                    MoveState::Source
                }
                Err(TokenError::InvalidPileType) => {
                    writeln!(output, "Invalid PileType for destination pile. Try again.")?;
                    state
                }
                Err(TokenError::InvalidIndex) => {
                    writeln!(output, "Index of destination pile must be an integer. Try again.")?;
                    state
                }
            },
        };
    }
}

/// Converts the 1-based indices typed by the player and tries the move.
fn attempt_move(
    rules: &dyn MoveRules,
    board: &mut Board,
    source: (PileType, i32),
    card_index: i32,
    dest: (PileType, i32),
) -> bool {
    let (Some(source_pile), Some(card_index), Some(dest_pile)) = (
        zero_based(source.1),
        zero_based(card_index),
        zero_based(dest.1),
    ) else {
        debug!(source = source.1, card_index, dest = dest.1, "Index below 1 entered");
        return false;
    };
    let mv = Move::new(source.0, source_pile, card_index, dest.0, dest_pile);
    match rules.make_move(board, mv) {
        Ok(()) => true,
        Err(err) => {
            debug!(%mv, "{}", err);
            let mut err_dyn = &err as &dyn std::error::Error;
            while let Some(src_err) = err_dyn.source() {
                debug!("{}", src_err);
                err_dyn = src_err;
            }
            false
        }
    }
}

/// Parses a pile such as `C3` or `o1`.
fn parse_pile(token: &str) -> Result<(PileType, i32), TokenError> {
    let mut chars = token.chars();
    let pile_type = match chars.next() {
        Some('c' | 'C') => PileType::Cascade,
        Some('f' | 'F') => PileType::Foundation,
        Some('o' | 'O') => PileType::Open,
        _ => return Err(TokenError::InvalidPileType),
    };
    Ok((pile_type, parse_index(chars.as_str())?))
}

/// Any integer is accepted here, whether it names a pile or card is up to the move rules.
fn parse_index(token: &str) -> Result<i32, TokenError> {
    token.parse().map_err(|_| TokenError::InvalidIndex)
}

fn zero_based(index: i32) -> Option<usize> {
    usize::try_from(index.checked_sub(1)?).ok()
}
