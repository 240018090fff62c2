/// Error type for a single token typed by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenError {
    InvalidPileType,
    InvalidIndex,
}

impl std::error::Error for TokenError {}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::InvalidPileType => write!(f, "Expected C, F or O followed by a number"),
            TokenError::InvalidIndex => write!(f, "Expected an integer"),
        }
    }
}
