pub use board::*;
pub use cards::*;
pub use cards_set::*;
pub use deck::*;
pub use errors::*;
pub use moves::*;
pub use protocol_types::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cards;
mod cards_set;
mod deck;
mod errors;
mod moves;
mod protocol_types;
mod visualization;
