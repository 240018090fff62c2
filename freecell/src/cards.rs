use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FreecellError;

/// A playing card in a standard 52-card game.
///
/// Cards are plain values: two cards are equal iff rank and suit are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

/// The suit of a [card](Card).
///
/// The declaration order is the order in which suits appear within one rank
/// of the [canonical deck](crate::generate_deck).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "♣")]
    Club,
    #[serde(rename = "♦")]
    Diamond,
    #[serde(rename = "♥")]
    Heart,
    #[serde(rename = "♠")]
    Spade,
}

/// The rank of a [card](Card). Aces are low.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace = 1,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// The clubs and spades.
    Black,
    /// The diamonds and hearts.
    Red,
}

pub const NUM_SUITS: usize = 4;
pub const NUM_RANKS: usize = 13;
pub const CARDS_PER_DECK: usize = NUM_SUITS * NUM_RANKS;

const SUITS: [Suit; NUM_SUITS] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

const RANKS: [Rank; NUM_RANKS] = [
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
];

impl Suit {
    pub fn color(self) -> Color {
        match self {
            Suit::Club | Suit::Spade => Color::Black,
            Suit::Diamond | Suit::Heart => Color::Red,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

impl Rank {
    /// The numeric value, from 1 (ace) to 13 (king).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// The rank as it is printed on the card.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = FreecellError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        match rank {
            1..=13 => Ok(RANKS[rank as usize - 1]),
            _ => Err(FreecellError::RankOutOfRange { rank }),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl Card {
    /// Creates a card from a numeric rank in `1..=13`.
    pub fn new(rank: u8, suit: Suit) -> Result<Self, FreecellError> {
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit,
        })
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// Can this card be stacked on `other` in a cascade?
    ///
    /// That is the case if the colors alternate and this card is exactly one
    /// rank lower.
    pub fn can_be_stacked_on(&self, other: Card) -> bool {
        self.color() != other.color() && self.rank.number() + 1 == other.rank.number()
    }

    /// Can this card be placed on `other` in a foundation pile?
    pub fn can_be_built_on(&self, other: Card) -> bool {
        self.suit == other.suit && self.rank.number() == other.rank.number() + 1
    }

    /// The position of this card in the canonical deck, in `0..52`.
    pub(crate) fn to_index(self) -> u8 {
        (self.rank.number() - 1) * NUM_SUITS as u8 + self.suit as u8
    }

    pub(crate) fn from_index(index: u8) -> Self {
        debug_assert!((index as usize) < CARDS_PER_DECK);
        Self {
            rank: RANKS[index as usize / NUM_SUITS],
            suit: SUITS[index as usize % NUM_SUITS],
        }
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    LessThanTwoChars,
    TooManyChars,
    InvalidRank,
    InvalidSuit,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::LessThanTwoChars => write!(f, "A card needs a rank and a suit"),
            CardFromStrErr::TooManyChars => write!(f, "Unexpected characters after the suit"),
            CardFromStrErr::InvalidRank => write!(f, "Unknown rank"),
            CardFromStrErr::InvalidSuit => write!(f, "Unknown suit"),
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit_char = s.chars().last().ok_or(CardFromStrErr::LessThanTwoChars)?;
        let rank_str = &s[..s.len() - suit_char.len_utf8()];
        if rank_str.is_empty() {
            return Err(CardFromStrErr::LessThanTwoChars);
        }
        let rank = match rank_str {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ if rank_str.chars().count() > 2 => return Err(CardFromStrErr::TooManyChars),
            _ => return Err(CardFromStrErr::InvalidRank),
        };
        let suit = match suit_char {
            '♣' => Suit::Club,
            '♦' => Suit::Diamond,
            '♥' => Suit::Heart,
            '♠' => Suit::Spade,
            _ => return Err(CardFromStrErr::InvalidSuit),
        };
        Ok(Card { rank, suit })
    }
}

/// Shorthand for creating cards from a string.
///
/// The rank comes first (`A`, `2`-`10`, `J`, `Q`, `K`; 10 may also be
/// written `T`), followed by the [suit](Suit) as a unicode character
/// (♣, ♦, ♥, or ♠).
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use freecell::{card, Card, Rank, Suit};
/// assert_eq!(
///     card!("10♥"),
///     Card { rank: Rank::Ten, suit: Suit::Heart }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;
