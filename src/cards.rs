// Card catalog: ranks, suits, and the 52 two-character card codes.
//
// A card code is rank + suit, e.g. "As" or "Td". Ranks are uppercase,
// suits lowercase; the backend is case-sensitive about both.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

/// Card rank, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
    Eight,
    Seven,
    Six,
    Five,
    Four,
    Three,
    Two,
}

/// All 13 ranks in display order (A high).
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
    Rank::Nine,
    Rank::Eight,
    Rank::Seven,
    Rank::Six,
    Rank::Five,
    Rank::Four,
    Rank::Three,
    Rank::Two,
];

impl Rank {
    /// The single-character code used on the wire ("T" for ten, never "10").
    pub fn code(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::King => 'K',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::Ten => 'T',
            Rank::Nine => '9',
            Rank::Eight => '8',
            Rank::Seven => '7',
            Rank::Six => '6',
            Rank::Five => '5',
            Rank::Four => '4',
            Rank::Three => '3',
            Rank::Two => '2',
        }
    }

    fn from_code(c: char) -> Option<Rank> {
        RANKS.iter().copied().find(|r| r.code() == c)
    }
}

// ---------------------------------------------------------------------------
// Suit
// ---------------------------------------------------------------------------

/// Card suit. Wire codes are lowercase s/h/d/c.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

/// All 4 suits in display order.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

impl Suit {
    /// The single lowercase character used on the wire.
    pub fn code(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    /// Unicode suit symbol for display.
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }

    /// Full suit name for the picker's row headers.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }

    /// Hearts and diamonds render red; spades and clubs white.
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    fn from_code(c: char) -> Option<Suit> {
        SUITS.iter().copied().find(|s| s.code() == c)
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// One of the 52 distinct cards. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Iterate the full 52-card catalog, suit-major (all spades, then
    /// hearts, ...), ranks A high to 2 within each suit. Matches the
    /// picker's grid layout.
    pub fn all() -> impl Iterator<Item = Card> {
        SUITS
            .iter()
            .flat_map(|&suit| RANKS.iter().map(move |&rank| Card { rank, suit }))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card code `{input}` (expected rank A,K,Q,J,T,9..2 + suit s,h,d,c)")]
pub struct ParseCardError {
    pub input: String,
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCardError { input: s.to_string() });
        };
        let rank = Rank::from_code(rank_ch).ok_or_else(|| ParseCardError {
            input: s.to_string(),
        })?;
        let suit = Suit::from_code(suit_ch).ok_or_else(|| ParseCardError {
            input: s.to_string(),
        })?;
        Ok(Card { rank, suit })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
