//! Card types and point values.

use core::fmt;

use serde::{Serialize, Serializer};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Single-letter suit code (`S`, `H`, `D`, `C`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when scoring a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Blackjack point value of this card: 11 for an Ace, 10 for face cards,
    /// otherwise the numeric rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        card_value(self.rank)
    }

    /// Single-letter rank code (`A`, `2`..`9`, `T`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn rank_letter(self) -> char {
        match self.rank {
            1 => 'A',
            2..=9 => (b'0' + self.rank) as char,
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            _ => '?',
        }
    }
}

/// Formats the card as its two-character code, e.g. `AS` or `TD`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_letter(), self.suit.letter())
    }
}

/// Serializes as the two-character code, e.g. `AS`, which doubles as an
/// asset key for card artwork.
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Blackjack point value for a rank: 11 for an Ace, 10 for `T`/`J`/`Q`/`K`,
/// otherwise the rank itself.
#[must_use]
pub const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
