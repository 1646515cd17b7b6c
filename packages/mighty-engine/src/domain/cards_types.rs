//! Core card-related types: Card, Rank, Suit, Trump

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spades,
    Diamonds,
    Hearts,
    Clubs,
}

impl Suit {
    /// Canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trump {
    Spades,
    Diamonds,
    Hearts,
    Clubs,
    NoTrump,
}

impl Trump {
    pub const ALL: [Trump; 5] = [
        Trump::Spades,
        Trump::Diamonds,
        Trump::Hearts,
        Trump::Clubs,
        Trump::NoTrump,
    ];

    /// The trump suit, or `None` for NoTrump.
    pub fn suit(self) -> Option<Suit> {
        Suit::try_from(self).ok()
    }
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Spades => Trump::Spades,
            Suit::Diamonds => Trump::Diamonds,
            Suit::Hearts => Trump::Hearts,
            Suit::Clubs => Trump::Clubs,
        }
    }
}

impl TryFrom<Trump> for Suit {
    type Error = DomainError;

    fn try_from(trump: Trump) -> Result<Self, Self::Error> {
        match trump {
            Trump::Spades => Ok(Suit::Spades),
            Trump::Diamonds => Ok(Suit::Diamonds),
            Trump::Hearts => Ok(Suit::Hearts),
            Trump::Clubs => Ok(Suit::Clubs),
            Trump::NoTrump => Err(DomainError::validation(
                ValidationKind::InvalidTrumpConversion,
                "Cannot convert NoTrump to Suit",
            )),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Canonical deck order within a suit (Ace first).
    pub const DESCENDING: [Rank; 13] = [
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
}

/// A playing card. The Joker carries neither suit nor rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Suited { suit: Suit, rank: Rank },
    Joker,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card::Suited { suit, rank }
    }

    pub const fn suit(self) -> Option<Suit> {
        match self {
            Card::Suited { suit, .. } => Some(suit),
            Card::Joker => None,
        }
    }

    pub const fn rank(self) -> Option<Rank> {
        match self {
            Card::Suited { rank, .. } => Some(rank),
            Card::Joker => None,
        }
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Card::Joker)
    }

    pub fn is_suit(self, suit: Suit) -> bool {
        self.suit() == Some(suit)
    }
}

// Note: Ord on Card is only for stable sorting: suit order S<D<H<C, then rank,
// with the Joker last. Never use it for trick resolution.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Card::Joker, Card::Joker) => std::cmp::Ordering::Equal,
            (Card::Joker, _) => std::cmp::Ordering::Greater,
            (_, Card::Joker) => std::cmp::Ordering::Less,
            (
                Card::Suited { suit: sa, rank: ra },
                Card::Suited { suit: sb, rank: rb },
            ) => sa.cmp(sb).then(ra.cmp(rb)),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
