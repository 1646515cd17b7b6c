//! Card identifiers: suit letter then rank (e.g., "SA", "H10", "C3"), plus "JOKER".
//!
//! Ten may also be written "T" on input; output always uses "10".

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit, Trump};
use crate::errors::domain::{DomainError, ValidationKind};

pub const JOKER_ID: &str = "JOKER";

fn parse_card_err(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl Suit {
    pub const fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
        }
    }

    fn from_letter(ch: char) -> Option<Suit> {
        match ch {
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl Rank {
    pub const fn token(self) -> &'static str {
        match self {
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
            Rank::Ace => "A",
        }
    }

    fn from_token(tok: &str) -> Option<Rank> {
        let rank = match tok {
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
            "A" => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suited { suit, rank } => write!(f, "{suit}{rank}"),
            Card::Joker => f.write_str(JOKER_ID),
        }
    }
}

impl fmt::Display for Trump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit() {
            Some(suit) => write!(f, "{suit}"),
            None => f.write_str("NT"),
        }
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Suit::from_letter(ch).ok_or_else(|| parse_card_err(s)),
            _ => Err(parse_card_err(s)),
        }
    }
}

impl FromStr for Trump {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "NT" {
            return Ok(Trump::NoTrump);
        }
        s.parse::<Suit>().map(Trump::from).map_err(|_| {
            DomainError::validation(ValidationKind::ParseTrump, format!("Parse trump: {s}"))
        })
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == JOKER_ID {
            return Ok(Card::Joker);
        }
        let mut chars = s.chars();
        let suit_ch = chars.next().ok_or_else(|| parse_card_err(s))?;
        let suit = Suit::from_letter(suit_ch).ok_or_else(|| parse_card_err(s))?;
        let rank = Rank::from_token(chars.as_str()).ok_or_else(|| parse_card_err(s))?;
        Ok(Card::new(suit, rank))
    }
}

/// Non-panicking helper to parse card tokens (e.g., "SA", "C3") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
