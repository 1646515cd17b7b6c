//! Stable error codes for drivers embedding the engine.
//!
//! Codes are SCREAMING_SNAKE_CASE and never change once published. Add new
//! codes here; never pass ad-hoc strings as error codes.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Turn and play rules
    /// Play attempted out of turn
    WrongTurn,
    /// Card not in the acting player's hand
    CardNotInHand,
    /// Card does not follow the required suit
    IllegalSuit,
    /// Joker call outside a Joker-led trick's first play
    InvalidCallContext,
    /// Trick resolved before five plays
    TrickIncomplete,
    /// Trick already holds five plays
    TrickFull,
    /// Hand already complete
    HandOver,

    // Deck and dealing
    /// Deck has the wrong number of cards
    InvalidDeckSize,
    /// Deck has duplicates or foreign cards
    InvalidDeckContents,

    // Parsing and configuration
    /// Card identifier could not be parsed
    ParseCard,
    /// Trump identifier could not be parsed
    ParseTrump,
    /// NoTrump cannot become a suit
    InvalidTrumpConversion,
    /// Hand configuration rejected
    InvalidConfig,

    /// Engine invariant broken
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WrongTurn => "WRONG_TURN",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::IllegalSuit => "ILLEGAL_SUIT",
            Self::InvalidCallContext => "INVALID_CALL_CONTEXT",
            Self::TrickIncomplete => "TRICK_INCOMPLETE",
            Self::TrickFull => "TRICK_FULL",
            Self::HandOver => "HAND_OVER",

            Self::InvalidDeckSize => "INVALID_DECK_SIZE",
            Self::InvalidDeckContents => "INVALID_DECK_CONTENTS",

            Self::ParseCard => "PARSE_CARD",
            Self::ParseTrump => "PARSE_TRUMP",
            Self::InvalidTrumpConversion => "INVALID_TRUMP_CONVERSION",
            Self::InvalidConfig => "INVALID_CONFIG",

            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
