//! Domain-level error type returned by every engine operation.
//!
//! All failures are caller-input violations. None are transient, and the
//! engine never mutates state before every check for an operation passes.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Which rule a rejected input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Play attempted out of turn order.
    WrongTurn,
    /// Referenced card is not held by the acting player.
    CardNotInHand,
    /// Played card violates follow-suit for the active trick context.
    IllegalSuit,
    /// Joker call suit set outside its window (exactly one card, the Joker).
    InvalidCallContext,
    /// Trick resolution attempted before five plays were recorded.
    TrickIncomplete,
    /// Deal attempted on a deck of the wrong size.
    InvalidDeckSize,
    /// Deck ordering is not a permutation of the canonical deck.
    InvalidDeckContents,
    /// A sixth card was offered to a complete trick.
    TrickFull,
    /// Play attempted after the hand finished.
    HandOver,
    ParseCard,
    ParseTrump,
    InvalidTrumpConversion,
    InvalidConfig,
}

impl ValidationKind {
    pub const fn code(self) -> ErrorCode {
        match self {
            ValidationKind::WrongTurn => ErrorCode::WrongTurn,
            ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
            ValidationKind::IllegalSuit => ErrorCode::IllegalSuit,
            ValidationKind::InvalidCallContext => ErrorCode::InvalidCallContext,
            ValidationKind::TrickIncomplete => ErrorCode::TrickIncomplete,
            ValidationKind::InvalidDeckSize => ErrorCode::InvalidDeckSize,
            ValidationKind::InvalidDeckContents => ErrorCode::InvalidDeckContents,
            ValidationKind::TrickFull => ErrorCode::TrickFull,
            ValidationKind::HandOver => ErrorCode::HandOver,
            ValidationKind::ParseCard => ErrorCode::ParseCard,
            ValidationKind::ParseTrump => ErrorCode::ParseTrump,
            ValidationKind::InvalidTrumpConversion => ErrorCode::InvalidTrumpConversion,
            ValidationKind::InvalidConfig => ErrorCode::InvalidConfig,
        }
    }
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input or rule violation by the caller.
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Internal state broke an invariant the engine maintains itself.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The violated rule, or `None` for invariant failures.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Invariant(_) => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => kind.code(),
            DomainError::Invariant(_) => ErrorCode::Internal,
        }
    }
}
