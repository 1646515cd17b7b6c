#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rule engine for a single hand of five-player Mighty: dealing, legal-play
//! enforcement, and trick resolution with the Mighty, the Joker, and the
//! Joker-call mechanism.

pub mod config;
pub mod domain;
pub mod errors;


// Re-exports for public API
pub use config::HandConfig;
pub use domain::{
    evaluate_declarer_side, finish_trick, init_hand, init_hand_seeded, legal_moves, play_card,
    set_joker_led_call_suit, Card, DeclarerResult, HandState, Phase, PlayerId, Rank, Suit, Trump,
};
pub use errors::{DomainError, ErrorCode, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
