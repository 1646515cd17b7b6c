//! Declarer-side evaluation at the end of a hand.

use serde::Serialize;

use crate::domain::state::HandState;

/// Outcome of a hand for the declarer side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeclarerResult {
    pub success: bool,
    /// Tricks taken by the declarer plus the friend, counted once each.
    pub declarer_side_tricks: u8,
}

/// Sum declarer and (if revealed) friend tricks and compare to `bid_level`.
///
/// A friend who turns out to be the declarer is not counted twice.
pub fn evaluate_declarer_side(state: &HandState, bid_level: u8) -> DeclarerResult {
    let mut tricks = state.taken_tricks[state.declarer as usize];
    if let Some(friend) = state.friend.filter(|&f| f != state.declarer) {
        tricks += state.taken_tricks[friend as usize];
    }
    DeclarerResult {
        success: tricks >= bid_level,
        declarer_side_tricks: tricks,
    }
}
