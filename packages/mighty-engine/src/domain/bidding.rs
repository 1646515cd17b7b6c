//! Minimum-bid check. The auction itself happens outside the engine; only
//! the floor a contract must meet is enforced here.

use std::ops::RangeInclusive;

use crate::domain::rules::MAX_TRICKS;
use crate::domain::Trump;

/// Lowest contract a declarer may hold: 12 in NoTrump, 13 otherwise.
pub const fn minimum_bid(trump: Trump) -> u8 {
    match trump {
        Trump::NoTrump => 12,
        _ => 13,
    }
}

pub fn valid_bid_range(trump: Trump) -> RangeInclusive<u8> {
    minimum_bid(trump)..=MAX_TRICKS
}

/// Contract used for evaluation: the requested level raised to the minimum,
/// or the minimum itself when nothing was requested.
pub fn effective_bid_level(trump: Trump, requested: Option<u8>) -> u8 {
    let floor = minimum_bid(trump);
    requested.unwrap_or(floor).max(floor)
}
