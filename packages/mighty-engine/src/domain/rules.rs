//! Fixed rule constants: table size, rank ordering, and the trump-derived
//! special cards.

use crate::domain::{Card, Rank, Suit, Trump};

pub const PLAYERS: usize = 5;
pub const HAND_SIZE: usize = 10;
pub const KITTY_SIZE: usize = 3;
/// 52 standard cards plus one Joker.
pub const DECK_SIZE: usize = 53;
/// Nominal trick ceiling for a hand.
pub const MAX_TRICKS: u8 = 13;

/// Score band for trump-suit cards in ranked comparison.
pub const TRUMP_BAND: u16 = 500;
/// Score band for lead-suit cards in ranked comparison.
pub const LEAD_BAND: u16 = 100;

/// Rank ordering table: 2 → 0 through A → 12.
pub const fn rank_value(rank: Rank) -> u16 {
    match rank {
        Rank::Two => 0,
        Rank::Three => 1,
        Rank::Four => 2,
        Rank::Five => 3,
        Rank::Six => 4,
        Rank::Seven => 5,
        Rank::Eight => 6,
        Rank::Nine => 7,
        Rank::Ten => 8,
        Rank::Jack => 9,
        Rank::Queen => 10,
        Rank::King => 11,
        Rank::Ace => 12,
    }
}

/// The Mighty: Ace of Diamonds when Spades are trump, otherwise Ace of Spades.
pub const fn mighty_card(trump: Trump) -> Card {
    match trump {
        Trump::Spades => Card::new(Suit::Diamonds, Rank::Ace),
        _ => Card::new(Suit::Spades, Rank::Ace),
    }
}

/// The card that kills a leading Joker: 3 of Diamonds when Clubs are trump,
/// otherwise 3 of Clubs.
pub const fn joker_killer(trump: Trump) -> Card {
    match trump {
        Trump::Clubs => Card::new(Suit::Diamonds, Rank::Three),
        _ => Card::new(Suit::Clubs, Rank::Three),
    }
}
