//! Follow-suit legality.
//!
//! The follow requirement for a trick is derived once into a [`FollowRule`];
//! legality of any card is then a pure lookup against that rule.

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.is_suit(suit))
}

/// Suit requirement in effect for the next play of a trick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FollowRule {
    /// Nothing to follow: empty trick, or an uncalled Joker lead.
    Free,
    /// Must play this suit when holding any.
    Follow(Suit),
}

impl FollowRule {
    /// A Joker call suit, when present, takes precedence over the lead suit.
    pub fn for_trick(lead_suit: Option<Suit>, joker_call: Option<Suit>) -> Self {
        match joker_call.or(lead_suit) {
            Some(suit) => FollowRule::Follow(suit),
            None => FollowRule::Free,
        }
    }

    /// Whether `card` may be played from `hand` under this rule.
    ///
    /// A player void in the required suit may play anything.
    pub fn permits(self, card: Card, hand: &[Card]) -> bool {
        match self {
            FollowRule::Free => true,
            FollowRule::Follow(suit) => card.is_suit(suit) || !hand_has_suit(hand, suit),
        }
    }
}

/// Cards in `hand` that may legally be played, in hand order.
///
/// Never empty for a non-empty hand.
pub fn legal_plays(lead_suit: Option<Suit>, hand: &[Card], joker_call: Option<Suit>) -> Vec<Card> {
    let rule = FollowRule::for_trick(lead_suit, joker_call);
    hand.iter()
        .copied()
        .filter(|&c| rule.permits(c, hand))
        .collect()
}
