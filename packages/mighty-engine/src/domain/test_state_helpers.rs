use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::rules::{mighty_card, PLAYERS};
use crate::domain::state::{HandState, PlayerId, RoundState};
use crate::domain::{Card, Trump};

pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

pub fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

/// Build a hand state directly from explicit hands, skipping the deal.
pub fn make_state(hands: [Vec<Card>; PLAYERS], leader: PlayerId, trump: Trump) -> HandState {
    HandState {
        dealer: (leader + PLAYERS as u8 - 1) % PLAYERS as u8,
        trump,
        mighty: mighty_card(trump),
        declarer: 0,
        friend: None,
        friend_card: None,
        hands,
        kitty: Vec::new(),
        taken_tricks: [0; PLAYERS],
        round: RoundState::starting(0, leader),
    }
}

/// Plays every `(player, token)` pair in order, panicking on any rejection.
pub fn play_all(state: &mut HandState, plays: &[(PlayerId, &str)]) {
    for &(who, token) in plays {
        crate::domain::tricks::play_card(state, who, card(token))
            .unwrap_or_else(|e| panic!("P{who} playing {token} rejected: {e}"));
    }
}
