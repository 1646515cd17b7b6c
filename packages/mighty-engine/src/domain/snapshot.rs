//! Read-only, serializable view of a hand for drivers and logs.

use serde::Serialize;

use crate::domain::rules::PLAYERS;
use crate::domain::state::{HandState, Phase, PlayerId};
use crate::domain::{Card, Suit, Trump};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaySnapshot {
    pub player: PlayerId,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandSnapshot {
    pub phase: Phase,
    pub trump: Trump,
    pub mighty: Card,
    pub declarer: PlayerId,
    pub friend: Option<PlayerId>,
    pub trick_index: u8,
    pub leader: PlayerId,
    pub expected_player: Option<PlayerId>,
    pub trick: Vec<PlaySnapshot>,
    pub joker_call: Option<Suit>,
    pub taken_tricks: [u8; PLAYERS],
    pub hand_sizes: [usize; PLAYERS],
    pub kitty_size: usize,
}

pub fn snapshot(state: &HandState) -> HandSnapshot {
    HandSnapshot {
        phase: state.phase(),
        trump: state.trump,
        mighty: state.mighty,
        declarer: state.declarer,
        friend: state.friend,
        trick_index: state.round.trick_index,
        leader: state.round.leader,
        expected_player: state.expected_player(),
        trick: state
            .round
            .trick_plays
            .iter()
            .map(|&(player, card)| PlaySnapshot { player, card })
            .collect(),
        joker_call: state.round.joker_call,
        taken_tricks: state.taken_tricks,
        hand_sizes: std::array::from_fn(|p| state.hands[p].len()),
        kitty_size: state.kitty.len(),
    }
}
