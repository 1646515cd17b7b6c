//! In-memory hand simulator.
//!
//! Plays a hand with random legal cards at every seat. It is a consumer of
//! the engine, not part of its contract: every move goes through the same
//! public operations any other driver would use.

use mighty_engine::domain::{legal_moves, DeclarerResult};
use mighty_engine::{
    evaluate_declarer_side, finish_trick, init_hand_seeded, play_card, set_joker_led_call_suit,
    Card, DomainError, HandConfig, HandState, PlayerId, Suit,
};
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::debug;

use crate::seeds::{derive_dealing_seed, derive_play_seed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Declarer,
    Defense,
}

/// Result of simulating one hand.
#[derive(Debug, Clone, Serialize)]
pub struct HandResult {
    pub hand_no: u32,
    pub dealing_seed: u64,
    pub winner_side: Side,
    pub bid_level: u8,
    pub declarer: PlayerId,
    pub friend: Option<PlayerId>,
    pub taken_tricks: [u8; 5],
    #[serde(flatten)]
    pub result: DeclarerResult,
    pub log: Vec<String>,
}

/// Suit a Joker leader calls: the one they hold most of, ties broken in
/// S, D, H, C order.
pub fn choose_call_suit(hand: &[Card]) -> Suit {
    let mut best = Suit::ALL[0];
    let mut best_count = 0usize;
    for suit in Suit::ALL {
        let count = hand.iter().filter(|c| c.is_suit(suit)).count();
        if count > best_count {
            best = suit;
            best_count = count;
        }
    }
    best
}

pub struct Simulator {
    run_seed: u64,
}

impl Simulator {
    pub fn new(run_seed: u64) -> Self {
        Self { run_seed }
    }

    pub fn simulate_hand(
        &self,
        hand_no: u32,
        config: &HandConfig,
    ) -> Result<HandResult, DomainError> {
        let dealing_seed = derive_dealing_seed(self.run_seed, hand_no);
        let mut rng = ChaCha20Rng::seed_from_u64(derive_play_seed(self.run_seed, hand_no));
        let mut state = init_hand_seeded(config, dealing_seed)?;
        let mut log = Vec::new();

        while !state.is_hand_over() {
            play_trick(&mut state, &mut rng, &mut log)?;
            let winner = finish_trick(&mut state)?;
            log.push(format!(
                "Trick {} won by P{winner}",
                state.round.trick_index
            ));
        }

        let bid_level = config.effective_bid_level();
        let result = evaluate_declarer_side(&state, bid_level);
        let winner_side = if result.success {
            Side::Declarer
        } else {
            Side::Defense
        };
        log.push(format!(
            "Declarer side tricks={} -> {winner_side:?}",
            result.declarer_side_tricks
        ));
        debug!(hand_no, ?winner_side, tricks = result.declarer_side_tricks, "hand simulated");

        Ok(HandResult {
            hand_no,
            dealing_seed,
            winner_side,
            bid_level,
            declarer: state.declarer,
            friend: state.friend,
            taken_tricks: state.taken_tricks,
            result,
            log,
        })
    }
}

fn play_trick(
    state: &mut HandState,
    rng: &mut ChaCha20Rng,
    log: &mut Vec<String>,
) -> Result<(), DomainError> {
    while let Some(who) = state.expected_player() {
        let legal = legal_moves(state, who);
        let Some(&pick) = legal.choose(rng) else {
            return Err(DomainError::invariant(format!(
                "P{who} has no legal card to play"
            )));
        };
        let res = play_card(state, who, pick)?;
        if res.joker_led {
            let suit = choose_call_suit(&state.hands[who as usize]);
            set_joker_led_call_suit(state, suit)?;
            log.push(format!("P{who} led JOKER, called {suit}"));
        }
        log.push(format!("P{who} -> {pick}"));
    }
    Ok(())
}
