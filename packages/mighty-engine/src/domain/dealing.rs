//! Deck construction, shuffling, and dealing.
//!
//! Randomness is always injected: callers pass an RNG or a seed, so every
//! deal can be reproduced.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of dealing one deck ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: [Vec<Card>; PLAYERS],
    pub kitty: Vec<Card>,
}

/// The canonical 53-card deck: suits S, D, H, C each from Ace down to Two,
/// then the Joker.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::DESCENDING {
            deck.push(Card::new(suit, rank));
        }
    }
    deck.push(Card::Joker);
    deck
}

/// Fisher-Yates shuffle into a new vector; the input is left untouched.
pub fn shuffle<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut out = deck.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Deterministic shuffle: the same seed always yields the same ordering.
pub fn shuffle_with_seed(deck: &[Card], seed: u64) -> Vec<Card> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    shuffle(deck, &mut rng)
}

/// Deal from the end of `deck`, one card per player per round (players 0..4)
/// for ten rounds. The `kitty_size` cards left over become the kitty in their
/// original order.
pub fn deal(deck: &[Card], kitty_size: usize) -> Result<Deal, DomainError> {
    let expected = PLAYERS * HAND_SIZE + kitty_size;
    if deck.len() != expected {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeckSize,
            format!("Deck must hold {expected} cards, got {}", deck.len()),
        ));
    }

    let mut remaining = deck.to_vec();
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for _ in 0..HAND_SIZE {
        for hand in hands.iter_mut() {
            let card = remaining
                .pop()
                .ok_or_else(|| DomainError::invariant("deck exhausted while dealing"))?;
            hand.push(card);
        }
    }

    Ok(Deal {
        hands,
        kitty: remaining,
    })
}
