//! Building the state for a fresh hand.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::config::HandConfig;
use crate::domain::dealing::{build_deck, deal, shuffle};
use crate::domain::rules::{mighty_card, DECK_SIZE, KITTY_SIZE, PLAYERS};
use crate::domain::state::{round_start_seat, HandState, RoundState};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// A deck ordering must be a permutation of the canonical deck.
fn require_full_deck(deck: &[Card]) -> Result<(), DomainError> {
    if deck.len() != DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeckSize,
            format!("Deck must hold {DECK_SIZE} cards, got {}", deck.len()),
        ));
    }
    let unique: HashSet<Card> = deck.iter().copied().collect();
    if unique.len() != DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeckContents,
            "Deck contains duplicate cards",
        ));
    }
    Ok(())
}

/// Start a hand from `config`, dealing `deck` if given or a fresh shuffle
/// drawn from `rng` otherwise.
pub fn init_hand<R: Rng + ?Sized>(
    config: &HandConfig,
    deck: Option<&[Card]>,
    rng: &mut R,
) -> Result<HandState, DomainError> {
    config.validate()?;

    let ordering = match deck {
        Some(d) => d.to_vec(),
        None => shuffle(&build_deck(), rng),
    };
    require_full_deck(&ordering)?;
    let dealt = deal(&ordering, KITTY_SIZE)?;

    let leader = round_start_seat(config.dealer);
    debug!(
        dealer = config.dealer,
        declarer = config.declarer,
        trump = %config.trump,
        leader,
        "hand initialized"
    );

    Ok(HandState {
        dealer: config.dealer,
        trump: config.trump,
        mighty: mighty_card(config.trump),
        declarer: config.declarer,
        friend: None,
        friend_card: config.friend_card,
        hands: dealt.hands,
        kitty: dealt.kitty,
        taken_tricks: [0; PLAYERS],
        round: RoundState::starting(0, leader),
    })
}

/// Start a hand with a deterministic shuffle derived from `seed`.
pub fn init_hand_seeded(config: &HandConfig, seed: u64) -> Result<HandState, DomainError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    init_hand(config, None, &mut rng)
}
