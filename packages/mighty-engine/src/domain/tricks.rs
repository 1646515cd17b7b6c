//! Trick-level state transitions, from the first card to the resolved trick.

use tracing::{debug, info, trace};

use crate::domain::cards_logic::{legal_plays, FollowRule};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{expected_actor, is_valid_seat, HandState, Play, PlayerId, RoundState};
use crate::domain::trick_winner::resolve_trick;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Five plays are recorded; `finish_trick` must run next.
    pub trick_completed: bool,
    /// The card led a trick as the Joker; a call suit may now be set.
    pub joker_led: bool,
}

/// Compute legal cards the player may play, independent of turn enforcement.
pub fn legal_moves(state: &HandState, who: PlayerId) -> Vec<Card> {
    if state.is_hand_over() || !is_valid_seat(who) {
        return Vec::new();
    }
    legal_plays(
        state.round.lead_suit(),
        &state.hands[who as usize],
        state.round.joker_call,
    )
}

/// Play a card into the current trick, enforcing turn and follow-suit.
///
/// Nothing is mutated unless every check passes.
pub fn play_card(
    state: &mut HandState,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    if state.is_hand_over() {
        return Err(DomainError::validation(
            ValidationKind::HandOver,
            "Hand is already complete",
        ));
    }

    let expected = expected_actor(state.round.leader, state.round.trick_plays.len() as u8);
    if who != expected {
        return Err(DomainError::validation(
            ValidationKind::WrongTurn,
            format!("Wrong turn: expected P{expected}, got P{who}"),
        ));
    }

    if state.round.is_full() {
        return Err(DomainError::validation(
            ValidationKind::TrickFull,
            "Trick already holds five plays",
        ));
    }

    let hand = &state.hands[who as usize];
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {card} not in P{who}"),
        ));
    };

    let rule = FollowRule::for_trick(state.round.lead_suit(), state.round.joker_call);
    trace!(player = who, %card, ?rule, "checking follow rule");
    if !rule.permits(card, hand) {
        return Err(DomainError::validation(
            ValidationKind::IllegalSuit,
            format!("Must follow suit. Tried {card}"),
        ));
    }

    let removed = state.hands[who as usize].remove(pos);
    let joker_led = state.round.trick_plays.is_empty() && removed.is_joker();
    state.round.trick_plays.push((who, removed));
    debug!(player = who, card = %removed, joker_led, "card played");

    Ok(PlayCardResult {
        trick_completed: state.round.is_full(),
        joker_led,
    })
}

/// Declare the suit others must follow on a Joker-led trick.
///
/// Only valid while the trick holds exactly one card and that card is the
/// Joker. Without a call the trick carries no suit restriction.
pub fn set_joker_led_call_suit(state: &mut HandState, suit: Suit) -> Result<(), DomainError> {
    if state.round.trick_plays.len() != 1 || !state.round.joker_led() {
        return Err(DomainError::validation(
            ValidationKind::InvalidCallContext,
            "Not a Joker-led situation",
        ));
    }
    state.round.joker_call = Some(suit);
    debug!(%suit, "joker call suit set");
    Ok(())
}

/// Assign the friend to whoever played the friend card, at most once.
///
/// Returns the newly revealed friend. Later sightings are ignored because
/// the friend is already known.
pub fn reveal_friend(state: &mut HandState, plays: &[Play]) -> Option<PlayerId> {
    if state.friend.is_some() {
        return None;
    }
    let target = state.friend_card?;
    let (holder, _) = plays.iter().find(|(_, card)| *card == target)?;
    state.friend = Some(*holder);
    info!(friend = *holder, card = %target, "friend revealed");
    Some(*holder)
}

/// Resolve the complete trick, credit the winner, and start the next trick
/// with the winner leading.
pub fn finish_trick(state: &mut HandState) -> Result<PlayerId, DomainError> {
    if state.round.trick_plays.len() != PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::TrickIncomplete,
            format!(
                "Trick not complete: {} of {PLAYERS} plays",
                state.round.trick_plays.len()
            ),
        ));
    }

    let ctx = state.trick_context();
    let winner = resolve_trick(&ctx, &state.round.trick_plays, state.round.lead_suit())
        .ok_or_else(|| DomainError::invariant("complete trick without a winner"))?;

    let next = RoundState::starting(state.round.trick_index.saturating_add(1), winner);
    let finished = std::mem::replace(&mut state.round, next);

    state.taken_tricks[winner as usize] += 1;
    reveal_friend(state, &finished.trick_plays);

    info!(
        trick = state.round.trick_index,
        winner,
        taken = state.taken_tricks[winner as usize],
        "trick resolved"
    );
    Ok(winner)
}
