use serde::Serialize;

use crate::domain::rules::{MAX_TRICKS, PLAYERS};
use crate::domain::trick_winner::{lead_suit, TrickContext};
use crate::domain::{Card, Suit, Trump};

pub type PlayerId = u8; // 0..=4

/// One entry of a trick: who played which card.
pub type Play = (PlayerId, Card);

/// Where the hand stands between operations.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// The trick has fewer than five plays; someone must act.
    AwaitingPlay,
    /// Five plays recorded; `finish_trick` must run next.
    TrickComplete,
    /// No further plays are possible.
    HandComplete,
}

/// Per-trick state, reset whenever a trick resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Number of tricks resolved so far.
    pub trick_index: u8,
    /// Player who leads the current trick.
    pub leader: PlayerId,
    /// Ordered plays for the current trick.
    pub trick_plays: Vec<Play>,
    /// Suit called by a Joker leader; only ever set on Joker-led tricks.
    pub joker_call: Option<Suit>,
}

impl RoundState {
    pub fn starting(trick_index: u8, leader: PlayerId) -> Self {
        Self {
            trick_index,
            leader,
            trick_plays: Vec::with_capacity(PLAYERS),
            joker_call: None,
        }
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        lead_suit(&self.trick_plays)
    }

    pub fn joker_led(&self) -> bool {
        matches!(self.trick_plays.first(), Some((_, Card::Joker)))
    }

    pub fn is_full(&self) -> bool {
        self.trick_plays.len() >= PLAYERS
    }
}

/// Everything about one hand. Owned by a single caller; nothing is shared
/// across hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandState {
    pub dealer: PlayerId,
    pub trump: Trump,
    pub mighty: Card,
    pub declarer: PlayerId,
    /// Revealed once the friend card shows up in a resolved trick.
    pub friend: Option<PlayerId>,
    pub friend_card: Option<Card>,
    pub hands: [Vec<Card>; PLAYERS],
    pub kitty: Vec<Card>,
    pub taken_tricks: [u8; PLAYERS],
    pub round: RoundState,
}

impl HandState {
    pub fn trick_context(&self) -> TrickContext {
        TrickContext {
            trump: self.trump,
            mighty: self.mighty,
            joker_call: self.round.joker_call,
        }
    }

    /// True at the nominal trick ceiling, or once every card has been played.
    pub fn is_hand_over(&self) -> bool {
        if self.round.trick_index >= MAX_TRICKS {
            return true;
        }
        self.round.trick_plays.is_empty() && self.hands.iter().all(Vec::is_empty)
    }

    pub fn phase(&self) -> Phase {
        if self.is_hand_over() {
            Phase::HandComplete
        } else if self.round.is_full() {
            Phase::TrickComplete
        } else {
            Phase::AwaitingPlay
        }
    }

    /// Who must play next, if anyone.
    pub fn expected_player(&self) -> Option<PlayerId> {
        match self.phase() {
            Phase::AwaitingPlay => Some(expected_actor(
                self.round.leader,
                self.round.trick_plays.len() as u8,
            )),
            Phase::TrickComplete | Phase::HandComplete => None,
        }
    }
}

/// Seat / turn math helpers (5 fixed seats: 0..=4).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i8) -> PlayerId {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as PlayerId
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 4 → 0).
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    seat_offset(p, 1)
}

/// First leader of a hand: the seat after the dealer.
#[inline]
pub fn round_start_seat(dealer: PlayerId) -> PlayerId {
    next_player(dealer)
}

/// Expected actor seat during a trick.
///
/// `leader` leads the trick; `play_count` is how many cards have already
/// been played into it.
#[inline]
pub fn expected_actor(leader: PlayerId, play_count: u8) -> PlayerId {
    seat_offset(leader, play_count as i8)
}

#[inline]
pub fn is_valid_seat(seat: PlayerId) -> bool {
    (seat as usize) < PLAYERS
}
