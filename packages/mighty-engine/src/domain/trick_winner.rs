//! Trick-winner resolution.
//!
//! Precedence, first match wins:
//! 1. the Mighty,
//! 2. the killer card, when a Joker led with a call suit declared,
//! 3. the Joker,
//! 4. ranked comparison (trump band > lead band > off-suit, then rank).

use crate::domain::rules::{joker_killer, mighty_card, rank_value, LEAD_BAND, TRUMP_BAND};
use crate::domain::state::{Play, PlayerId};
use crate::domain::{Card, Suit, Trump};

/// Joker score in ranked comparison. Never reached in practice because the
/// Joker is settled by the earlier precedence steps.
const JOKER_SCORE: u16 = 10_000;

/// Hand-level facts the resolver needs about a trick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TrickContext {
    pub trump: Trump,
    pub mighty: Card,
    pub joker_call: Option<Suit>,
}

impl TrickContext {
    pub fn new(trump: Trump, joker_call: Option<Suit>) -> Self {
        Self {
            trump,
            mighty: mighty_card(trump),
            joker_call,
        }
    }
}

/// Lead suit of a trick: the first card's suit. A Joker lead has none.
pub fn lead_suit(plays: &[Play]) -> Option<Suit> {
    plays.first().and_then(|(_, card)| card.suit())
}

/// Ranked-comparison score of a card.
pub fn card_score(card: Card, trump: Trump, lead: Option<Suit>) -> u16 {
    let Card::Suited { suit, rank } = card else {
        return JOKER_SCORE;
    };
    let base = rank_value(rank);
    if trump.suit() == Some(suit) {
        TRUMP_BAND + base
    } else if lead == Some(suit) {
        LEAD_BAND + base
    } else {
        base
    }
}

fn player_holding(plays: &[Play], target: Card) -> Option<PlayerId> {
    plays
        .iter()
        .find(|(_, card)| *card == target)
        .map(|(who, _)| *who)
}

/// Winner of `plays` under `ctx`, or `None` for an empty trick.
///
/// Pure: the same inputs always yield the same winner. Ties in ranked
/// comparison keep the earliest play.
pub fn resolve_trick(
    ctx: &TrickContext,
    plays: &[Play],
    lead: Option<Suit>,
) -> Option<PlayerId> {
    let (_, first) = plays.first()?;

    if let Some(who) = player_holding(plays, ctx.mighty) {
        return Some(who);
    }

    if first.is_joker() && ctx.joker_call.is_some() {
        if let Some(who) = player_holding(plays, joker_killer(ctx.trump)) {
            return Some(who);
        }
    }

    if let Some(who) = player_holding(plays, Card::Joker) {
        return Some(who);
    }

    let mut best = 0usize;
    for (i, (_, card)) in plays.iter().enumerate().skip(1) {
        if card_score(*card, ctx.trump, lead) > card_score(plays[best].1, ctx.trump, lead) {
            best = i;
        }
    }
    Some(plays[best].0)
}
