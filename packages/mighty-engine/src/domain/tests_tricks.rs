use crate::domain::state::{HandState, Phase};
use crate::domain::test_state_helpers::{card, make_state, parse_cards, play_all};
use crate::domain::tricks::{
    finish_trick, legal_moves, play_card, reveal_friend, set_joker_led_call_suit,
};
use crate::domain::{Suit, Trump};
use crate::errors::domain::ValidationKind;

fn small_hand() -> HandState {
    let hands = [
        parse_cards(&["SK", "H3", "JOKER"]),
        parse_cards(&["S2", "C3", "D4"]),
        parse_cards(&["S5", "H9", "CA"]),
        parse_cards(&["D7", "D8", "C9"]),
        parse_cards(&["S6", "HK", "DQ"]),
    ];
    make_state(hands, 0, Trump::Hearts)
}

fn kind_of(res: Result<impl std::fmt::Debug, crate::errors::DomainError>) -> ValidationKind {
    res.expect_err("operation should be rejected")
        .kind()
        .expect("validation error")
}

#[test]
fn legal_moves_follow_lead() {
    let mut state = small_hand();
    // First to play can play any
    assert_eq!(legal_moves(&state, 0).len(), 3);

    play_card(&mut state, 0, card("SK")).unwrap();
    assert_eq!(legal_moves(&state, 1), parse_cards(&["S2"]));
    // Void in spades: anything goes
    assert_eq!(legal_moves(&state, 3), parse_cards(&["D7", "D8", "C9"]));
}

#[test]
fn play_card_rejects_out_of_turn() {
    let mut state = small_hand();
    assert_eq!(
        kind_of(play_card(&mut state, 1, card("S2"))),
        ValidationKind::WrongTurn
    );
}

#[test]
fn play_card_rejects_card_not_in_hand() {
    let mut state = small_hand();
    assert_eq!(
        kind_of(play_card(&mut state, 0, card("S2"))),
        ValidationKind::CardNotInHand
    );
}

#[test]
fn play_card_rejects_wrong_suit_without_mutating() {
    let mut state = small_hand();
    play_card(&mut state, 0, card("SK")).unwrap();
    let before = state.clone();

    assert_eq!(
        kind_of(play_card(&mut state, 1, card("C3"))),
        ValidationKind::IllegalSuit
    );
    assert_eq!(state, before);

    // Holding the suit, following is accepted.
    play_card(&mut state, 1, card("S2")).unwrap();
    play_card(&mut state, 2, card("S5")).unwrap();
    // Void player may discard anything.
    play_card(&mut state, 3, card("C9")).unwrap();
}

#[test]
fn finish_trick_requires_five_plays() {
    let mut state = small_hand();
    assert_eq!(
        kind_of(finish_trick(&mut state)),
        ValidationKind::TrickIncomplete
    );
    play_all(&mut state, &[(0, "SK"), (1, "S2"), (2, "S5"), (3, "D7")]);
    assert_eq!(
        kind_of(finish_trick(&mut state)),
        ValidationKind::TrickIncomplete
    );
}

#[test]
fn sixth_card_is_rejected() {
    let mut state = small_hand();
    play_all(
        &mut state,
        &[(0, "SK"), (1, "S2"), (2, "S5"), (3, "D7"), (4, "S6")],
    );
    assert_eq!(state.phase(), Phase::TrickComplete);
    assert_eq!(state.expected_player(), None);
    assert_eq!(
        kind_of(play_card(&mut state, 0, card("H3"))),
        ValidationKind::TrickFull
    );
    assert_eq!(
        kind_of(play_card(&mut state, 1, card("C3"))),
        ValidationKind::WrongTurn
    );
}

#[test]
fn finish_trick_credits_winner_and_rotates_lead() {
    let mut state = small_hand();
    play_all(
        &mut state,
        &[(0, "SK"), (1, "S2"), (2, "S5"), (3, "D7"), (4, "S6")],
    );
    let winner = finish_trick(&mut state).unwrap();
    assert_eq!(winner, 0);
    assert_eq!(state.taken_tricks, [1, 0, 0, 0, 0]);
    assert_eq!(state.round.leader, 0);
    assert_eq!(state.round.trick_index, 1);
    assert!(state.round.trick_plays.is_empty());
    assert_eq!(state.round.joker_call, None);

    // Trump beats the rest of the hearts lead.
    play_all(
        &mut state,
        &[(0, "H3"), (1, "C3"), (2, "H9"), (3, "D8"), (4, "HK")],
    );
    assert_eq!(finish_trick(&mut state).unwrap(), 4);
    assert_eq!(state.round.leader, 4);
    assert_eq!(state.expected_player(), Some(4));
}

#[test]
fn full_small_hand_runs_to_completion() {
    let mut state = small_hand();
    state.friend_card = Some(card("CA"));

    play_all(
        &mut state,
        &[(0, "SK"), (1, "S2"), (2, "S5"), (3, "D7"), (4, "S6")],
    );
    finish_trick(&mut state).unwrap();
    play_all(
        &mut state,
        &[(0, "H3"), (1, "C3"), (2, "H9"), (3, "D8"), (4, "HK")],
    );
    finish_trick(&mut state).unwrap();
    assert_eq!(state.friend, None);

    // Joker following (not leading) still wins.
    play_all(
        &mut state,
        &[(4, "DQ"), (0, "JOKER"), (1, "D4"), (2, "CA"), (3, "C9")],
    );
    assert_eq!(finish_trick(&mut state).unwrap(), 0);

    assert_eq!(state.friend, Some(2));
    assert_eq!(state.taken_tricks, [2, 0, 0, 0, 1]);
    assert!(state.is_hand_over());
    assert_eq!(state.phase(), Phase::HandComplete);
    assert!(legal_moves(&state, 1).is_empty());
    assert_eq!(
        kind_of(play_card(&mut state, 1, card("D4"))),
        ValidationKind::HandOver
    );
}

fn joker_lead_hand() -> HandState {
    let hands = [
        parse_cards(&["JOKER", "SK"]),
        parse_cards(&["S2", "D4"]),
        parse_cards(&["S5", "H9"]),
        parse_cards(&["D7", "D3"]),
        parse_cards(&["S6", "HK"]),
    ];
    make_state(hands, 0, Trump::Clubs)
}

#[test]
fn joker_call_restricts_followers() {
    let mut state = joker_lead_hand();
    let res = play_card(&mut state, 0, card("JOKER")).unwrap();
    assert!(res.joker_led);
    assert!(!res.trick_completed);

    set_joker_led_call_suit(&mut state, Suit::Hearts).unwrap();
    // P1 holds no hearts: free choice
    assert_eq!(legal_moves(&state, 1).len(), 2);
    play_card(&mut state, 1, card("S2")).unwrap();
    // P2 holds a heart and must play it
    assert_eq!(
        kind_of(play_card(&mut state, 2, card("S5"))),
        ValidationKind::IllegalSuit
    );
    play_card(&mut state, 2, card("H9")).unwrap();
    play_card(&mut state, 3, card("D3")).unwrap();
    play_card(&mut state, 4, card("HK")).unwrap();

    // Clubs trump: D3 kills the called Joker lead.
    assert_eq!(finish_trick(&mut state).unwrap(), 3);
    assert_eq!(state.round.joker_call, None);
}

#[test]
fn uncalled_joker_lead_is_unrestricted() {
    let mut state = joker_lead_hand();
    play_card(&mut state, 0, card("JOKER")).unwrap();
    play_card(&mut state, 1, card("D4")).unwrap();
    play_card(&mut state, 2, card("S5")).unwrap();
    play_card(&mut state, 3, card("D3")).unwrap();
    play_card(&mut state, 4, card("S6")).unwrap();
    // Without a call the killer has no effect.
    assert_eq!(finish_trick(&mut state).unwrap(), 0);
}

#[test]
fn joker_call_window_is_exactly_one_joker_card() {
    let mut state = joker_lead_hand();
    assert_eq!(
        kind_of(set_joker_led_call_suit(&mut state, Suit::Spades)),
        ValidationKind::InvalidCallContext
    );

    play_card(&mut state, 0, card("JOKER")).unwrap();
    play_card(&mut state, 1, card("S2")).unwrap();
    assert_eq!(
        kind_of(set_joker_led_call_suit(&mut state, Suit::Spades)),
        ValidationKind::InvalidCallContext
    );
    assert_eq!(state.round.joker_call, None);

    let mut state = joker_lead_hand();
    play_card(&mut state, 0, card("SK")).unwrap();
    assert_eq!(
        kind_of(set_joker_led_call_suit(&mut state, Suit::Hearts)),
        ValidationKind::InvalidCallContext
    );
}

#[test]
fn friend_is_assigned_once() {
    let mut state = small_hand();
    state.friend_card = Some(card("CA"));

    let first = [(2, card("CA"))];
    assert_eq!(reveal_friend(&mut state, &first), Some(2));
    assert_eq!(state.friend, Some(2));

    let later = [(4, card("CA"))];
    assert_eq!(reveal_friend(&mut state, &later), None);
    assert_eq!(state.friend, Some(2));
}

#[test]
fn no_friend_card_means_no_friend() {
    let mut state = small_hand();
    let plays = [(2, card("CA"))];
    assert_eq!(reveal_friend(&mut state, &plays), None);
    assert_eq!(state.friend, None);
}

#[test]
fn trick_ceiling_ends_hand_with_cards_in_hand() {
    let mut state = small_hand();
    state.round.trick_index = 13;
    assert!(state.hands.iter().all(|h| !h.is_empty()));

    assert!(state.is_hand_over());
    assert_eq!(state.phase(), Phase::HandComplete);
    assert_eq!(state.expected_player(), None);
    assert!(legal_moves(&state, 0).is_empty());

    let before = state.clone();
    assert_eq!(
        kind_of(play_card(&mut state, 0, card("SK"))),
        ValidationKind::HandOver
    );
    assert_eq!(state, before);
}
