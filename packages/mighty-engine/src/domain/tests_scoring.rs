use crate::domain::scoring::{evaluate_declarer_side, DeclarerResult};
use crate::domain::state::HandState;
use crate::domain::test_state_helpers::make_state;
use crate::domain::Trump;

fn state_with_tricks(taken: [u8; 5], declarer: u8, friend: Option<u8>) -> HandState {
    let mut state = make_state(Default::default(), 0, Trump::Spades);
    state.taken_tricks = taken;
    state.declarer = declarer;
    state.friend = friend;
    state
}

#[test]
fn declarer_and_friend_tricks_combine() {
    let state = state_with_tricks([7, 5, 0, 1, 0], 0, Some(1));
    assert_eq!(
        evaluate_declarer_side(&state, 12),
        DeclarerResult {
            success: true,
            declarer_side_tricks: 12
        }
    );
    assert_eq!(
        evaluate_declarer_side(&state, 13),
        DeclarerResult {
            success: false,
            declarer_side_tricks: 12
        }
    );
}

#[test]
fn unrevealed_friend_contributes_nothing() {
    let state = state_with_tricks([0, 0, 6, 4, 3], 2, None);
    let res = evaluate_declarer_side(&state, 6);
    assert_eq!(res.declarer_side_tricks, 6);
    assert!(res.success);
}

#[test]
fn declarer_as_own_friend_counts_once() {
    let state = state_with_tricks([0, 0, 0, 8, 2], 3, Some(3));
    assert_eq!(evaluate_declarer_side(&state, 8).declarer_side_tricks, 8);
}

#[test]
fn evaluation_is_idempotent() {
    let state = state_with_tricks([3, 2, 1, 2, 2], 4, Some(0));
    let before = state.clone();
    let first = evaluate_declarer_side(&state, 5);
    for _ in 0..3 {
        assert_eq!(evaluate_declarer_side(&state, 5), first);
        assert_eq!(state.is_hand_over(), before.is_hand_over());
    }
    assert_eq!(state, before);
}
