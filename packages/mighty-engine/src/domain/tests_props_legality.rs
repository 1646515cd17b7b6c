/// Property-based tests for follow-suit legality rules
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::cards_logic::legal_plays;
use crate::domain::{test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: holding the target suit, every legal play is of that suit
    /// and every card of that suit is legal.
    #[test]
    fn prop_follow_suit_legality(
        target in test_gens::suit(),
        rank in test_gens::rank(),
        others in test_gens::unique_cards(9),
    ) {
        let forced = Card::new(target, rank);
        let mut hand = vec![forced];
        hand.extend(others.into_iter().filter(|&c| c != forced));

        let legal = legal_plays(Some(target), &hand, None);
        for card in &legal {
            prop_assert!(card.is_suit(target), "{} is not of suit {}", card, target);
        }
        let in_suit = hand.iter().filter(|c| c.is_suit(target)).count();
        prop_assert_eq!(legal.len(), in_suit);
    }

    /// Property: void in the target suit, the whole hand is legal.
    #[test]
    fn prop_follow_suit_when_void((target, hand) in test_gens::suit().prop_flat_map(|s| {
        (Just(s), test_gens::hand_without_suit(s))
    })) {
        prop_assert_eq!(legal_plays(Some(target), &hand, None), hand.clone());
        prop_assert_eq!(legal_plays(None, &hand, Some(target)), hand);
    }

    /// Property: a Joker call always takes precedence over the lead suit.
    #[test]
    fn prop_joker_call_overrides_lead(
        lead in test_gens::suit(),
        call in test_gens::suit(),
        hand in test_gens::hand(),
    ) {
        prop_assert_eq!(
            legal_plays(Some(lead), &hand, Some(call)),
            legal_plays(None, &hand, Some(call))
        );
    }

    /// Property: legal plays are a non-empty, duplicate-free subset of the hand.
    #[test]
    fn prop_legal_plays_subset(
        hand in test_gens::hand(),
        lead in proptest::option::of(test_gens::suit()),
        call in proptest::option::of(test_gens::suit()),
    ) {
        let legal = legal_plays(lead, &hand, call);
        prop_assert!(!legal.is_empty(), "non-empty hand must have a legal play");

        let legal_set: HashSet<Card> = legal.iter().copied().collect();
        prop_assert_eq!(legal_set.len(), legal.len());
        for card in &legal {
            prop_assert!(hand.contains(card), "{} not in hand", card);
        }
    }
}
