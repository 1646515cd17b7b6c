//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod hand_setup;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod trick_winner;
pub mod tricks;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{effective_bid_level, minimum_bid};
pub use cards_logic::{hand_has_suit, legal_plays, FollowRule};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit, Trump};
pub use dealing::{build_deck, deal, shuffle, shuffle_with_seed, Deal};
pub use hand_setup::{init_hand, init_hand_seeded};
pub use rules::{joker_killer, mighty_card, rank_value};
pub use scoring::{evaluate_declarer_side, DeclarerResult};
pub use snapshot::{snapshot, HandSnapshot};
pub use state::{HandState, Phase, Play, PlayerId, RoundState};
pub use trick_winner::{resolve_trick, TrickContext};
pub use tricks::{finish_trick, legal_moves, play_card, set_joker_led_call_suit, PlayCardResult};
