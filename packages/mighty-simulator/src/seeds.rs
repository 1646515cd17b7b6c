//! RNG seed derivation for simulated hands.
//!
//! Each hand gets one seed for the shuffle and a separate one for the random
//! players, both derived from the run seed so a whole run can be replayed.

/// Seed for shuffling the deck of hand `hand_no`.
pub fn derive_dealing_seed(run_seed: u64, hand_no: u32) -> u64 {
    run_seed
        .wrapping_add((hand_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // Offset to distinguish from play seed
}

/// Seed for the random card choices of hand `hand_no`.
pub fn derive_play_seed(run_seed: u64, hand_no: u32) -> u64 {
    run_seed
        .wrapping_add((hand_no as u64).wrapping_mul(10_000))
        .wrapping_add(1)
}
