//! Hand configuration surface.

pub mod hand;

pub use hand::HandConfig;
