//! Per-hand configuration.
//!
//! # Example JSON Config
//!
//! ```json
//! {"dealer": 0, "trump": "H", "declarer": 2, "friend_card": "SK", "bid_level": 13}
//! ```
//!
//! `friend_card` and `bid_level` are optional. Trump accepts `S`, `D`, `H`,
//! `C` or `NT`.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{effective_bid_level, valid_bid_range};
use crate::domain::state::{is_valid_seat, PlayerId};
use crate::domain::{Card, Trump};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandConfig {
    pub dealer: PlayerId,
    pub trump: Trump,
    pub declarer: PlayerId,
    #[serde(default)]
    pub friend_card: Option<Card>,
    /// Requested contract; below-minimum requests are raised to the minimum.
    #[serde(default)]
    pub bid_level: Option<u8>,
}

impl HandConfig {
    pub fn new(dealer: PlayerId, trump: Trump, declarer: PlayerId) -> Self {
        Self {
            dealer,
            trump,
            declarer,
            friend_card: None,
            bid_level: None,
        }
    }

    pub fn with_friend_card(mut self, card: Card) -> Self {
        self.friend_card = Some(card);
        self
    }

    pub fn with_bid_level(mut self, level: u8) -> Self {
        self.bid_level = Some(level);
        self
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let config: HandConfig = serde_json::from_str(json).map_err(|e| {
            DomainError::validation(ValidationKind::InvalidConfig, format!("Bad config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !is_valid_seat(self.dealer) {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!("Dealer seat must be 0..=4, got {}", self.dealer),
            ));
        }
        if !is_valid_seat(self.declarer) {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!("Declarer seat must be 0..=4, got {}", self.declarer),
            ));
        }
        // Below-minimum requests are raised later, so only the ceiling is checked.
        let ceiling = *valid_bid_range(self.trump).end();
        if let Some(level) = self.bid_level.filter(|&l| l > ceiling) {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!("Bid level must be at most {ceiling}, got {level}"),
            ));
        }
        Ok(())
    }

    /// Contract the declarer side is evaluated against.
    pub fn effective_bid_level(&self) -> u8 {
        effective_bid_level(self.trump, self.bid_level)
    }
}
