//! Closed tag for the supported card kinds

use super::{SharedCard, Discover, MasterCard, Visa};
use super::{DISCOVER_RATE, MASTER_CARD_RATE, VISA_RATE};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Kind of card, used when building cards from external data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardKind {
    Visa,
    MasterCard,
    Discover,
}

impl CardKind {
    /// All supported kinds
    pub const ALL: [CardKind; 3] = [CardKind::Visa, CardKind::MasterCard, CardKind::Discover];

    /// Fixed interest rate for this kind
    pub fn interest_rate(&self) -> Decimal {
        match self {
            CardKind::Visa => VISA_RATE,
            CardKind::MasterCard => MASTER_CARD_RATE,
            CardKind::Discover => DISCOVER_RATE,
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Visa => "Visa",
            CardKind::MasterCard => "MasterCard",
            CardKind::Discover => "Discover",
        }
    }

    /// Build a card of this kind with the given balance
    pub fn issue(&self, balance: Decimal) -> SharedCard {
        match self {
            CardKind::Visa => Arc::new(Visa::new(balance)),
            CardKind::MasterCard => Arc::new(MasterCard::new(balance)),
            CardKind::Discover => Arc::new(Discover::new(balance)),
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(CardKind::Visa),
            "mastercard" | "master_card" | "master-card" => Ok(CardKind::MasterCard),
            "discover" => Ok(CardKind::Discover),
            other => Err(format!("Unknown card kind: {}", other)),
        }
    }
}
