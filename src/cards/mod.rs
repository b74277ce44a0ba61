//! Card model: interest-bearing instruments held in wallets

mod issuers;
mod kind;

pub use issuers::{Visa, MasterCard, Discover, new_visa, new_master_card, new_discover};
pub use issuers::{VISA_RATE, MASTER_CARD_RATE, DISCOVER_RATE};
pub use kind::CardKind;

use rust_decimal::Decimal;
use std::fmt::Debug;
use std::sync::Arc;

/// A single interest-bearing instrument
///
/// The calculator only ever sees this trait, so new card kinds can be added
/// without touching the aggregation code.
pub trait Card: Debug + Send + Sync {
    /// Outstanding balance supplied at construction
    fn balance(&self) -> Decimal;

    /// Interest rate per period as a fraction (0.05 = 5%)
    fn interest_rate(&self) -> Decimal;

    /// Kind of card, for reporting
    fn kind(&self) -> CardKind;
}

/// Card held by reference so one instance may sit in several wallets
pub type SharedCard = Arc<dyn Card>;
