//! Interest Calculator - simple interest aggregation over people, wallets and cards
//!
//! This library provides:
//! - A card model with fixed per-kind interest rates (Visa, MasterCard, Discover)
//! - Wallet and person containers, plus a CSV holdings loader
//! - A stateless calculator folding `balance * rate` up the hierarchy
//! - Per-wallet and per-card interest breakdowns
//! - A parallel batch runner for many people

pub mod error;
pub mod cards;
pub mod holdings;
pub mod calculator;
pub mod batch;

// Re-export commonly used types
pub use error::{InterestError, InterestResult};
pub use cards::{Card, CardKind, SharedCard, Visa, MasterCard, Discover, new_visa, new_master_card, new_discover};
pub use holdings::{Wallet, Person};
pub use calculator::{
    Calculator, InterestBreakdown, ReportConfig,
    calculate_interest_for_card, calculate_interest_for_wallet, calculate_interest_for_person,
};
pub use batch::BatchRunner;
