//! Interest calculation over cards, wallets and people

mod engine;
mod report;

pub use engine::{
    Calculator, calculate_interest_for_card, calculate_interest_for_wallet,
    calculate_interest_for_person,
};
pub use report::{InterestBreakdown, WalletBreakdown, CardInterest, BreakdownSummary, ReportConfig};
