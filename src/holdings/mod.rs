//! Holdings: people, their wallets, and loading them from CSV

mod data;
pub mod loader;

pub use data::{Wallet, Person};
pub use loader::{load_holdings, load_holdings_from_reader};
