//! Interest breakdown for a person, per wallet and per card

use super::Calculator;
use crate::cards::{Card, CardKind};
use crate::error::{InterestError, InterestResult};
use crate::holdings::{Person, Wallet};
use rust_decimal::Decimal;
use serde::Serialize;

/// Display options for rendering a breakdown
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Decimal places shown in text output (computation is never rounded)
    pub display_scale: u32,

    /// Whether to list individual cards under each wallet
    pub include_cards: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            display_scale: 2,
            include_cards: true,
        }
    }
}

/// Interest on a single card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardInterest {
    pub kind: CardKind,
    pub balance: Decimal,
    pub interest_rate: Decimal,
    pub interest: Decimal,
}

/// Interest on a wallet with its cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletBreakdown {
    pub label: Option<String>,
    pub cards: Vec<CardInterest>,
    pub total: Decimal,
}

/// Interest owed by one person, broken down by wallet and card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestBreakdown {
    pub name: Option<String>,
    pub wallets: Vec<WalletBreakdown>,
    pub total: Decimal,
}

/// Summary statistics for a breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSummary {
    pub wallet_count: usize,
    pub card_count: usize,
    pub total_balance: Decimal,
    pub total_interest: Decimal,
}

impl WalletBreakdown {
    fn for_wallet(calculator: &Calculator, wallet: &Wallet) -> InterestResult<Self> {
        let cards = wallet
            .cards()
            .iter()
            .map(|card| {
                Ok(CardInterest {
                    kind: card.kind(),
                    balance: card.balance(),
                    interest_rate: card.interest_rate(),
                    interest: calculator.checked_interest_for_card(card.as_ref())?,
                })
            })
            .collect::<InterestResult<Vec<_>>>()?;

        Ok(Self {
            label: wallet.label.clone(),
            cards,
            total: calculator.checked_interest_for_wallet(wallet)?,
        })
    }
}

impl InterestBreakdown {
    /// Build the breakdown by walking the person through the calculator
    ///
    /// Fails with `Overflow` when any total does not fit in a decimal.
    pub fn for_person(calculator: &Calculator, person: &Person) -> InterestResult<Self> {
        let wallets = person
            .wallets()
            .iter()
            .map(|wallet| WalletBreakdown::for_wallet(calculator, wallet))
            .collect::<InterestResult<Vec<_>>>()?;

        Ok(Self {
            name: person.name.clone(),
            wallets,
            total: calculator.checked_interest_for_person(person)?,
        })
    }

    /// Get summary statistics
    pub fn summary(&self) -> InterestResult<BreakdownSummary> {
        let cards = self.wallets.iter().flat_map(|w| w.cards.iter());
        let total_balance = cards
            .clone()
            .try_fold(Decimal::ZERO, |acc, c| acc.checked_add(c.balance))
            .ok_or(InterestError::Overflow)?;

        Ok(BreakdownSummary {
            wallet_count: self.wallets.len(),
            card_count: cards.count(),
            total_balance,
            total_interest: self.total,
        })
    }

    /// Render as indented text
    pub fn render(&self, config: &ReportConfig) -> String {
        let scale = config.display_scale;
        let mut out = String::new();

        let name = self.name.as_deref().unwrap_or("(unnamed)");
        out.push_str(&format!("{}: {}\n", name, self.total.round_dp(scale)));

        for (idx, wallet) in self.wallets.iter().enumerate() {
            let label = wallet
                .label
                .clone()
                .unwrap_or_else(|| format!("wallet {}", idx + 1));
            out.push_str(&format!("  {}: {}\n", label, wallet.total.round_dp(scale)));

            if config.include_cards {
                for card in &wallet.cards {
                    out.push_str(&format!(
                        "    {:<10} balance {:>12} rate {:>5} interest {:>10}\n",
                        card.kind.as_str(),
                        card.balance.round_dp(scale),
                        card.interest_rate,
                        card.interest.round_dp(scale),
                    ));
                }
            }
        }

        out
    }
}
