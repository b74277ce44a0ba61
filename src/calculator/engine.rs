//! Simple interest folds: card -> wallet -> person

use crate::cards::Card;
use crate::error::{InterestError, InterestResult};
use crate::holdings::{Person, Wallet};
use rust_decimal::Decimal;

/// Stateless interest calculator
///
/// Holds no configuration and never mutates its inputs, so a single value
/// can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    /// Create a calculator
    pub fn new() -> Self {
        Self
    }

    /// Interest for one card: `balance * interest_rate`, unrounded
    pub fn calculate_interest_for_card(&self, card: &dyn Card) -> Decimal {
        card.balance() * card.interest_rate()
    }

    /// Sum of card interest over the wallet, zero when empty
    pub fn calculate_interest_for_wallet(&self, wallet: &Wallet) -> Decimal {
        let total = wallet
            .cards()
            .iter()
            .fold(Decimal::ZERO, |acc, card| acc + self.calculate_interest_for_card(card.as_ref()));

        log::trace!("Wallet {:?}: {} cards, interest {}", wallet.label, wallet.len(), total);
        total
    }

    /// Sum of wallet interest over the person, zero when no wallets
    pub fn calculate_interest_for_person(&self, person: &Person) -> Decimal {
        let total = person
            .wallets()
            .iter()
            .fold(Decimal::ZERO, |acc, wallet| acc + self.calculate_interest_for_wallet(wallet));

        log::debug!("Person {:?}: {} wallets, interest {}", person.name, person.len(), total);
        total
    }

    /// Card interest, failing with `Overflow` instead of panicking
    pub fn checked_interest_for_card(&self, card: &dyn Card) -> InterestResult<Decimal> {
        card.balance()
            .checked_mul(card.interest_rate())
            .ok_or(InterestError::Overflow)
    }

    /// Wallet interest, failing with `Overflow` instead of panicking
    pub fn checked_interest_for_wallet(&self, wallet: &Wallet) -> InterestResult<Decimal> {
        wallet.cards().iter().try_fold(Decimal::ZERO, |acc, card| {
            let interest = self.checked_interest_for_card(card.as_ref())?;
            acc.checked_add(interest).ok_or(InterestError::Overflow)
        })
    }

    /// Person interest, failing with `Overflow` instead of panicking
    pub fn checked_interest_for_person(&self, person: &Person) -> InterestResult<Decimal> {
        let total = person.wallets().iter().try_fold(Decimal::ZERO, |acc, wallet| {
            let interest = self.checked_interest_for_wallet(wallet)?;
            acc.checked_add(interest).ok_or(InterestError::Overflow)
        })?;

        log::debug!("Person {:?}: {} wallets, interest {}", person.name, person.len(), total);
        Ok(total)
    }

    /// Checked card interest, rejecting an absent card
    pub fn try_calculate_interest_for_card(&self, card: Option<&dyn Card>) -> InterestResult<Decimal> {
        let card = card.ok_or(InterestError::MissingCard)?;
        self.checked_interest_for_card(card)
    }

    /// Checked wallet interest, rejecting an absent wallet
    pub fn try_calculate_interest_for_wallet(&self, wallet: Option<&Wallet>) -> InterestResult<Decimal> {
        let wallet = wallet.ok_or(InterestError::MissingWallet)?;
        self.checked_interest_for_wallet(wallet)
    }

    /// Checked person interest, rejecting an absent person
    pub fn try_calculate_interest_for_person(&self, person: Option<&Person>) -> InterestResult<Decimal> {
        let person = person.ok_or(InterestError::MissingPerson)?;
        self.checked_interest_for_person(person)
    }
}

/// Interest for one card using the default calculator
pub fn calculate_interest_for_card(card: &dyn Card) -> Decimal {
    Calculator.calculate_interest_for_card(card)
}

/// Interest for one wallet using the default calculator
pub fn calculate_interest_for_wallet(wallet: &Wallet) -> Decimal {
    Calculator.calculate_interest_for_wallet(wallet)
}

/// Interest for one person using the default calculator
pub fn calculate_interest_for_person(person: &Person) -> Decimal {
    Calculator.calculate_interest_for_person(person)
}
