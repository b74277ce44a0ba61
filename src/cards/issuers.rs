//! Concrete card kinds with their fixed interest rates

use super::{Card, CardKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Visa interest rate (10%)
pub const VISA_RATE: Decimal = dec!(0.10);

/// MasterCard interest rate (5%)
pub const MASTER_CARD_RATE: Decimal = dec!(0.05);

/// Discover interest rate (1%)
pub const DISCOVER_RATE: Decimal = dec!(0.01);

/// Visa card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visa {
    balance: Decimal,
}

impl Visa {
    /// Create a Visa card. Balance is not validated.
    pub fn new(balance: Decimal) -> Self {
        Self { balance }
    }
}

impl Card for Visa {
    fn balance(&self) -> Decimal {
        self.balance
    }

    fn interest_rate(&self) -> Decimal {
        VISA_RATE
    }

    fn kind(&self) -> CardKind {
        CardKind::Visa
    }
}

/// MasterCard card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterCard {
    balance: Decimal,
}

impl MasterCard {
    /// Create a MasterCard card. Balance is not validated.
    pub fn new(balance: Decimal) -> Self {
        Self { balance }
    }
}

impl Card for MasterCard {
    fn balance(&self) -> Decimal {
        self.balance
    }

    fn interest_rate(&self) -> Decimal {
        MASTER_CARD_RATE
    }

    fn kind(&self) -> CardKind {
        CardKind::MasterCard
    }
}

/// Discover card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discover {
    balance: Decimal,
}

impl Discover {
    /// Create a Discover card. Balance is not validated.
    pub fn new(balance: Decimal) -> Self {
        Self { balance }
    }
}

impl Card for Discover {
    fn balance(&self) -> Decimal {
        self.balance
    }

    fn interest_rate(&self) -> Decimal {
        DISCOVER_RATE
    }

    fn kind(&self) -> CardKind {
        CardKind::Discover
    }
}

/// Create a Visa card with the given balance
pub fn new_visa(balance: Decimal) -> Visa {
    Visa::new(balance)
}

/// Create a MasterCard card with the given balance
pub fn new_master_card(balance: Decimal) -> MasterCard {
    MasterCard::new(balance)
}

/// Create a Discover card with the given balance
pub fn new_discover(balance: Decimal) -> Discover {
    Discover::new(balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rates() {
        assert_eq!(new_visa(dec!(100)).interest_rate(), dec!(0.10));
        assert_eq!(new_master_card(dec!(100)).interest_rate(), dec!(0.05));
        assert_eq!(new_discover(dec!(100)).interest_rate(), dec!(0.01));
    }

    #[test]
    fn test_balance_is_kept_as_given() {
        let card = new_visa(dec!(1234.5678));
        assert_eq!(card.balance(), dec!(1234.5678));
        assert_eq!(card.kind(), CardKind::Visa);
    }

    #[test]
    fn test_negative_balance_accepted() {
        // No validation: construction always succeeds
        let card = new_discover(dec!(-250));
        assert_eq!(card.balance(), dec!(-250));
        assert_eq!(card.interest_rate(), DISCOVER_RATE);
    }

    #[test]
    fn test_rate_independent_of_balance() {
        let small = new_master_card(dec!(0.01));
        let large = new_master_card(dec!(1000000));
        assert_eq!(small.interest_rate(), large.interest_rate());
        assert_eq!(small.kind(), CardKind::MasterCard);
    }
}
