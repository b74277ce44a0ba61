//! Wallet and person containers

use crate::cards::{Card, SharedCard};
use std::sync::Arc;

/// An ordered collection of cards
///
/// Cards keep insertion order. Duplicates, including the same shared
/// instance more than once, are allowed.
#[derive(Debug, Clone, Default)]
pub struct Wallet {
    /// Optional label for reporting (e.g. "travel")
    pub label: Option<String>,

    cards: Vec<SharedCard>,
}

impl Wallet {
    /// Create an empty wallet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty wallet with a label
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            cards: Vec::new(),
        }
    }

    /// Append an owned card
    pub fn add_card<C: Card + 'static>(&mut self, card: C) {
        self.cards.push(Arc::new(card));
    }

    /// Append a card that may also be held elsewhere
    pub fn add_shared(&mut self, card: SharedCard) {
        self.cards.push(card);
    }

    /// Cards in insertion order
    pub fn cards(&self) -> &[SharedCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Aggregation root owning an ordered collection of wallets
#[derive(Debug, Clone, Default)]
pub struct Person {
    /// Optional name for reporting
    pub name: Option<String>,

    wallets: Vec<Wallet>,
}

impl Person {
    /// Create a person with no wallets
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named person with no wallets
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            wallets: Vec::new(),
        }
    }

    /// Append a wallet
    pub fn add_wallet(&mut self, wallet: Wallet) {
        self.wallets.push(wallet);
    }

    /// Wallets in insertion order
    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    /// Mutable access to a wallet already added, by position
    pub fn wallet_mut(&mut self, index: usize) -> Option<&mut Wallet> {
        self.wallets.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Total number of cards across all wallets
    pub fn card_count(&self) -> usize {
        self.wallets.iter().map(Wallet::len).sum()
    }
}
