//! Load holdings from a flat CSV of `person,wallet,card,balance` rows

use super::{Person, Wallet};
use crate::cards::CardKind;
use crate::error::{InterestError, InterestResult};
use csv::Reader;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// Raw CSV row matching the holdings columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    person: String,
    wallet: String,
    card: String,
    balance: String,
}

/// Groups rows into people and wallets by first appearance
///
/// The maps index into `people` and each person's wallets, so a row is
/// placed without scanning earlier people.
#[derive(Debug, Default)]
struct HoldingsBuilder {
    people: Vec<Person>,
    person_index: HashMap<String, usize>,
    wallet_index: Vec<HashMap<String, usize>>,
}

impl HoldingsBuilder {
    fn push(&mut self, row: CsvRow, row_number: usize) -> InterestResult<()> {
        let kind = CardKind::from_str(&row.card).map_err(|_| InterestError::UnknownCardKind {
            kind: row.card.clone(),
            row: row_number,
        })?;

        let balance = Decimal::from_str(row.balance.trim()).map_err(|_| {
            InterestError::InvalidBalance {
                value: row.balance.clone(),
                row: row_number,
            }
        })?;

        let person_idx = match self.person_index.get(&row.person) {
            Some(&idx) => idx,
            None => {
                let idx = self.people.len();
                self.people.push(Person::with_name(row.person.as_str()));
                self.wallet_index.push(HashMap::new());
                self.person_index.insert(row.person, idx);
                idx
            }
        };
        let person = &mut self.people[person_idx];
        let wallets = &mut self.wallet_index[person_idx];

        let wallet_idx = match wallets.get(&row.wallet) {
            Some(&idx) => idx,
            None => {
                let idx = person.len();
                person.add_wallet(Wallet::with_label(row.wallet.as_str()));
                wallets.insert(row.wallet, idx);
                idx
            }
        };

        if let Some(wallet) = person.wallet_mut(wallet_idx) {
            wallet.add_shared(kind.issue(balance));
        }
        Ok(())
    }
}

fn load<R: std::io::Read>(mut reader: Reader<R>) -> InterestResult<Vec<Person>> {
    let mut builder = HoldingsBuilder::default();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        builder.push(row, idx + 1)?;
    }

    log::debug!("Loaded holdings for {} people", builder.people.len());
    Ok(builder.people)
}

/// Load all people from a holdings CSV file
pub fn load_holdings<P: AsRef<Path>>(path: P) -> InterestResult<Vec<Person>> {
    let reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    load(reader)
}

/// Load people from any reader (e.g., string buffer, stdin)
pub fn load_holdings_from_reader<R: std::io::Read>(reader: R) -> InterestResult<Vec<Person>> {
    let csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    load(csv_reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use rust_decimal_macros::dec;

    const HOLDINGS: &str = "\
person,wallet,card,balance
alice,main,Visa,100
alice,main,MasterCard,100
bob,travel,Discover,250.50
alice,spare,Visa,500
alice,main,Discover,100
";

    #[test]
    fn test_groups_by_first_appearance() {
        let people = load_holdings_from_reader(HOLDINGS.as_bytes()).expect("load");
        assert_eq!(people.len(), 2);

        let alice = &people[0];
        assert_eq!(alice.name.as_deref(), Some("alice"));
        assert_eq!(alice.len(), 2);
        assert_eq!(alice.wallets()[0].label.as_deref(), Some("main"));
        assert_eq!(alice.wallets()[1].label.as_deref(), Some("spare"));

        let main_kinds: Vec<_> = alice.wallets()[0].cards().iter().map(|c| c.kind()).collect();
        assert_eq!(
            main_kinds,
            vec![CardKind::Visa, CardKind::MasterCard, CardKind::Discover]
        );

        let bob = &people[1];
        assert_eq!(bob.wallets()[0].cards()[0].balance(), dec!(250.50));
    }

    #[test]
    fn test_empty_input() {
        let people = load_holdings_from_reader("person,wallet,card,balance\n".as_bytes())
            .expect("load");
        assert!(people.is_empty());
    }

    #[test]
    fn test_unknown_card_kind() {
        let data = "person,wallet,card,balance\nann,w,Visa,1\nann,w,Amex,10\n";
        let err = load_holdings_from_reader(data.as_bytes()).unwrap_err();
        match err {
            InterestError::UnknownCardKind { kind, row } => {
                assert_eq!(kind, "Amex");
                assert_eq!(row, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_balance() {
        let data = "person,wallet,card,balance\nann,w,Visa,lots\n";
        let err = load_holdings_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, InterestError::InvalidBalance { row: 1, .. }));
    }

    #[test]
    fn test_negative_balance_loads() {
        let data = "person,wallet,card,balance\nann,w,Visa,-40\n";
        let people = load_holdings_from_reader(data.as_bytes()).expect("load");
        assert_eq!(people[0].wallets()[0].cards()[0].balance(), dec!(-40));
    }

    #[test]
    fn test_missing_file() {
        let err = load_holdings("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, InterestError::Csv(_)));
    }

    #[test]
    fn test_interleaved_people_keep_order() {
        let data = "\
person,wallet,card,balance
carol,w1,Visa,10
dave,w1,Visa,20
erin,w1,Visa,30
carol,w2,Discover,40
dave,w1,MasterCard,50
erin,w2,Visa,60
carol,w1,MasterCard,70
dave,w3,Discover,80
";
        let people = load_holdings_from_reader(data.as_bytes()).expect("load");

        let names: Vec<_> = people.iter().map(|p| p.name.as_deref()).collect();
        assert_eq!(names, vec![Some("carol"), Some("dave"), Some("erin")]);

        let carol: Vec<_> = people[0].wallets().iter().map(|w| w.label.as_deref()).collect();
        assert_eq!(carol, vec![Some("w1"), Some("w2")]);
        let carol_w1: Vec<_> = people[0].wallets()[0].cards().iter().map(|c| c.balance()).collect();
        assert_eq!(carol_w1, vec![dec!(10), dec!(70)]);

        let dave: Vec<_> = people[1].wallets().iter().map(|w| w.label.as_deref()).collect();
        assert_eq!(dave, vec![Some("w1"), Some("w3")]);
        assert_eq!(people[1].wallets()[0].len(), 2);
        assert_eq!(people[2].card_count(), 2);
    }

    #[test]
    fn test_many_people_load() {
        let mut data = String::from("person,wallet,card,balance\n");
        for i in 0..5_000 {
            data.push_str(&format!("p{},w,Visa,{}\n", i, i));
        }
        let people = load_holdings_from_reader(data.as_bytes()).expect("load");

        assert_eq!(people.len(), 5_000);
        assert_eq!(people[4_999].name.as_deref(), Some("p4999"));
        assert_eq!(people[4_999].wallets()[0].cards()[0].balance(), dec!(4999));
    }
}
