//! Batch runner for computing interest across many people
//!
//! Entity graphs are read-only during a run, so people are processed in
//! parallel with rayon. Results keep the input order.

use crate::calculator::{Calculator, InterestBreakdown};
use crate::error::{InterestError, InterestResult};
use crate::holdings::Person;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

/// Interest total for one person in a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonTotal {
    /// Position of the person in the input slice
    pub index: usize,
    pub name: Option<String>,
    pub total: Decimal,
}

/// Runs the calculator over a block of people
///
/// # Example
/// ```ignore
/// let people = load_holdings("holdings.csv")?;
/// let runner = BatchRunner::default();
/// for total in runner.run(&people)? {
///     println!("{:?}: {}", total.name, total.total);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchRunner {
    calculator: Calculator,
}

impl BatchRunner {
    /// Create a runner around the given calculator
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }

    /// Compute each person's total interest
    ///
    /// Fails with `Overflow` if any person's total does not fit in a decimal.
    pub fn run(&self, people: &[Person]) -> InterestResult<Vec<PersonTotal>> {
        log::info!("Running interest batch for {} people", people.len());

        people
            .par_iter()
            .enumerate()
            .map(|(index, person)| {
                Ok(PersonTotal {
                    index,
                    name: person.name.clone(),
                    total: self.calculator.checked_interest_for_person(person)?,
                })
            })
            .collect()
    }

    /// Build a full breakdown for each person
    pub fn run_breakdowns(&self, people: &[Person]) -> InterestResult<Vec<InterestBreakdown>> {
        people
            .par_iter()
            .map(|person| InterestBreakdown::for_person(&self.calculator, person))
            .collect()
    }

    /// Exact total interest across every person
    pub fn grand_total(&self, people: &[Person]) -> InterestResult<Decimal> {
        people
            .par_iter()
            .map(|person| self.calculator.checked_interest_for_person(person))
            .try_reduce(
                || Decimal::ZERO,
                |a, b| a.checked_add(b).ok_or(InterestError::Overflow),
            )
    }
}
