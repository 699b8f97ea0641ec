//! Pairwise intersection validator.
//!
//! The defining deck property: every two distinct cards share exactly one
//! symbol. This is the dominant verification cost, so each card's symbols go
//! into a hash set once and every pair check is membership work, keeping the
//! scan subquadratic in card size.

use std::collections::HashSet;

use spotit_plane::Deck;

use crate::report::{CheckResult, VerificationReport};

const VALIDATOR: &str = "deck/intersections";

/// Validates that every unordered pair of distinct cards shares exactly one
/// symbol, reporting each violating pair with its actual intersection size.
#[must_use]
pub fn validate(deck: &Deck) -> VerificationReport {
    if deck.is_empty() {
        return super::fail_empty_deck(VALIDATOR);
    }

    let mut report = VerificationReport::new();

    let sets: Vec<HashSet<usize>> = deck
        .cards()
        .iter()
        .map(|card| card.symbols().iter().copied().collect())
        .collect();

    let mut pairs = 0usize;
    let mut clean = true;
    for (first, first_set) in sets.iter().enumerate() {
        for (offset, second_set) in sets[first + 1..].iter().enumerate() {
            let second = first + 1 + offset;
            pairs += 1;
            let shared: Vec<usize> = first_set
                .iter()
                .filter(|&&s| second_set.contains(&s))
                .copied()
                .collect();
            if shared.len() != 1 {
                report.push(CheckResult::fail_with_details(
                    VALIDATOR,
                    format!(
                        "Cards {first} and {second} share {} symbols, expected exactly 1",
                        shared.len()
                    ),
                    shared.iter().map(|s| format!("shared symbol {s}")).collect(),
                ));
                clean = false;
            }
        }
    }

    if clean {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!("All {pairs} card pairs share exactly one symbol"),
        ));
    }

    report
}
