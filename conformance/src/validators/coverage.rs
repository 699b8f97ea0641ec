//! Symbol coverage validator.
//!
//! Across the whole deck the symbols must be exactly `{0, …, q² + q}`: every
//! point of the plane appears on some card, and nothing outside the point
//! range sneaks in. Missing and unexpected symbols are listed in the detail
//! lines.

use std::collections::HashSet;

use spotit_plane::{point_count, Deck};

use super::check_count;
use crate::report::{CheckResult, VerificationReport};

const VALIDATOR: &str = "deck/coverage";

/// Validates the union of all symbols against the full point range.
#[must_use]
pub fn validate(deck: &Deck) -> VerificationReport {
    let Some(order) = crate::inferred_order(deck) else {
        return super::fail_empty_deck(VALIDATOR);
    };

    let mut report = VerificationReport::new();
    let expected = point_count(order);

    let union: HashSet<usize> = deck
        .cards()
        .iter()
        .flat_map(|card| card.symbols().iter().copied())
        .collect();

    let mut missing: Vec<usize> = (0..expected).filter(|s| !union.contains(s)).collect();
    let mut unexpected: Vec<usize> = union.iter().copied().filter(|&s| s >= expected).collect();
    missing.sort_unstable();
    unexpected.sort_unstable();

    if missing.is_empty() && unexpected.is_empty() {
        check_count(&mut report, VALIDATOR, "distinct symbol", union.len(), expected);
        return report;
    }

    let mut details: Vec<String> = missing
        .iter()
        .map(|s| format!("missing symbol {s}"))
        .collect();
    details.extend(
        unexpected
            .iter()
            .map(|s| format!("unexpected symbol {s}")),
    );
    report.push(CheckResult::fail_with_details(
        VALIDATOR,
        format!(
            "Symbols do not cover 0..{}: {} missing, {} unexpected",
            expected - 1,
            missing.len(),
            unexpected.len()
        ),
        details,
    ));

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotit_plane::Card;

    fn built(order: usize) -> Deck {
        match Deck::build(order) {
            Ok(b) => b.deck,
            Err(e) => unreachable!("order {order} is prime: {e}"),
        }
    }

    #[test]
    fn accepts_reference_deck() {
        assert!(validate(&built(7)).all_passed());
    }

    #[test]
    fn reports_missing_and_unexpected_symbols() {
        let deck = built(2);
        let mut cards = deck.cards().to_vec();
        // Replace every occurrence of symbol 6 with the out-of-range 99.
        for card in &mut cards {
            let symbols: Vec<usize> = card
                .symbols()
                .iter()
                .map(|&s| if s == 6 { 99 } else { s })
                .collect();
            *card = Card::from_symbols(symbols);
        }
        let report = validate(&Deck::from_cards(2, cards));
        assert!(!report.all_passed());
        let result = &report.results[0];
        assert!(result.message.contains("1 missing, 1 unexpected"));
        assert!(result.details.contains(&"missing symbol 6".to_string()));
        assert!(result.details.contains(&"unexpected symbol 99".to_string()));
    }
}
