//! Card size validator.
//!
//! Every line of a plane of order `q` carries `q + 1` points, so every card
//! must hold exactly `q + 1` distinct symbols. Length and distinctness are
//! reported separately: a card can be the right length and still repeat a
//! symbol.

use std::collections::HashSet;

use spotit_plane::Deck;

use crate::report::{CheckResult, VerificationReport};

const VALIDATOR: &str = "deck/card_size";

/// Validates every card's symbol count, one diagnostic per offending card.
#[must_use]
pub fn validate(deck: &Deck) -> VerificationReport {
    let Some(order) = crate::inferred_order(deck) else {
        return super::fail_empty_deck(VALIDATOR);
    };

    let mut report = VerificationReport::new();
    let expected = order + 1;
    let mut clean = true;

    for (index, card) in deck.cards().iter().enumerate() {
        if card.len() != expected {
            report.push(CheckResult::fail(
                VALIDATOR,
                format!(
                    "Card {index} has {} symbols, expected {expected}",
                    card.len()
                ),
            ));
            clean = false;
        }
        let distinct: HashSet<usize> = card.symbols().iter().copied().collect();
        if distinct.len() != card.len() {
            report.push(CheckResult::fail(
                VALIDATOR,
                format!(
                    "Card {index} repeats symbols: {} listed, {} distinct",
                    card.len(),
                    distinct.len()
                ),
            ));
            clean = false;
        }
    }

    if clean {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!(
                "All {} cards carry {expected} distinct symbols",
                deck.len()
            ),
        ));
    }

    report
}
