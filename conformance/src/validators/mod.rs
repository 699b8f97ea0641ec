//! Deck validators, one module per structural invariant.
//!
//! Every validator takes an already-built deck, re-derives what it needs from
//! the deck itself, and returns a report. Validators never stop at the first
//! violation and never mutate the deck.

pub mod card_count;
pub mod card_size;
pub mod coverage;
pub mod intersections;

use crate::report::{CheckResult, VerificationReport};

/// Records a pass/fail result for an expected count.
pub(crate) fn check_count(
    report: &mut VerificationReport,
    validator: &str,
    label: &str,
    actual: usize,
    expected: usize,
) {
    if actual == expected {
        report.push(CheckResult::pass(
            validator,
            format!("Correct {label} count: {actual}"),
        ));
    } else {
        report.push(CheckResult::fail(
            validator,
            format!("Wrong {label} count: expected {expected}, got {actual}"),
        ));
    }
}

/// Records the failure every validator shares for a deck with no cards.
pub(crate) fn fail_empty_deck(validator: &str) -> VerificationReport {
    let mut report = VerificationReport::new();
    report.push(CheckResult::fail(
        validator,
        "Deck has no cards; nothing to verify",
    ));
    report
}
