//! Spot-it! deck conformance suite.
//!
//! Independently re-checks the projective-plane invariants of an
//! already-built deck, without relying on how the deck was produced:
//!
//! | Validator | Invariant |
//! |-----------|-----------|
//! | `deck/card_count` | exactly `q² + q + 1` cards |
//! | `deck/card_size` | every card carries `q + 1` distinct symbols |
//! | `deck/intersections` | every two cards share exactly one symbol |
//! | `deck/coverage` | the symbols are exactly `{0, …, q² + q}` |
//!
//! The order `q` is inferred from the first card's length. Every violation
//! found is accumulated; nothing stops at the first failure, nothing is
//! mutated, and verification is freely repeatable.
//!
//! # Entry Point
//!
//! ```
//! let built = spotit_plane::Deck::build(7).expect("7 is prime");
//! let report = spotit_conformance::run_all(&built.deck);
//! assert!(report.all_passed());
//!
//! let (passed, diagnostics) = spotit_conformance::verify(&built.deck);
//! assert!(passed && diagnostics.is_empty());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use spotit_plane::Deck;

pub use report::{CheckResult, Severity, VerificationReport};

/// Infers the plane order from the first card: a card of a valid order-`q`
/// deck carries `q + 1` symbols. Returns `None` for an empty deck.
#[must_use]
pub fn inferred_order(deck: &Deck) -> Option<usize> {
    deck.cards().first().map(|card| card.len().saturating_sub(1))
}

/// Runs all deck validators and returns the aggregated report.
///
/// Validators run in invariant order:
/// 1. Card count
/// 2. Per-card symbol count and distinctness
/// 3. Pairwise single-symbol intersection
/// 4. Total symbol coverage
#[must_use]
pub fn run_all(deck: &Deck) -> VerificationReport {
    let mut report = VerificationReport::new();
    report.extend(validators::card_count::validate(deck));
    report.extend(validators::card_size::validate(deck));
    report.extend(validators::intersections::validate(deck));
    report.extend(validators::coverage::validate(deck));
    report
}

/// Verifies a deck, returning the pass verdict and the failure diagnostics.
///
/// Convenience projection of [`run_all`]: `passed` is true exactly when the
/// diagnostics sequence is empty.
#[must_use]
pub fn verify(deck: &Deck) -> (bool, Vec<String>) {
    let report = run_all(deck);
    let passed = report.all_passed();
    (passed, report.diagnostics())
}
