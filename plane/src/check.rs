//! Build-time structural self-check.
//!
//! Scans a just-built deck for the four structural invariants of a projective
//! plane of order `q` and reports every violation found. Violations are
//! diagnostics, not errors: the builder returns the deck either way and the
//! caller decides what to do with a broken one. The conformance crate
//! re-checks the same invariants independently of this module.

use core::fmt;
use std::collections::HashSet;

use crate::model::{point_count, Deck};

/// A single structural invariant violation, carrying the offending indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralDiagnostic {
    /// The deck does not hold `q² + q + 1` cards.
    CardCount {
        /// Expected card count.
        expected: usize,
        /// Actual card count.
        actual: usize,
    },
    /// A card does not hold exactly `q + 1` distinct symbols.
    CardSize {
        /// Index of the offending card.
        card: usize,
        /// Expected distinct-symbol count.
        expected: usize,
        /// Actual distinct-symbol count.
        actual: usize,
    },
    /// A pair of distinct cards does not share exactly one symbol.
    Intersection {
        /// Index of the first card of the pair.
        first: usize,
        /// Index of the second card of the pair.
        second: usize,
        /// Actual intersection size.
        size: usize,
    },
    /// The union of all symbols is not exactly `{0, …, q² + q}`.
    SymbolCoverage {
        /// Expected distinct-symbol total.
        expected: usize,
        /// Actual distinct-symbol total.
        actual: usize,
    },
}

impl fmt::Display for StructuralDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardCount { expected, actual } => {
                write!(f, "wrong card count: expected {expected}, got {actual}")
            }
            Self::CardSize {
                card,
                expected,
                actual,
            } => write!(
                f,
                "card {card} has {actual} distinct symbols, expected {expected}"
            ),
            Self::Intersection {
                first,
                second,
                size,
            } => write!(
                f,
                "cards {first} and {second} share {size} symbols, expected exactly 1"
            ),
            Self::SymbolCoverage { expected, actual } => write!(
                f,
                "deck covers {actual} distinct symbols, expected {expected}"
            ),
        }
    }
}

/// Scans the deck for structural invariant violations.
///
/// Checks, accumulating every violation rather than stopping at the first:
/// card count, per-card distinct-symbol count, pairwise single-symbol
/// intersection, and total symbol coverage. Pair checks use one symbol set
/// per card so the work stays linear in card size per pair.
#[must_use]
pub fn structural_diagnostics(deck: &Deck) -> Vec<StructuralDiagnostic> {
    let order = deck.order();
    let expected_cards = point_count(order);
    let mut diagnostics = Vec::new();

    if deck.len() != expected_cards {
        diagnostics.push(StructuralDiagnostic::CardCount {
            expected: expected_cards,
            actual: deck.len(),
        });
    }

    let sets: Vec<HashSet<usize>> = deck
        .cards()
        .iter()
        .map(|card| card.symbols().iter().copied().collect())
        .collect();

    for (index, set) in sets.iter().enumerate() {
        if set.len() != order + 1 {
            diagnostics.push(StructuralDiagnostic::CardSize {
                card: index,
                expected: order + 1,
                actual: set.len(),
            });
        }
    }

    for (first, first_set) in sets.iter().enumerate() {
        for (offset, second_set) in sets[first + 1..].iter().enumerate() {
            let size = first_set.intersection(second_set).count();
            if size != 1 {
                diagnostics.push(StructuralDiagnostic::Intersection {
                    first,
                    second: first + 1 + offset,
                    size,
                });
            }
        }
    }

    let union: HashSet<usize> = sets.iter().flatten().copied().collect();
    let covered = union.len() == expected_cards && union.iter().all(|&s| s < expected_cards);
    if !covered {
        diagnostics.push(StructuralDiagnostic::SymbolCoverage {
            expected: expected_cards,
            actual: union.len(),
        });
    }

    diagnostics
}
