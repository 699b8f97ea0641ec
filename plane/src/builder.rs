//! Deck construction.
//!
//! [`Deck::build`] derives the full deck from an order: it enumerates the
//! three line families in deck order, maps each line to its card, and runs
//! the structural self-check over the result. Construction is a pure
//! function of the order.

use thiserror::Error;

use crate::check::{structural_diagnostics, StructuralDiagnostic};
use crate::model::{Deck, Line};

/// Rejected deck configuration.
///
/// The construction arithmetic is plain modular arithmetic, which forms a
/// field only for prime moduli; non-prime orders would silently yield a
/// structurally invalid plane, so they are rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The order is below the smallest projective plane order.
    #[error("order {0} is too small: a projective plane needs order ≥ 2")]
    OrderTooSmall(usize),
    /// The order is not a prime number.
    #[error("order {0} is not prime: GF(q) line arithmetic requires a prime order")]
    OrderNotPrime(usize),
}

/// A freshly built deck together with its self-check findings.
///
/// Structural diagnostics are non-fatal: the deck is returned even when the
/// self-check found violations, and the caller decides whether a broken deck
/// still gets used. For a prime order the list is empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltDeck {
    /// The constructed deck.
    pub deck: Deck,
    /// Structural violations found by the build-time self-check.
    pub diagnostics: Vec<StructuralDiagnostic>,
}

impl Deck {
    /// Builds the deck of the projective plane of the given prime order.
    ///
    /// Cards appear in deck order: slanted lines (`m` outer, `b` inner),
    /// vertical lines, then the line at infinity. The just-built deck is
    /// scanned for structural violations; any findings are returned alongside
    /// it rather than raised.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the order is below 2 or not prime.
    pub fn build(order: usize) -> Result<BuiltDeck, ConfigurationError> {
        if order < 2 {
            return Err(ConfigurationError::OrderTooSmall(order));
        }
        if !is_prime(order) {
            return Err(ConfigurationError::OrderNotPrime(order));
        }

        let cards = Line::enumerate(order)
            .into_iter()
            .map(|line| line.card(order))
            .collect();
        let deck = Deck::from_cards(order, cards);
        let diagnostics = structural_diagnostics(&deck);
        Ok(BuiltDeck { deck, diagnostics })
    }
}

/// Trial-division primality test; sufficient for the small orders decks use.
fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
