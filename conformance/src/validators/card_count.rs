//! Card count validator.
//!
//! A projective plane of order `q` has exactly `q² + q + 1` lines, so a valid
//! deck has exactly that many cards. The order is inferred from the first
//! card's length (`q + 1` symbols per card); the deck's declared order is
//! cross-checked but never trusted.

use spotit_plane::{point_count, Deck};

use super::check_count;
use crate::report::{CheckResult, VerificationReport};

const VALIDATOR: &str = "deck/card_count";

/// Validates the total card count against the inferred order.
#[must_use]
pub fn validate(deck: &Deck) -> VerificationReport {
    let Some(order) = crate::inferred_order(deck) else {
        return super::fail_empty_deck(VALIDATOR);
    };

    let mut report = VerificationReport::new();
    check_count(
        &mut report,
        VALIDATOR,
        "card",
        deck.len(),
        point_count(order),
    );

    if deck.order() != order {
        report.push(CheckResult::warn(
            VALIDATOR,
            format!(
                "Declared order {} differs from inferred order {}",
                deck.order(),
                order
            ),
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    fn built(order: usize) -> Deck {
        match Deck::build(order) {
            Ok(b) => b.deck,
            Err(e) => unreachable!("order {order} is prime: {e}"),
        }
    }

    #[test]
    fn accepts_reference_deck() {
        let report = validate(&built(7));
        assert!(report.all_passed());
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].severity, Severity::Pass);
    }

    #[test]
    fn reports_missing_card() {
        let deck = built(3);
        let mut cards = deck.cards().to_vec();
        cards.pop();
        let report = validate(&Deck::from_cards(3, cards));
        assert!(!report.all_passed());
        assert!(report.diagnostics()[0].contains("expected 13, got 12"));
    }

    #[test]
    fn warns_on_declared_order_mismatch() {
        let deck = built(2);
        let relabeled = Deck::from_cards(5, deck.cards().to_vec());
        let report = validate(&relabeled);
        // Counts are still consistent with the inferred order, so the
        // mismatch is a warning, not a failure.
        assert!(report.all_passed());
        assert!(report
            .results
            .iter()
            .any(|r| r.severity == Severity::Warning));
    }

    #[test]
    fn rejects_empty_deck() {
        let report = validate(&Deck::from_cards(2, Vec::new()));
        assert!(!report.all_passed());
    }

    #[test]
    fn order_is_inferred_not_declared() {
        // A deck relabeled with a wrong order still validates against the
        // geometry its cards actually describe.
        let deck = built(2);
        let relabeled = Deck::from_cards(7, deck.cards().to_vec());
        assert_eq!(crate::inferred_order(&relabeled), Some(2));
        assert!(validate(&relabeled).all_passed());
    }
}
