//! Text rendering of decks and verification reports.

use spotit_conformance::{Severity, VerificationReport};
use spotit_plane::{Card, Deck};

use crate::glyph::Glyph;

/// Renders a card as a single row of glyphs.
#[must_use]
pub fn card_row(card: &Card) -> String {
    card.symbols()
        .iter()
        .map(|&s| Glyph::new(s).to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Renders the whole deck, one numbered card row per line.
#[must_use]
pub fn deck_listing(deck: &Deck) -> String {
    deck.cards()
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{index:>3}  {}", card_row(card)))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Renders a report, one line per result plus indented detail lines.
#[must_use]
pub fn report_lines(report: &VerificationReport) -> Vec<String> {
    let mut lines = Vec::new();
    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        lines.push(format!("[{}] {} — {}", status, result.validator, result.message));
        for detail in &result.details {
            lines.push(format!("       {detail}"));
        }
    }
    lines
}

/// Renders the pass/fail status line for a report.
#[must_use]
pub fn status_line(report: &VerificationReport) -> String {
    if report.all_passed() {
        "Verification PASSED.".to_string()
    } else {
        format!(
            "Verification FAILED: {} check(s) did not pass.",
            report.failure_count()
        )
    }
}
