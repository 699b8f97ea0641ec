//! Display glyphs for card symbols.
//!
//! The algorithm identifies a symbol by its point index; players see a
//! picture. This module owns the fixed index → glyph table. The table holds
//! 64 distinct printable symbols, enough for the reference order 7
//! (57 points); indices past the table render as `#<index>` so larger decks
//! still display.

use core::fmt;

/// The fixed glyph table, one distinct printable symbol per point index.
const SYMBOLS: [char; 64] = [
    '🍎', '🍌', '🍒', '🍇', '🍋', '🍉', '🍓', '🍑', '🥕', '🌽', '🍄', '🌰', //
    '🌸', '🌻', '🌵', '🍀', '🌙', '⭐', '☀', '⚡', '❄', '🔥', '💧', '🌈', //
    '🐢', '🐟', '🐸', '🐱', '🐶', '🐭', '🐰', '🦊', '🐻', '🐼', '🐨', '🐷', //
    '🐞', '🐝', '🦋', '🐌', '🚗', '🚲', '✈', '🚀', '⚓', '🔑', '🔔', '🎈', //
    '🎲', '🎯', '🎵', '🎨', '⏰', '☂', '✂', '📌', '🔍', '💎', '👓', '🧲', //
    '🪁', '🧭', '🎁', '🏠',
];

/// A display glyph for a card symbol (a point index).
///
/// Within the table the mapping is bijective: [`Glyph::from_char`] inverts
/// [`Glyph::character`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph(usize);

impl Glyph {
    /// Number of entries in the glyph table.
    pub const TABLE_LEN: usize = SYMBOLS.len();

    /// Creates the glyph for a symbol index.
    #[must_use]
    pub fn new(symbol: usize) -> Self {
        Self(symbol)
    }

    /// The symbol index this glyph displays.
    #[must_use]
    pub fn symbol(self) -> usize {
        self.0
    }

    /// The table character for this glyph, or `None` past the table.
    #[must_use]
    pub fn character(self) -> Option<char> {
        SYMBOLS.get(self.0).copied()
    }

    /// Looks up the glyph displaying the given character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        SYMBOLS.iter().position(|&s| s == c).map(Self)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.character() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// Returns true if the glyph table covers every point of the given order.
#[must_use]
pub fn covers_order(order: usize) -> bool {
    spotit_plane::point_count(order) <= SYMBOLS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_covers_the_reference_order() {
        assert!(Glyph::TABLE_LEN >= 57);
        assert!(covers_order(7));
        assert!(!covers_order(11));
    }

    #[test]
    fn table_entries_are_distinct() {
        let distinct: HashSet<char> = SYMBOLS.iter().copied().collect();
        assert_eq!(distinct.len(), SYMBOLS.len());
    }

    #[test]
    fn round_trip_within_the_table() {
        for symbol in 0..Glyph::TABLE_LEN {
            let g = Glyph::new(symbol);
            let c = match g.character() {
                Some(c) => c,
                None => unreachable!("symbol {symbol} is within the table"),
            };
            assert_eq!(Glyph::from_char(c), Some(g));
        }
    }

    #[test]
    fn unknown_characters_have_no_glyph() {
        assert_eq!(Glyph::from_char('A'), None);
        assert_eq!(Glyph::from_char(' '), None);
    }

    #[test]
    fn indices_past_the_table_render_numerically() {
        assert_eq!(Glyph::new(64).character(), None);
        assert_eq!(Glyph::new(64).to_string(), "#64");
        assert_eq!(Glyph::new(0).to_string(), "🍎");
    }
}
