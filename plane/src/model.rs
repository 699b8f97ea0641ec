//! Core plane model types.
//!
//! These types represent the finite projective plane of a prime order `q` as
//! typed Rust data: points in coordinate form, lines in the three families of
//! the affine-plus-infinity construction, and the cards and deck derived from
//! them. The top-level entry point is [`Deck::build`](crate::Deck::build).

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of points (and lines) in the projective plane of the given order:
/// `q² + q + 1`.
#[must_use]
pub fn point_count(order: usize) -> usize {
    order * order + order + 1
}

/// A point of the projective plane of order `q`, in coordinate form.
///
/// The plane is the affine plane over `GF(q)` extended with one point at
/// infinity per slope and a single shared point at infinity for the vertical
/// direction. Every point owns a stable integer index (see
/// [`PointCoord::index`]); that index is the symbol printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointCoord {
    /// An affine point `(x, y)` with `x, y ∈ [0, q)`.
    Affine {
        /// Column coordinate.
        x: usize,
        /// Row coordinate.
        y: usize,
    },
    /// The point at infinity absorbed by every line of slope `slope`.
    SlopeInfinity {
        /// The slope whose parallel class meets at this point.
        slope: usize,
    },
    /// The point at infinity shared by the vertical lines and the line at
    /// infinity.
    Infinity,
}

impl PointCoord {
    /// Returns the canonical index of this point in the plane of the given
    /// order.
    ///
    /// Enumeration order: affine points in row-major `(x, y)` order
    /// (`x·q + y`), then the `q` slope-infinity points (`q² + slope`), then
    /// the shared infinity point (`q² + q`). Closed form, never a search.
    ///
    /// Coordinates are expected to lie in `[0, q)`; indices computed from
    /// out-of-range coordinates collide with other points.
    #[must_use]
    pub fn index(self, order: usize) -> usize {
        match self {
            PointCoord::Affine { x, y } => x * order + y,
            PointCoord::SlopeInfinity { slope } => order * order + slope,
            PointCoord::Infinity => order * order + order,
        }
    }

    /// Inverse of [`PointCoord::index`]: recovers the coordinate form of a
    /// point index, or `None` if the index lies outside `0..q²+q+1`.
    #[must_use]
    pub fn from_index(index: usize, order: usize) -> Option<Self> {
        let affine = order * order;
        if index < affine {
            Some(PointCoord::Affine {
                x: index / order,
                y: index % order,
            })
        } else if index < affine + order {
            Some(PointCoord::SlopeInfinity {
                slope: index - affine,
            })
        } else if index == affine + order {
            Some(PointCoord::Infinity)
        } else {
            None
        }
    }
}

impl fmt::Display for PointCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointCoord::Affine { x, y } => write!(f, "({x}, {y})"),
            PointCoord::SlopeInfinity { slope } => write!(f, "({slope}, ∞)"),
            PointCoord::Infinity => write!(f, "(∞, ∞)"),
        }
    }
}

/// A line of the projective plane, in one of the three construction families.
///
/// Together the families yield exactly `q² + q + 1` lines — the same as the
/// point count, a defining property of a projective plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Line {
    /// The line `y = m·x + b (mod q)` for `m, b ∈ [0, q)`.
    Slanted {
        /// Slope.
        m: usize,
        /// Intercept.
        b: usize,
    },
    /// The vertical line `x = k` for `k ∈ [0, q)`.
    Vertical {
        /// Column.
        k: usize,
    },
    /// The single line at infinity.
    AtInfinity,
}

impl Line {
    /// Enumerates every line of the plane of the given order, in deck order:
    /// slanted lines (`m` outer, `b` inner), then vertical lines, then the
    /// line at infinity.
    #[must_use]
    pub fn enumerate(order: usize) -> Vec<Self> {
        let mut lines = Vec::with_capacity(point_count(order));
        for m in 0..order {
            for b in 0..order {
                lines.push(Line::Slanted { m, b });
            }
        }
        for k in 0..order {
            lines.push(Line::Vertical { k });
        }
        lines.push(Line::AtInfinity);
        lines
    }

    /// Returns the `q + 1` points incident to this line, in card order.
    ///
    /// Slanted lines list their affine points by ascending `x` followed by
    /// the slope's infinity point; vertical lines list their column by
    /// ascending `y` followed by the shared infinity point; the line at
    /// infinity lists the slope points by ascending slope followed by the
    /// shared infinity point.
    #[must_use]
    pub fn points(self, order: usize) -> Vec<PointCoord> {
        let mut points = Vec::with_capacity(order + 1);
        match self {
            Line::Slanted { m, b } => {
                for x in 0..order {
                    points.push(PointCoord::Affine {
                        x,
                        y: (m * x + b) % order,
                    });
                }
                points.push(PointCoord::SlopeInfinity { slope: m });
            }
            Line::Vertical { k } => {
                for y in 0..order {
                    points.push(PointCoord::Affine { x: k, y });
                }
                points.push(PointCoord::Infinity);
            }
            Line::AtInfinity => {
                for slope in 0..order {
                    points.push(PointCoord::SlopeInfinity { slope });
                }
                points.push(PointCoord::Infinity);
            }
        }
        points
    }

    /// Maps this line to its card: the ordered point indices of
    /// [`Line::points`].
    #[must_use]
    pub fn card(self, order: usize) -> Card {
        Card::from_symbols(
            self.points(order)
                .into_iter()
                .map(|p| p.index(order))
                .collect(),
        )
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Slanted { m, b } => write!(f, "y = {m}x + {b}"),
            Line::Vertical { k } => write!(f, "x = {k}"),
            Line::AtInfinity => write!(f, "line at infinity"),
        }
    }
}

/// A single card: an ordered sequence of point indices (the symbols).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    symbols: Vec<usize>,
}

impl Card {
    /// Creates a card directly from a symbol list.
    ///
    /// No structural invariant is enforced here; verification is the
    /// conformance suite's job.
    #[must_use]
    pub fn from_symbols(symbols: Vec<usize>) -> Self {
        Self { symbols }
    }

    /// The symbols on this card, in card order.
    #[must_use]
    pub fn symbols(&self) -> &[usize] {
        &self.symbols
    }

    /// Number of symbols on this card (`q + 1` for a valid card).
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the card carries no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns true if the card carries the given symbol.
    #[must_use]
    pub fn contains(&self, symbol: usize) -> bool {
        self.symbols.contains(&symbol)
    }
}

/// A full deck: every line of the plane as a card, in deck order.
///
/// A deck is a pure function of its order. Nothing here mutates after
/// construction; verification only reads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Deck {
    order: usize,
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck directly from a card list.
    ///
    /// Used by callers that obtained a deck from elsewhere and want to verify
    /// it; no invariant is enforced here.
    #[must_use]
    pub fn from_cards(order: usize, cards: Vec<Card>) -> Self {
        Self { order, cards }
    }

    /// The order `q` this deck was declared with.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// The cards, in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards (`q² + q + 1` for a valid deck).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
