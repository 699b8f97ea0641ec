//! Finite projective plane model and Spot-it! deck builder.
//!
//! The `spotit-plane` crate derives a deck of symbol cards from the finite
//! projective plane of a prime order `q`: `q² + q + 1` points, the same
//! number of lines, every line carrying `q + 1` points, and every two lines
//! meeting in exactly one point. Each line becomes a card and each point
//! index a symbol, which gives the deck its defining property: every two
//! cards share exactly one symbol.
//!
//! # Entry Point
//!
//! ```
//! let built = spotit_plane::Deck::build(7).expect("7 is prime");
//! assert_eq!(built.deck.len(), 57);
//! assert!(built.diagnostics.is_empty());
//! ```
//!
//! # Serialization
//!
//! ```
//! let built = spotit_plane::Deck::build(2).expect("2 is prime");
//! let doc = spotit_plane::serializer::json::to_json(&built.deck);
//! assert_eq!(doc["points"], 7);
//! ```
//!
//! Structural verification independent of this builder lives in the
//! `spotit-conformance` crate.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod check;
pub mod model;
#[cfg(feature = "serializers")]
pub mod serializer;

pub use builder::{BuiltDeck, ConfigurationError};
pub use check::{structural_diagnostics, StructuralDiagnostic};
pub use model::{point_count, Card, Deck, Line, PointCoord};
