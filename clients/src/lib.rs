//! Presentation-side helpers for the Spot-it! client binaries.
//!
//! The core crates deal exclusively in point indices; everything a person
//! sees lives here: the symbol glyph table and the text rendering of cards
//! and verification reports.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod glyph;
pub mod render;

pub use glyph::Glyph;
