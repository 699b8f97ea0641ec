//! Host-facing serializers for a built deck.
//!
//! The presentation host consumes a deck as plain data; this module produces
//! that document. Only JSON is needed today.

pub mod json;
