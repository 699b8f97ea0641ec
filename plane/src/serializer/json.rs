//! JSON serializer for a deck.
//!
//! Produces a single JSON document with the order, the point total, and the
//! cards as arrays of symbol indices, in deck order.

use serde_json::{json, Value};

use crate::model::{point_count, Deck};

/// Serializes a deck to a JSON `Value`.
///
/// The returned value can be pretty-printed with
/// [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(deck: &Deck) -> Value {
    let cards: Vec<Value> = deck
        .cards()
        .iter()
        .map(|card| json!(card.symbols()))
        .collect();
    json!({
        "order": deck.order(),
        "points": point_count(deck.order()),
        "cards": cards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_shape() {
        let built = match Deck::build(2) {
            Ok(built) => built,
            Err(e) => unreachable!("order 2 is prime: {e}"),
        };
        let doc = to_json(&built.deck);

        assert_eq!(doc["order"], json!(2));
        assert_eq!(doc["points"], json!(7));
        assert_eq!(doc["cards"].as_array().map(Vec::len), Some(7));
        assert_eq!(doc["cards"][0], json!([0, 2, 4]));
    }
}
