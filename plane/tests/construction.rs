//! Integration tests for deck construction across the prime order test set.
//!
//! Checks the defining projective-plane invariants directly, independent of
//! the builder's own self-check, plus property-based tests for the
//! closed-form point indexing.

use std::collections::HashSet;

use proptest::prelude::*;
use spotit_plane::{point_count, Deck, PointCoord};

/// Prime orders covered by the test set.
const ORDERS: [usize; 6] = [2, 3, 5, 7, 11, 13];

fn build(order: usize) -> Deck {
    match Deck::build(order) {
        Ok(built) => {
            assert!(
                built.diagnostics.is_empty(),
                "order {order}: self-check reported {:?}",
                built.diagnostics
            );
            built.deck
        }
        Err(e) => unreachable!("order {order} is prime: {e}"),
    }
}

#[test]
fn card_and_symbol_counts() {
    for order in ORDERS {
        let deck = build(order);
        assert_eq!(deck.len(), point_count(order), "order {order}");
        for card in deck.cards() {
            assert_eq!(card.len(), order + 1, "order {order}");
            let distinct: HashSet<usize> = card.symbols().iter().copied().collect();
            assert_eq!(distinct.len(), order + 1, "order {order}");
        }
    }
}

#[test]
fn every_pair_shares_exactly_one_symbol() {
    for order in ORDERS {
        let deck = build(order);
        let sets: Vec<HashSet<usize>> = deck
            .cards()
            .iter()
            .map(|card| card.symbols().iter().copied().collect())
            .collect();
        for (i, a) in sets.iter().enumerate() {
            for (j, b) in sets.iter().enumerate().skip(i + 1) {
                let shared = a.intersection(b).count();
                assert_eq!(shared, 1, "order {order}: cards {i} and {j}");
            }
        }
    }
}

#[test]
fn symbols_cover_the_point_range_without_gaps() {
    for order in ORDERS {
        let deck = build(order);
        let union: HashSet<usize> = deck
            .cards()
            .iter()
            .flat_map(|card| card.symbols().iter().copied())
            .collect();
        let expected: HashSet<usize> = (0..point_count(order)).collect();
        assert_eq!(union, expected, "order {order}");
    }
}

#[test]
fn every_point_lies_on_order_plus_one_cards() {
    // The dual incidence count: q + 1 lines through every point.
    for order in [2, 3, 5, 7] {
        let deck = build(order);
        for symbol in 0..point_count(order) {
            let on = deck.cards().iter().filter(|c| c.contains(symbol)).count();
            assert_eq!(on, order + 1, "order {order}, symbol {symbol}");
        }
    }
}

fn order_strategy() -> impl Strategy<Value = usize> {
    prop::sample::select(ORDERS.to_vec())
}

proptest! {
    /// from_index inverts index for every point of every tested order.
    #[test]
    fn prop_point_index_round_trip(order in order_strategy(), raw in 0usize..1000) {
        let index = raw % point_count(order);
        let coord = PointCoord::from_index(index, order);
        prop_assert_eq!(coord.map(|c| c.index(order)), Some(index));
    }

    /// Indices past the point total have no coordinate form.
    #[test]
    fn prop_out_of_range_index_rejected(order in order_strategy(), past in 0usize..100) {
        let index = point_count(order) + past;
        prop_assert_eq!(PointCoord::from_index(index, order), None);
    }

    /// Any two distinct cards of the reference deck share exactly one symbol.
    #[test]
    fn prop_reference_pair_intersection(i in 0usize..57, j in 0usize..57) {
        prop_assume!(i != j);
        let deck = build(7);
        let a: HashSet<usize> = deck.cards()[i].symbols().iter().copied().collect();
        let shared = deck.cards()[j]
            .symbols()
            .iter()
            .filter(|&&s| a.contains(&s))
            .count();
        prop_assert_eq!(shared, 1);
    }
}
