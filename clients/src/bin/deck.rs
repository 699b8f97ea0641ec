//! `spotit-deck` — builds a Spot-it! deck and prints it as glyph cards.
//!
//! **Usage:**
//! ```
//! spotit-deck [--order <q>] [--json]
//! ```
//!
//! `--json` emits the deck document instead of glyph rows. Build-time
//! self-check findings, if any, go to stderr; the deck prints regardless.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::Result;
use clap::Parser;
use spotit_clients::render;
use spotit_plane::{serializer, Deck};

/// Build and print a Spot-it! deck.
#[derive(Parser)]
#[command(
    name = "spotit-deck",
    about = "Build a Spot-it! deck from the projective plane of a prime order"
)]
struct Args {
    /// Plane order (prime). 7 is the classic 57-card deck.
    #[arg(long, default_value_t = 7)]
    order: usize,

    /// Emit the deck as a JSON document instead of glyph rows.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let built = Deck::build(args.order)?;
    for diagnostic in &built.diagnostics {
        eprintln!("self-check: {diagnostic}");
    }

    if args.json {
        let doc = serializer::json::to_json(&built.deck);
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!(
            "Deck of order {}: {} cards, {} symbols per card",
            args.order,
            built.deck.len(),
            args.order + 1
        );
        println!();
        println!("{}", render::deck_listing(&built.deck));
    }

    Ok(())
}
