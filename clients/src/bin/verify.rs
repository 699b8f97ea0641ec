//! `spotit-verify` — builds a deck and runs the conformance suite over it.
//!
//! **Usage:**
//! ```
//! spotit-verify [--order <q>] [--json]
//! ```
//!
//! Exits non-zero if any structural check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use clap::Parser;
use spotit_clients::render;
use spotit_conformance::run_all;
use spotit_plane::Deck;

/// Build a deck and verify its structural invariants.
#[derive(Parser)]
#[command(
    name = "spotit-verify",
    about = "Verify the projective-plane invariants of a Spot-it! deck"
)]
struct Args {
    /// Plane order (prime). 7 is the classic 57-card deck.
    #[arg(long, default_value_t = 7)]
    order: usize,

    /// Emit the verification report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let built = Deck::build(args.order)?;
    let report = run_all(&built.deck);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Spot-it! Deck Verification Report");
        println!("=================================");
        println!();
        for line in render::report_lines(&report) {
            println!("{line}");
        }
        println!();
        println!("{}", render::status_line(&report));
    }

    if !report.all_passed() {
        process::exit(1);
    }
    Ok(())
}
