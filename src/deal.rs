// src/deal.rs
// Card dealing utility: generate bingo cards with stable content-hash IDs,
// printed as tables for handing out or exported as JSON.
//
// CLI Options:
// - --count N: how many cards to deal (default 1)
// - --json: emit JSON instead of printed tables
// - --output FILE: write the JSON to a file instead of stdout

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use bingo::card::{Card, CardGenerator};
use bingo::logging::{log_error_stderr, log_info};
use bingo::terminal::print_card_as_table;

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(about = "Deal bingo cards for a game night")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// How many cards to deal
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Emit the cards as JSON instead of printed tables
    #[arg(long)]
    json: bool,

    /// Write the JSON to this file instead of stdout (implies --json)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Card info structure
#[derive(Debug, Serialize)]
struct CardInfo {
    card_id: String,
    card_data: Card,
}

#[derive(Debug, Serialize)]
struct DealOutput {
    cards: Vec<CardInfo>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = deal(&args) {
        log_error_stderr(&format!("Dealing failed: {e}"));
        std::process::exit(1);
    }
}

fn deal(args: &Args) -> Result<(), Box<dyn Error>> {
    let generator = CardGenerator::new();
    let cards = generator.generate_cards(args.count);

    if args.json || args.output.is_some() {
        let output = DealOutput {
            cards: cards
                .into_iter()
                .map(|card| CardInfo {
                    card_id: card.id_string(),
                    card_data: card.card,
                })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&output)?;

        match &args.output {
            Some(path) => {
                fs::write(path, &json)?;
                log_info(&format!(
                    "Wrote {} cards to {}",
                    output.cards.len(),
                    path.display()
                ));
            }
            None => println!("{json}"),
        }
    } else {
        for (index, card) in cards.iter().enumerate() {
            print_card_as_table(index + 1, &card.id_string(), &card.card);
        }
        println!();
    }

    Ok(())
}
