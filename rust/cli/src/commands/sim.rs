//! Sim command handler: tally categories over many independent deals.
//!
//! Every hand is sampled from the full 52-card deck, so hands are independent
//! and the tally is reproducible for a given seed.

use std::collections::HashMap;
use std::io::Write;

use fivecard_engine::cards::Card;
use fivecard_engine::classify::Category;
use fivecard_engine::deck::Deck;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::{format_card, format_cards};

#[derive(Serialize)]
struct CategoryCount {
    category: &'static str,
    count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    example: Option<Vec<String>>,
}

#[derive(Serialize)]
struct SimSummary {
    hands: u32,
    seed: u64,
    categories: Vec<CategoryCount>,
}

/// Handle the sim command.
///
/// Text output lists every category in precedence order with its count,
/// share of all hands, and the first hand that landed in it.
pub fn handle_sim_command(
    hands: u32,
    seed: Option<u64>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be > 0".into()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    info!(hands, seed, "starting simulation");

    let deck = Deck::new();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut counts: HashMap<Category, u32> = HashMap::new();
    let mut examples: HashMap<Category, Vec<Card>> = HashMap::new();
    for _ in 0..hands {
        let hand = deck.deal_with(&mut rng);
        let category = hand.classify().category;
        *counts.entry(category).or_insert(0) += 1;
        examples
            .entry(category)
            .or_insert_with(|| hand.cards().to_vec());
    }

    match format {
        OutputFormat::Text => {
            writeln!(out, "Simulated {} hands (seed {})", hands, seed)?;
            for category in Category::PRECEDENCE {
                let n = counts.get(&category).copied().unwrap_or(0);
                let pct = f64::from(n) * 100.0 / f64::from(hands);
                let example = examples
                    .get(&category)
                    .map(|cards| format_cards(cards))
                    .unwrap_or_default();
                writeln!(
                    out,
                    "{:<16}{:>8}{:>9.3}%  {}",
                    category.name(),
                    n,
                    pct,
                    example
                )?;
            }
        }
        OutputFormat::Json => {
            let summary = SimSummary {
                hands,
                seed,
                categories: Category::PRECEDENCE
                    .iter()
                    .map(|c| CategoryCount {
                        category: c.name(),
                        count: counts.get(c).copied().unwrap_or(0),
                        example: examples
                            .get(c)
                            .map(|cards| cards.iter().map(format_card).collect()),
                    })
                    .collect(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
    }
    Ok(())
}
