//! Command handler modules for the fivecard CLI.
//!
//! Each command lives in its own module with a consistent shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated via the `CliError` enum

mod cfg;
mod deal;
mod eval;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use sim::handle_sim_command;

use std::io::Write;

use fivecard_engine::classify::Classification;
use fivecard_engine::hand::Hand;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CliError;

#[derive(Serialize)]
struct HandReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    cards: Vec<String>,
    #[serde(flatten)]
    result: &'a Classification,
}

/// Prints one card per line followed by `Found <Category>: <Descriptor>`,
/// or the same content as a single JSON object.
fn write_hand_report(
    out: &mut dyn Write,
    hand: &Hand,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let result = hand.classify();
    match format {
        OutputFormat::Text => {
            for card in hand.cards() {
                writeln!(out, "{}", card)?;
            }
            writeln!(out, "{}", result)?;
        }
        OutputFormat::Json => {
            let report = HandReport {
                seed,
                cards: hand.cards().iter().map(ToString::to_string).collect(),
                result: &result,
            };
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        }
    }
    Ok(())
}
