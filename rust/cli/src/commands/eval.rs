//! Eval command handler: classify five cards given on the command line.

use crate::config::OutputFormat;
use crate::error::CliError;
use fivecard_engine::cards::Card;
use fivecard_engine::hand::Hand;
use std::io::Write;

/// Handle the eval command.
///
/// Tokens may be separate arguments or comma-separated (`"AS,KS"`).
///
/// # Errors
///
/// Returns `CliError::Engine` for an unparseable token, a duplicate card,
/// or a card count other than five.
pub fn handle_eval_command(
    tokens: &[String],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = tokens
        .iter()
        .flat_map(|t| t.split(','))
        .filter(|t| !t.trim().is_empty())
        .map(str::parse::<Card>)
        .collect::<Result<Vec<_>, _>>()?;
    let hand = Hand::try_from(cards)?;
    super::write_hand_report(out, &hand, None, format)
}
