//! Deal command handler.
//!
//! Deals a single five-card hand from a fresh 52-card deck (or takes one of
//! the engine's fixed hands), prints the cards and reports the category.

use crate::cli::HandFixture;
use crate::config::OutputFormat;
use crate::error::CliError;
use crate::ui;
use fivecard_engine::deck::Deck;
use fivecard_engine::fixtures::Fixture;
use std::io::Write;
use tracing::info;

/// Handle the deal command.
///
/// With a fixture, the fixed hand is reported and any seed is ignored.
/// Otherwise a seed is drawn at random when none is given, so that every
/// deal can be reproduced from its JSON report.
///
/// # Errors
///
/// Returns `CliError::Io` if writing to either stream fails.
pub fn handle_deal_command(
    seed: Option<u64>,
    fixture: Option<HandFixture>,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(f) = fixture {
        if seed.is_some() {
            ui::warn_parameter_unused(err, "seed", "when --fixture is given")?;
        }
        let fixture = Fixture::from(f);
        info!(?fixture, "using fixed hand");
        return super::write_hand_report(out, &fixture.hand(), None, format);
    }

    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "dealing hand");
    let hand = Deck::new().deal_seeded(seed);
    super::write_hand_report(out, &hand, Some(seed), format)
}
