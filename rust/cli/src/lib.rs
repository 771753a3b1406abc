//! # fivecard CLI Library
//!
//! Command-line front end for the five-card hand evaluation engine: deal a
//! hand, classify cards typed by the user, or tally categories over many deals.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let args = ["fivecard", "eval", "4H", "5H", "6H", "7H", "8H"];
//! let mut out = Vec::new();
//! let code = fivecard_cli::run(args, &mut out, &mut std::io::sink());
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().ends_with("Found Straight Flush: To Eight\n"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal one hand (or a fixed hand) and classify it
//! - `eval`: Classify five cards given on the command line
//! - `sim`: Tally hand categories over many independent deals
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
#[cfg(test)]
mod test_env;
pub mod ui;

use cli::{Commands, FivecardCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_sim_command,
};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Returns the process exit code: `0` for success, `2` for errors.
/// Values not given on the command line fall back to the resolved
/// configuration (see [`config::load_with_sources`]).
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "eval", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FivecardCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = writeln!(err, "{}", e);
                    let _ = writeln!(err, "Usage: fivecard <command> [options]\n");
                    let _ = writeln!(err, "Commands:");
                    for c in COMMANDS {
                        let _ = writeln!(err, "  {}", c);
                    }
                    let _ = writeln!(err, "\nFor full help, run: fivecard --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = dispatch(cli.cmd, out, err);
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

/// Runs a parsed command. Commands other than `cfg` take their defaults
/// from the resolved configuration.
fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Deal {
            seed,
            fixture,
            format,
        } => {
            let cfg = config::load()?;
            handle_deal_command(
                // fixtures never take the configured seed
                if fixture.is_some() { seed } else { seed.or(cfg.seed) },
                fixture,
                format.unwrap_or(cfg.format),
                out,
                err,
            )
        }
        Commands::Eval { cards, format } => {
            let cfg = config::load()?;
            handle_eval_command(&cards, format.unwrap_or(cfg.format), out)
        }
        Commands::Sim {
            hands,
            seed,
            format,
        } => {
            let cfg = config::load()?;
            handle_sim_command(
                hands.unwrap_or(cfg.sim_hands),
                seed.or(cfg.seed),
                format.unwrap_or(cfg.format),
                out,
            )
        }
    }
}
