//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use fivecard_engine::fixtures::Fixture;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "fivecard",
    version,
    about = "Deal and classify five-card poker hands"
)]
pub struct FivecardCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal one hand from a fresh deck and classify it
    Deal {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Use a fixed hand instead of dealing
        #[arg(long, value_enum)]
        fixture: Option<HandFixture>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Classify five cards given as tokens such as `AS 10h Td 7c 2d`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Deal many independent hands and tally their categories
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Command-line names for the engine's fixed hands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum HandFixture {
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    Pair,
}

impl From<HandFixture> for Fixture {
    fn from(f: HandFixture) -> Self {
        match f {
            HandFixture::StraightFlush => Fixture::StraightFlush,
            HandFixture::FourOfAKind => Fixture::FourOfAKind,
            HandFixture::FullHouse => Fixture::FullHouse,
            HandFixture::Flush => Fixture::Flush,
            HandFixture::Straight => Fixture::Straight,
            HandFixture::ThreeOfAKind => Fixture::ThreeOfAKind,
            HandFixture::TwoPair => Fixture::TwoPair,
            HandFixture::Pair => Fixture::Pair,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_names_are_kebab_case() {
        let cli = FivecardCli::try_parse_from(["fivecard", "deal", "--fixture", "four-of-a-kind"])
            .unwrap();
        match cli.cmd {
            Commands::Deal { fixture, .. } => assert_eq!(fixture, Some(HandFixture::FourOfAKind)),
            other => panic!("expected deal, got {other:?}"),
        }
    }

    #[test]
    fn sim_rejects_zero_hands() {
        assert!(FivecardCli::try_parse_from(["fivecard", "sim", "--hands", "0"]).is_err());
        assert!(FivecardCli::try_parse_from(["fivecard", "sim", "--hands", "1"]).is_ok());
    }

    #[test]
    fn eval_requires_cards() {
        assert!(FivecardCli::try_parse_from(["fivecard", "eval"]).is_err());
    }

    #[test]
    fn all_subcommands_parse() {
        let commands = vec![
            vec!["fivecard", "deal"],
            vec!["fivecard", "deal", "--seed", "1", "--format", "json"],
            vec!["fivecard", "eval", "AS", "KS", "QS", "JS", "TS"],
            vec!["fivecard", "sim", "--hands", "10", "--seed", "3"],
            vec!["fivecard", "cfg"],
        ];
        for args in commands {
            assert!(FivecardCli::try_parse_from(&args).is_ok(), "{args:?}");
        }
    }
}
