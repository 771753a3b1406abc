//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>` so errors can be
//! propagated with `?` and mapped to an exit code in one place.

use fivecard_engine::errors::EngineError;
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Card or hand rejected by the engine
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
