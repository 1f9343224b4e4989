use raises::{ConfigError, RaisesError};
use thiserror::Error;

/// Everything the command line can fail on.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid die value: {0}. Must be between 1 and 10.")]
    InvalidToken(String),

    #[error("No dice provided")]
    NoDice,

    #[error("Give either dice or --roll, not both")]
    ConflictingInput,

    #[error(transparent)]
    Solver(#[from] RaisesError),

    #[error("{path}: {source}")]
    Config { path: String, source: ConfigError },

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
