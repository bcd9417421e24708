//! Error types for dataset loading, remote summaries, and configuration

use thiserror::Error;

/// Errors while fetching or transforming the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to fetch dataset from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("dataset request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read dataset body")]
    Body(#[source] reqwest::Error),

    #[error("malformed CSV on line {line}: {reason}")]
    Csv { line: usize, reason: String },

    #[error("dataset has no header row")]
    MissingHeader,

    #[error("dataset is missing required column '{column}'")]
    MissingColumn { column: &'static str },
}

/// Errors while requesting a remote summary
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("summary request failed")]
    Transport(#[source] reqwest::Error),

    #[error("summary endpoint reported status {status}")]
    Status { status: u16 },

    #[error("summary response had no content")]
    EmptyBody,

    #[error("failed to decode summary response")]
    Decode(#[source] reqwest::Error),
}

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}
