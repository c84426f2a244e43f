//! Application layer errors

use thiserror::Error;

/// Top-level errors surfaced while starting or running the relay
#[derive(Error, Debug)]
pub enum RelayServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Validation failures for an inbound command.
///
/// The display text is sent back verbatim as the body of the 400 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Missing required parameter \"{0}\"")]
    MissingParameter(String),

    #[error("Command \"{0}\" not recognized")]
    UnknownCommand(String),
}

/// Outbound delivery errors, only ever logged
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Callback rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
