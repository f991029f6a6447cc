//! Error types for curlkit

use thiserror::Error;

/// Main error type for curlkit
#[derive(Error, Debug)]
pub enum CurlkitError {
    #[error("cURL command is empty")]
    EmptyCommand,

    #[error("Command must start with \"curl\"")]
    NotCurl,

    #[error("No URL found in cURL command")]
    NoUrl,

    #[error("Failed to parse cURL command: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

impl CurlkitError {
    /// Whether this is one of the named parse failures a user can fix by
    /// editing the pasted command.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::EmptyCommand | Self::NotCurl | Self::NoUrl)
    }
}

pub type Result<T> = std::result::Result<T, CurlkitError>;
