//! Error and result types shared by the pipeline, the relay server and the CLI.

use std::io;

use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
pub enum Error {
    /// An HTTP request could not be sent or its body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The remote answered, but not with a success status.
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    /// A URL assembled from configuration is not valid.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    /// No station with this id is configured.
    #[error("unknown station '{0}'")]
    UnknownStation(String),
    /// Loading the configuration failed.
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Serialising the configuration failed.
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    /// Serialising a track list failed.
    #[error("failed to serialize tracks: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O error (terminal, log file, listening socket).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A logger was already installed.
    #[error("failed to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Convenience type.
pub type Result<T> = std::result::Result<T, Error>;
