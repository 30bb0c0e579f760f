//! Error types for the globo_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for globo_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error (bad routine/workout definition)
    #[error("Catalog validation error: {0}")]
    Catalog(String),

    /// Unknown weekly program name
    #[error("Unknown program: {0}")]
    UnknownProgram(String),

    /// HTTP transport error (Todoist sink)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// SMTP transport error (email sink)
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Email message construction error
    #[error("Email error: {0}")]
    Email(#[from] lettre::error::Error),

    /// Email address parse error
    #[error("Address error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Delivery failed for a reason other than transport
    #[error("Delivery error: {0}")]
    Delivery(String),
}
