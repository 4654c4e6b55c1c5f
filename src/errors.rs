// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodenotifyError {
    /// A non-blank, non-comment rule line with fewer than two fields.
    #[error("expected at least two fields for rule in {path}: {line}")]
    MalformedRule { path: String, line: String },

    /// A rule whose pattern could not be turned into a matcher.
    #[error("invalid pattern in {path}: {rule}: {source}")]
    InvalidPattern {
        path: String,
        rule: String,
        #[source]
        source: regex::Error,
    },

    /// The file accessor failed for a reason other than "file absent".
    #[error("error reading {path}: {source}")]
    Access {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CodenotifyError>;
