//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while running rules over a file
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to probe for `{name}` next to {}", path.display())]
    Io {
        path: PathBuf,
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading lint configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    #[error("invalid options for `{rule}`: {source}")]
    InvalidOptions {
        rule: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for `{rule}`: {message}")]
    InvalidValue { rule: &'static str, message: String },

    #[error("malformed lint configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure to resolve static type information for an expression
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeQueryError {
    #[error("`{0}` does not resolve to a declaration")]
    Unresolved(String),

    #[error("no type information for {0}")]
    Unsupported(&'static str),

    #[error("type resolution exceeded depth {0}")]
    DepthExceeded(usize),
}
