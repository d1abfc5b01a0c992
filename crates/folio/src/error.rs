//! # FOLIO Error Types
//!
//! Only the edges can fail: reading the config file and drawing entropy for
//! the default seed. Everything per-frame is infallible.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up a page.
#[derive(Error, Debug)]
pub enum FxError {
    /// Config file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`FxConfig`](crate::FxConfig).
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but a value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No seed was configured and the platform had no entropy to offer.
    #[error("entropy unavailable: {0}")]
    Entropy(String),
}

/// Result type for page setup.
pub type FxResult<T> = Result<T, FxError>;
