//! Error definitions.
//!
//! This module defines the failures a generation pass can hit. It provides:
//! 1. **I/O Errors:** Corpus files that cannot be created or written.
//! 2. **Configuration Errors:** Configuration files that cannot be read or parsed.
//!
//! Encoding itself never fails: oversized fields are truncated by the packer,
//! and illegal operand shapes are programming errors that panic in the
//! selector.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring a pass or emitting its corpora.
#[derive(Debug, Error)]
pub enum Error {
    /// A corpus file could not be created or truncated.
    #[error("failed to create {}: {source}", path.display())]
    Create {
        /// Path of the file that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing or flushing a corpus failed.
    #[error("failed to write corpus: {0}")]
    Write(#[from] io::Error),

    /// A configuration file could not be read.
    #[error("failed to read configuration {}: {source}", path.display())]
    ReadConfig {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Configuration JSON was malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
