//! Simulator error definitions.
//!
//! A run fails fast on malformed or missing input; everything else (runaway
//! execution, undefined opcodes, out-of-range accesses) is defined behavior
//! and never surfaces as an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that terminate a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// A file could not be read or written.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// Path of the file involved.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A memory-image line is neither an 8-bit binary literal nor a one- or
    /// two-digit hex byte.
    #[error("{}:{line}: malformed byte literal {text:?}", .path.display())]
    MalformedByte {
        /// Path of the image file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// The offending line content.
        text: String,
    },

    /// The configuration file could not be parsed.
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        /// Path of the TOML file.
        path: PathBuf,
        /// Parse error reported by the TOML deserializer.
        #[source]
        source: toml::de::Error,
    },
}

impl SimError {
    /// Wraps an OS error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
