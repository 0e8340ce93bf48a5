//! Error types for the ClassForge CLI.

use std::io;

use thiserror::Error;

use classforge::ClassForgeError;

use crate::config::ConfigError;

/// Errors surfaced by the CLI host adapter.
///
/// The `Document` variant keeps the raw document text alongside the parse
/// error so the reporter can show a labeled source snippet.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse snapshot document: {err}")]
    Document {
        err: serde_json::Error,
        src: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ClassForgeError),
}

impl CliError {
    /// Create a new `Document` error with the associated document text.
    pub fn new_document_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Document {
            err,
            src: src.into(),
        }
    }
}
