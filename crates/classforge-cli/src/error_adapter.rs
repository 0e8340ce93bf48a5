//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the CLI's standard error types
//! and miette's rich diagnostic formatting. Document parse errors carry the
//! original text and a line/column position, which the adapter turns into a
//! labeled source snippet; every other error renders as a plain message.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use crate::error::CliError;

/// Adapter wrapping a [`CliError`] for miette rendering.
pub struct ErrorAdapter<'a> {
    /// The wrapped error
    err: &'a CliError,
}

/// Wrap a CLI error for rendering with a [`miette::GraphicalReportHandler`].
pub fn to_reportable(err: &CliError) -> ErrorAdapter<'_> {
    ErrorAdapter { err }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.err {
            CliError::Document { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let CliError::Document { err, src } = self.err else {
            return None;
        };

        let offset = offset_of(src, err.line(), err.column());
        let length = if offset < src.len() { 1 } else { 0 };
        let label = LabeledSpan::new_primary_with_span(
            Some("invalid document syntax here".to_string()),
            (offset, length),
        );
        Some(Box::new(std::iter::once(label)))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            CliError::Document { .. } => Some(Box::new(
                "the input must be a JSON snapshot document with `elements` and `selection`",
            )),
            _ => None,
        }
    }
}

/// Converts a one-based line/column position into a byte offset into `src`.
fn offset_of(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}
