//! Error types for ClassForge exports.
//!
//! This module provides the main error type [`ClassForgeError`]. All
//! variants describe conditions detected before or at the very start of a
//! transformation; classification degrades on malformed member data and
//! rendering is a total function, so neither stage fails mid-way.

use thiserror::Error;

/// The main error type for ClassForge export operations.
///
/// The selection variants map one-to-one onto the user-facing precondition
/// messages of the host integration; they are informational and fatal only
/// to the single export attempt that produced them.
#[derive(Debug, Error)]
pub enum ClassForgeError {
    #[error("no class is selected")]
    NoSelection,

    #[error("select just one class ({0} classes selected)")]
    MultipleSelection(usize),

    #[error("selected element is not a class (element kind: `{0}`)")]
    NotAClass(String),

    #[error("class element has no name")]
    MissingClassName,
}
