//! ClassForge Core Types and Definitions
//!
//! This crate provides the foundational types for the ClassForge export
//! pipeline. It includes:
//!
//! - **Properties**: Flat path/value pairs and the nested property tree
//!   built from them ([`property`] module)
//! - **Snapshots**: Immutable captures of a host model element and its
//!   outgoing connections ([`snapshot`] module)
//! - **Class model**: The normalized class description consumed by the
//!   renderer ([`model`] module)

pub mod model;
pub mod property;
pub mod snapshot;
