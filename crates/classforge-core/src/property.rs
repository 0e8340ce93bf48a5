//! Flat property lists and the nested property tree built from them.
//!
//! Host models expose an element's data as a flat, ordered list of
//! `(path, scalar)` pairs, where each path is a slash-delimited string such
//! as `attributes/0/name`. This module reconstructs the nested structure
//! those paths describe.
//!
//! # Overview
//!
//! - [`Scalar`] - A single leaf value from the host model
//! - [`PropertyNode`] - A node of the reconstructed tree: scalar, map, or
//!   sequence
//! - [`build_tree`] - Merges a flat pair list into one tree
//!
//! # Path semantics
//!
//! Each path segment is either a map key or a sequence index; a segment is
//! an index exactly when its text is non-empty and entirely ASCII digits.
//! The kind of a newly created intermediate node is decided by the segment
//! that follows it, and sequence gaps are filled with empty placeholders of
//! the discovered kind.
//!
//! # Example
//!
//! ```
//! use classforge_core::property::{Scalar, build_tree};
//!
//! let pairs = vec![
//!     ("name".to_string(), Scalar::Text("Foo".to_string())),
//!     ("attributes/0/name".to_string(), Scalar::Text("count".to_string())),
//! ];
//! let tree = build_tree(&pairs);
//! assert_eq!(tree.at("attributes/0/name").and_then(|n| n.as_str()), Some("count"));
//! ```

use std::fmt;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Largest sequence index a property path may address.
///
/// Paths with larger indices are dropped during tree building instead of
/// allocating that many filler entries; such paths only occur in malformed
/// source models.
pub const MAX_INDEX: usize = 4096;

// =============================================================================
// Scalar values
// =============================================================================

/// A single leaf value from the host model's flat property list.
///
/// The untagged serde representation lets snapshot documents write plain
/// JSON scalars (`null`, booleans, integers, strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// An absent or cleared value.
    Null,
    /// A boolean flag, e.g. the `static` or `abstract` properties.
    Bool(bool),
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A text value.
    Text(String),
}

impl Scalar {
    /// Returns the text content if this is a [`Scalar::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns whether the value counts as "set" in the source model.
    ///
    /// `Null` is false, booleans are themselves, integers are true when
    /// non-zero, and text is true when non-empty. Classifier defaults key
    /// off this notion rather than strict booleans, because host models
    /// store flags in all of these shapes.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Bool(flag) => *flag,
            Scalar::Int(value) => *value != 0,
            Scalar::Float(value) => *value != 0.0,
            Scalar::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(flag) => write!(f, "{flag}"),
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(text) => write!(f, "{text}"),
        }
    }
}

// =============================================================================
// Path segments
// =============================================================================

/// One segment of a slash-delimited property path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// A map key.
    Key(String),
    /// A sequence index.
    Index(usize),
}

impl Segment {
    /// Classifies a raw segment: non-empty all-digit text is an index,
    /// anything else is a key. Digit runs too large for `usize` fall back
    /// to keys rather than failing.
    fn parse(text: &str) -> Self {
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            match text.parse::<usize>() {
                Ok(index) => Segment::Index(index),
                Err(_) => Segment::Key(text.to_string()),
            }
        } else {
            Segment::Key(text.to_string())
        }
    }

    fn parse_path(path: &str) -> Vec<Segment> {
        path.split('/').map(Segment::parse).collect()
    }
}

// =============================================================================
// Property tree nodes
// =============================================================================

/// A node in the reconstructed property tree.
///
/// Map keys keep their insertion order; sequence order reflects numeric
/// index order, independent of the order paths arrived in.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyNode {
    /// A leaf value.
    Scalar(Scalar),
    /// A mapping from segment names to child nodes.
    Map(IndexMap<String, PropertyNode>),
    /// An ordered sequence of child nodes.
    Seq(Vec<PropertyNode>),
}

impl PropertyNode {
    /// Looks up a direct child by map key. Returns `None` when this node is
    /// not a map.
    pub fn get(&self, key: &str) -> Option<&PropertyNode> {
        match self {
            PropertyNode::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Walks a slash-delimited path from this node, using the same segment
    /// rules as [`build_tree`]. Returns `None` for any missing position or
    /// node-kind mismatch along the way.
    pub fn at(&self, path: &str) -> Option<&PropertyNode> {
        let mut node = self;
        for segment in Segment::parse_path(path) {
            node = match (&segment, node) {
                (Segment::Key(key), PropertyNode::Map(map)) => map.get(key)?,
                (Segment::Index(index), PropertyNode::Seq(seq)) => seq.get(*index)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Returns the text content of a leaf text node.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Returns the scalar value if this node is a leaf.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            PropertyNode::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the children of a sequence node, or an empty slice for any
    /// other node kind. Consumers that expect a sequence degrade to "no
    /// entries" on malformed data.
    pub fn as_seq(&self) -> &[PropertyNode] {
        match self {
            PropertyNode::Seq(seq) => seq,
            _ => &[],
        }
    }

    /// Source-model truthiness: leaf scalars use [`Scalar::is_truthy`],
    /// containers are true when non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyNode::Scalar(scalar) => scalar.is_truthy(),
            PropertyNode::Map(map) => !map.is_empty(),
            PropertyNode::Seq(seq) => !seq.is_empty(),
        }
    }
}

// =============================================================================
// Tree building
// =============================================================================

/// Merges a flat, ordered list of `(path, scalar)` pairs into one property
/// tree. The root is always a map.
///
/// Pairs are processed in input order and the final path segment overwrites
/// any earlier value at the same position. Collisions between node kinds
/// (a position used as both leaf and container, or as both map and
/// sequence) resolve by last write wins: the later pair replaces the
/// conflicting node with whatever kind its path requires.
pub fn build_tree(pairs: &[(String, Scalar)]) -> PropertyNode {
    let mut root = PropertyNode::Map(IndexMap::new());
    for (path, value) in pairs {
        let segments = Segment::parse_path(path);
        if let Some(index) = oversized_index(&segments) {
            debug!(path, index; "Skipping property path with out-of-range index");
            continue;
        }
        insert_at(&mut root, &segments, value);
    }
    root
}

fn oversized_index(segments: &[Segment]) -> Option<usize> {
    segments.iter().find_map(|segment| match segment {
        Segment::Index(index) if *index > MAX_INDEX => Some(*index),
        _ => None,
    })
}

/// A filler node for a position whose value has not arrived yet: an empty
/// container of the kind the remaining path implies, or `Null` when the
/// position is terminal.
fn placeholder_for(rest: &[Segment]) -> PropertyNode {
    match rest.first() {
        None => PropertyNode::Scalar(Scalar::Null),
        Some(Segment::Index(_)) => PropertyNode::Seq(Vec::new()),
        Some(Segment::Key(_)) => PropertyNode::Map(IndexMap::new()),
    }
}

fn insert_at(node: &mut PropertyNode, segments: &[Segment], value: &Scalar) {
    let Some((segment, rest)) = segments.split_first() else {
        *node = PropertyNode::Scalar(value.clone());
        return;
    };

    match segment {
        Segment::Key(key) => {
            if !matches!(node, PropertyNode::Map(_)) {
                *node = PropertyNode::Map(IndexMap::new());
            }
            if let PropertyNode::Map(map) = node {
                let child = map
                    .entry(key.clone())
                    .or_insert_with(|| placeholder_for(rest));
                insert_at(child, rest, value);
            }
        }
        Segment::Index(index) => {
            if !matches!(node, PropertyNode::Seq(_)) {
                *node = PropertyNode::Seq(Vec::new());
            }
            if let PropertyNode::Seq(seq) = node {
                while seq.len() <= *index {
                    seq.push(placeholder_for(rest));
                }
                insert_at(&mut seq[*index], rest, value);
            }
        }
    }
}
