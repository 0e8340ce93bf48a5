//! Snapshot document parsing and resolution.
//!
//! The CLI stands in for the live diagram host: instead of a selection in
//! a running editor, it reads a JSON *snapshot document* describing the
//! model elements, their flat property lists, their connections, and which
//! element ids are selected. This module parses that document and resolves
//! the selected ids into the pure [`ElementSnapshot`] shape the pipeline
//! consumes.
//!
//! # Document format
//!
//! ```json
//! {
//!   "elements": [
//!     {
//!       "id": "e1",
//!       "type": "class",
//!       "values": [["name", "Foo"], ["attributes/0/name", "count"]],
//!       "connections": [
//!         {"type": "generalisation", "source": "e1", "destination": "e2"}
//!       ]
//!     }
//!   ],
//!   "selection": ["e1"]
//! }
//! ```
//!
//! Connections are resolved per element: only those whose `source` is the
//! element itself count as outgoing, and each destination id is replaced by
//! an embedded capture of the destination's type and values. Dangling
//! references are skipped with a warning rather than failing the export.

use log::warn;
use serde::Deserialize;

use classforge_core::{
    property::Scalar,
    snapshot::{ConnectionSnapshot, ElementRef, ElementSnapshot},
};

use crate::error::CliError;

/// A parsed snapshot document.
#[derive(Debug, Deserialize)]
pub struct Document {
    /// All model elements of the document.
    #[serde(default)]
    elements: Vec<ElementEntry>,

    /// Ids of the currently selected elements.
    #[serde(default)]
    selection: Vec<String>,
}

/// One model element of a snapshot document.
#[derive(Debug, Deserialize)]
struct ElementEntry {
    /// Stable element id, referenced by connections and the selection.
    id: String,

    /// Type-kind tag (e.g. `class`).
    #[serde(rename = "type")]
    type_name: String,

    /// Flat ordered property list.
    #[serde(default)]
    values: Vec<(String, Scalar)>,

    /// Typed connections this element participates in.
    #[serde(default)]
    connections: Vec<ConnectionEntry>,
}

/// One typed connection between two elements, by id.
#[derive(Debug, Deserialize)]
struct ConnectionEntry {
    /// Connection-kind name (e.g. `generalisation`).
    #[serde(rename = "type")]
    kind: String,

    /// Id of the connection's source element.
    source: String,

    /// Id of the connection's destination element.
    destination: String,
}

impl Document {
    /// Parses a snapshot document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Document`] with the original text attached when
    /// the JSON is malformed, so the reporter can label the offending
    /// position.
    pub fn parse(src: &str) -> Result<Self, CliError> {
        serde_json::from_str(src).map_err(|err| CliError::new_document_error(err, src))
    }

    /// Resolves the selected element ids into pipeline-ready snapshots, in
    /// selection order. Selected ids that name no element are skipped with
    /// a warning.
    pub fn selected_snapshots(&self) -> Vec<ElementSnapshot> {
        self.selection
            .iter()
            .filter_map(|id| {
                let Some(element) = self.find_element(id) else {
                    warn!(id; "Selection references an unknown element");
                    return None;
                };
                Some(self.resolve_element(element))
            })
            .collect()
    }

    fn find_element(&self, id: &str) -> Option<&ElementEntry> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// Captures one element as a snapshot, embedding the destination of
    /// every outgoing connection.
    fn resolve_element(&self, element: &ElementEntry) -> ElementSnapshot {
        let connections = element
            .connections
            .iter()
            .filter(|connection| connection.source == element.id)
            .filter_map(|connection| {
                let Some(destination) = self.find_element(&connection.destination) else {
                    warn!(
                        id = connection.destination,
                        kind = connection.kind;
                        "Connection references an unknown destination element"
                    );
                    return None;
                };
                Some(ConnectionSnapshot::new(
                    connection.kind.clone(),
                    ElementRef::new(destination.type_name.clone(), destination.values.clone()),
                ))
            })
            .collect();

        ElementSnapshot::new(
            element.type_name.clone(),
            element.values.clone(),
            connections,
        )
    }
}
