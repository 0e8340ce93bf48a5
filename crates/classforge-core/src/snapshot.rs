//! Immutable snapshots of host model elements.
//!
//! The export pipeline never touches live host objects. A host integration
//! layer captures each selected element as an [`ElementSnapshot`]: its
//! type-kind tag, its flat property list, and its *outgoing* typed
//! connections with each destination's own type and property list embedded.
//! Everything downstream is a pure function over these snapshots, so
//! concurrent exports on independent snapshots are safe by construction.

use crate::property::Scalar;

/// Type-kind tag of class-like elements in the host model.
pub const CLASS_TYPE_NAME: &str = "class";

/// Connection-kind name of generalisation (inheritance) connections.
pub const GENERALISATION_KIND: &str = "generalisation";

/// Connection-kind name of interface-implementation connections.
pub const IMPLEMENTATION_KIND: &str = "implementation";

/// A snapshot of one host model element.
#[derive(Debug, Clone)]
pub struct ElementSnapshot {
    type_name: String,
    values: Vec<(String, Scalar)>,
    connections: Vec<ConnectionSnapshot>,
}

impl ElementSnapshot {
    /// Creates a snapshot from a type-kind tag, a flat ordered property
    /// list, and the element's outgoing connections.
    pub fn new(
        type_name: impl Into<String>,
        values: Vec<(String, Scalar)>,
        connections: Vec<ConnectionSnapshot>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            values,
            connections,
        }
    }

    /// Returns the element's type-kind tag.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns whether the element is class-like.
    pub fn is_class(&self) -> bool {
        self.type_name == CLASS_TYPE_NAME
    }

    /// Returns the flat ordered property list.
    pub fn values(&self) -> &[(String, Scalar)] {
        &self.values
    }

    /// Returns the element's outgoing connections in encounter order.
    pub fn connections(&self) -> &[ConnectionSnapshot] {
        &self.connections
    }
}

/// One outgoing typed connection of a snapshot element.
#[derive(Debug, Clone)]
pub struct ConnectionSnapshot {
    kind: String,
    destination: ElementRef,
}

impl ConnectionSnapshot {
    /// Creates a connection snapshot from its kind name and destination.
    pub fn new(kind: impl Into<String>, destination: ElementRef) -> Self {
        Self {
            kind: kind.into(),
            destination,
        }
    }

    /// Returns the connection-kind name (e.g. `generalisation`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the destination element.
    pub fn destination(&self) -> &ElementRef {
        &self.destination
    }
}

/// The captured destination of a connection: enough of the destination
/// element to read its type-kind tag and name, without a live reference.
#[derive(Debug, Clone)]
pub struct ElementRef {
    type_name: String,
    values: Vec<(String, Scalar)>,
}

impl ElementRef {
    /// Creates a destination capture from a type-kind tag and property list.
    pub fn new(type_name: impl Into<String>, values: Vec<(String, Scalar)>) -> Self {
        Self {
            type_name: type_name.into(),
            values,
        }
    }

    /// Returns the destination's type-kind tag.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns whether the destination is class-like.
    pub fn is_class(&self) -> bool {
        self.type_name == CLASS_TYPE_NAME
    }

    /// Returns the destination's flat property list.
    pub fn values(&self) -> &[(String, Scalar)] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_kind_detection() {
        let class = ElementSnapshot::new("class", Vec::new(), Vec::new());
        let package = ElementSnapshot::new("package", Vec::new(), Vec::new());

        assert!(class.is_class());
        assert!(!package.is_class());
    }

    #[test]
    fn connection_accessors() {
        let destination = ElementRef::new(
            "class",
            vec![("name".to_string(), Scalar::Text("Base".to_string()))],
        );
        let connection = ConnectionSnapshot::new(GENERALISATION_KIND, destination);

        assert_eq!(connection.kind(), "generalisation");
        assert!(connection.destination().is_class());
    }
}
