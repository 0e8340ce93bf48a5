//! The normalized class model consumed by the renderer.
//!
//! A [`ClassModel`] is built once per export from one element snapshot,
//! mutated only while the classifier fills it in, and discarded after
//! rendering. It carries no identity beyond the single export call.
//!
//! # Overview
//!
//! - [`ClassKind`] - class, interface, abstract class, or enum
//! - [`Visibility`] - normalized member visibility, including the
//!   *unspecified* case that suppresses the keyword entirely
//! - [`Attribute`], [`Constructor`], [`Method`], [`Parameter`] - semantic
//!   member descriptors
//! - [`ClassModel`] - the assembled class

use std::fmt;

// =============================================================================
// Kind and visibility
// =============================================================================

/// The kind of class-like declaration being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassKind {
    /// A plain class.
    #[default]
    Class,
    /// An abstract class.
    AbstractClass,
    /// An interface.
    Interface,
    /// An enum.
    Enum,
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            ClassKind::Class => "class",
            ClassKind::AbstractClass => "abstract class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
        };
        write!(f, "{keyword}")
    }
}

/// Normalized member visibility.
///
/// `Unspecified` is not a synonym for package-private: it records that the
/// source model explicitly opted out of a visibility keyword, so rendering
/// emits none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// No keyword is emitted for this member.
    Unspecified,
}

impl Visibility {
    /// Returns the Java keyword for this visibility, or `None` when the
    /// keyword is suppressed.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Visibility::Public => Some("public"),
            Visibility::Protected => Some("protected"),
            Visibility::Private => Some("private"),
            Visibility::Unspecified => None,
        }
    }
}

// =============================================================================
// Member descriptors
// =============================================================================

/// A classified field of the class.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// Field name.
    pub name: String,
    /// Declared type; `None` renders as the placeholder token.
    pub ty: Option<String>,
    /// Normalized visibility.
    pub visibility: Visibility,
    /// Whether the field is static (source models default this to true).
    pub is_static: bool,
    /// Whether the field carries the `final` stereotype.
    pub is_final: bool,
    /// Optional initializer literal, rendered verbatim.
    pub default: Option<String>,
}

/// A single operation parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Declared type; `None` renders as the placeholder token.
    pub ty: Option<String>,
}

/// A classified constructor.
#[derive(Debug, Clone)]
pub struct Constructor {
    /// Normalized visibility (suppressed when the class is an enum).
    pub visibility: Visibility,
    /// Parameters in declared order.
    pub parameters: Vec<Parameter>,
}

/// A classified method.
#[derive(Debug, Clone)]
pub struct Method {
    /// Method name.
    pub name: String,
    /// Declared return type; `None` renders as `void`.
    pub return_type: Option<String>,
    /// Normalized visibility (suppressed when the class is an interface).
    pub visibility: Visibility,
    /// Whether the method is static (source models default this to false).
    pub is_static: bool,
    /// Parameters in declared order.
    pub parameters: Vec<Parameter>,
}

// =============================================================================
// Class model
// =============================================================================

/// The assembled class: kind, name, relationships, and ordered members.
///
/// Member groups keep the encounter order of the source model; the
/// renderer emits the groups in a fixed order (enum constants, attributes,
/// constructors, methods).
#[derive(Debug, Clone)]
pub struct ClassModel {
    kind: ClassKind,
    name: String,
    super_class: Option<String>,
    interfaces: Vec<String>,
    enum_constants: Vec<String>,
    attributes: Vec<Attribute>,
    constructors: Vec<Constructor>,
    methods: Vec<Method>,
}

impl ClassModel {
    /// Creates an empty model of kind [`ClassKind::Class`] with the given
    /// name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: ClassKind::default(),
            name: name.into(),
            super_class: None,
            interfaces: Vec::new(),
            enum_constants: Vec::new(),
            attributes: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Returns the class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the class kind.
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Marks the model as an interface.
    pub fn make_interface(&mut self) {
        self.kind = ClassKind::Interface;
    }

    /// Marks the model as an abstract class.
    pub fn make_abstract(&mut self) {
        self.kind = ClassKind::AbstractClass;
    }

    /// Marks the model as an enum.
    pub fn make_enum(&mut self) {
        self.kind = ClassKind::Enum;
    }

    /// Sets the effective superclass; a later call replaces an earlier one.
    pub fn set_super_class(&mut self, name: impl Into<String>) {
        self.super_class = Some(name.into());
    }

    /// Returns the superclass, if any.
    pub fn super_class(&self) -> Option<&str> {
        self.super_class.as_deref()
    }

    /// Appends an implemented interface name.
    pub fn add_interface(&mut self, name: impl Into<String>) {
        self.interfaces.push(name.into());
    }

    /// Returns the implemented interfaces in insertion order.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    /// Appends an enum constant name.
    pub fn add_enum_constant(&mut self, name: impl Into<String>) {
        self.enum_constants.push(name.into());
    }

    /// Returns the enum constants in insertion order.
    pub fn enum_constants(&self) -> &[String] {
        &self.enum_constants
    }

    /// Appends an attribute.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Returns the attributes in insertion order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Appends a constructor.
    pub fn add_constructor(&mut self, constructor: Constructor) {
        self.constructors.push(constructor);
    }

    /// Returns the constructors in insertion order.
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// Appends a method.
    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    /// Returns the methods in insertion order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Returns whether any attribute, constructor, or method is present.
    /// Decides the terminator of the last enum constant.
    pub fn has_body_members(&self) -> bool {
        !self.attributes.is_empty() || !self.constructors.is_empty() || !self.methods.is_empty()
    }
}
