//! Per-attribute classification.

use classforge_core::{
    model::{Attribute, Visibility},
    property::PropertyNode,
};

use super::{truthy_text, visibility_of};

/// A pure view over one attribute's property submap.
///
/// All readers degrade on missing or oddly typed keys: the visibility falls
/// back to private, the static flag defaults to *true* (an intentional
/// asymmetry with operations that the host model format fixed long ago),
/// and empty type or default text reads as absent.
pub(super) struct AttributeInfo<'t> {
    member: &'t PropertyNode,
}

impl<'t> AttributeInfo<'t> {
    pub(super) fn new(member: &'t PropertyNode) -> Self {
        Self { member }
    }

    pub(super) fn name(&self) -> Option<&'t str> {
        self.member.get("name").and_then(PropertyNode::as_str)
    }

    /// An attribute can stand in for an enum constant when it is marked
    /// public (raw `+` glyph, not the normalized visibility) and its
    /// `static` flag is explicitly set and truthy. The missing-key default
    /// of true shapes only the rendered attribute, never candidacy.
    /// Whether a candidate actually becomes a constant is the owning class
    /// kind's call.
    pub(super) fn is_enum_candidate(&self) -> bool {
        self.member.get("visibility").and_then(PropertyNode::as_str) == Some("+")
            && self
                .member
                .get("static")
                .is_some_and(PropertyNode::is_truthy)
    }

    fn visibility(&self) -> Visibility {
        visibility_of(self.member)
    }

    fn is_static(&self) -> bool {
        self.member
            .get("static")
            .map(PropertyNode::is_truthy)
            .unwrap_or(true)
    }

    fn is_final(&self) -> bool {
        self.member.get("stereotype").and_then(PropertyNode::as_str) == Some("final")
    }

    fn ty(&self) -> Option<String> {
        truthy_text(self.member, "type")
    }

    /// The initializer literal: any truthy scalar, rendered in its display
    /// form. Falsy values (missing, null, empty text, zero, false) read as
    /// "no default".
    fn default_value(&self) -> Option<String> {
        truthy_text(self.member, "default")
    }

    /// Finalizes the descriptor with its resolved name.
    pub(super) fn into_attribute(self, name: String) -> Attribute {
        Attribute {
            name,
            ty: self.ty(),
            visibility: self.visibility(),
            is_static: self.is_static(),
            is_final: self.is_final(),
            default: self.default_value(),
        }
    }
}
