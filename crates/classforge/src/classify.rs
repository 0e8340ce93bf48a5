//! Member classification: from a property tree to a [`ClassModel`].
//!
//! Classification walks the element snapshot in three passes:
//!
//! 1. The element's own properties decide the class kind (`interface` and
//!    `enum` stereotypes, the `abstract` flag) and its name.
//! 2. Outgoing connections to class-like destinations yield the superclass
//!    (`generalisation`, last one wins) and the implemented-interface list
//!    (`implementation`, in encounter order).
//! 3. Per-member classifiers ([`attribute::AttributeInfo`],
//!    [`operation::OperationInfo`]) derive each attribute's and operation's
//!    semantic role. Both are pure views over the member's property submap.
//!
//! Malformed member data never fails classification: members without a
//! usable name are skipped, missing flags fall back to documented defaults,
//! and non-sequence `attributes`/`operations` nodes read as empty. The one
//! hard requirement is the class name itself.

mod attribute;
mod operation;

use classforge_core::{
    model::{ClassModel, Visibility},
    property::{self, PropertyNode},
    snapshot::{ElementRef, ElementSnapshot, GENERALISATION_KIND, IMPLEMENTATION_KIND},
};
use log::debug;

use crate::ClassForgeError;

use attribute::AttributeInfo;
use operation::OperationInfo;

/// Builds a normalized class model from one element snapshot.
///
/// # Errors
///
/// Returns [`ClassForgeError::MissingClassName`] when the element's
/// property tree has no text `name` value.
pub(crate) fn classify_element(element: &ElementSnapshot) -> Result<ClassModel, ClassForgeError> {
    let props = property::build_tree(element.values());

    let Some(class_name) = props.at("name").and_then(PropertyNode::as_str) else {
        return Err(ClassForgeError::MissingClassName);
    };
    let class_name = class_name.to_string();

    let mut model = ClassModel::new(&class_name);

    // Kind checks run in this order on purpose: a malformed model carrying
    // both an `interface` stereotype and an `abstract` flag resolves the
    // same way the host tool resolves it, with the later check winning.
    if stereotype_is(&props, "interface") {
        model.make_interface();
    }
    if props.at("abstract").is_some_and(PropertyNode::is_truthy) {
        model.make_abstract();
    }
    let is_enum = stereotype_is(&props, "enum");
    if is_enum {
        model.make_enum();
    }

    classify_relations(element, &mut model);

    for member in members_of(&props, "attributes") {
        let info = AttributeInfo::new(member);
        let Some(name) = info.name() else {
            debug!(class_name; "Skipping attribute without a name");
            continue;
        };
        if is_enum && info.is_enum_candidate() {
            model.add_enum_constant(name);
        } else {
            model.add_attribute(info.into_attribute(name.to_string()));
        }
    }

    for member in members_of(&props, "operations") {
        let info = OperationInfo::new(&class_name, member);
        let Some(name) = info.name() else {
            debug!(class_name; "Skipping operation without a name");
            continue;
        };
        if info.is_constructor_candidate() {
            model.add_constructor(info.into_constructor());
        } else {
            model.add_method(info.into_method(name.to_string()));
        }
    }

    Ok(model)
}

/// Extracts the superclass and implemented interfaces from the element's
/// outgoing connections. Destinations that are not class-like, or whose
/// own property tree has no name, are skipped.
fn classify_relations(element: &ElementSnapshot, model: &mut ClassModel) {
    for connection in element.connections() {
        let destination = connection.destination();
        if !destination.is_class() {
            continue;
        }
        match connection.kind() {
            GENERALISATION_KIND => {
                if let Some(name) = destination_name(destination) {
                    model.set_super_class(name);
                }
            }
            IMPLEMENTATION_KIND => {
                if let Some(name) = destination_name(destination) {
                    model.add_interface(name);
                }
            }
            _ => {}
        }
    }
}

fn destination_name(destination: &ElementRef) -> Option<String> {
    let tree = property::build_tree(destination.values());
    tree.at("name")
        .and_then(PropertyNode::as_str)
        .map(str::to_string)
}

fn stereotype_is(props: &PropertyNode, value: &str) -> bool {
    props.at("stereotype").and_then(PropertyNode::as_str) == Some(value)
}

/// Iterates the map entries of a member sequence (`attributes` or
/// `operations`). Non-sequence nodes and non-map entries (including the
/// null gap fillers of a sparse source model) yield nothing.
fn members_of<'t>(props: &'t PropertyNode, key: &str) -> impl Iterator<Item = &'t PropertyNode> {
    props
        .get(key)
        .map(PropertyNode::as_seq)
        .unwrap_or(&[])
        .iter()
        .filter(|member| matches!(member, PropertyNode::Map(_)))
}

/// Maps a member's raw visibility glyph onto a normalized [`Visibility`].
///
/// `+` is public, `#` is protected, `~` suppresses the keyword, and
/// anything else - including a missing or non-text value - is private.
fn visibility_of(member: &PropertyNode) -> Visibility {
    match member.get("visibility").and_then(PropertyNode::as_str) {
        Some("+") => Visibility::Public,
        Some("#") => Visibility::Protected,
        Some("~") => Visibility::Unspecified,
        _ => Visibility::Private,
    }
}

/// Reads an optional member value the way the host model does: falsy
/// values (missing, null, empty text, zero, false) are absent, and truthy
/// non-text scalars read in their display form.
fn truthy_text(member: &PropertyNode, key: &str) -> Option<String> {
    member
        .get(key)
        .and_then(PropertyNode::as_scalar)
        .filter(|scalar| scalar.is_truthy())
        .map(|scalar| scalar.to_string())
}
