//! Per-operation classification.

use classforge_core::{
    model::{Constructor, Method, Parameter, Visibility},
    property::PropertyNode,
};
use log::debug;

use super::{truthy_text, visibility_of};

/// A pure view over one operation's property submap.
///
/// Unlike attributes, an operation's static flag defaults to *false* when
/// the key is missing.
pub(super) struct OperationInfo<'t> {
    class_name: &'t str,
    member: &'t PropertyNode,
}

impl<'t> OperationInfo<'t> {
    pub(super) fn new(class_name: &'t str, member: &'t PropertyNode) -> Self {
        Self { class_name, member }
    }

    pub(super) fn name(&self) -> Option<&'t str> {
        self.member.get("name").and_then(PropertyNode::as_str)
    }

    /// An operation is a constructor when it is named after the owning
    /// class and declares no return type, or when it is a static `new`
    /// returning the owning class.
    pub(super) fn is_constructor_candidate(&self) -> bool {
        let name = self.name();
        if name == Some(self.class_name) && self.return_type().is_none() {
            return true;
        }
        name == Some("new")
            && self.is_static()
            && self.return_type().as_deref() == Some(self.class_name)
    }

    fn visibility(&self) -> Visibility {
        visibility_of(self.member)
    }

    fn is_static(&self) -> bool {
        self.member
            .get("static")
            .map(PropertyNode::is_truthy)
            .unwrap_or(false)
    }

    fn return_type(&self) -> Option<String> {
        truthy_text(self.member, "rtype")
    }

    /// Parameters in declared order; entries without a usable name are
    /// dropped.
    fn parameters(&self) -> Vec<Parameter> {
        self.member
            .get("parameters")
            .map(PropertyNode::as_seq)
            .unwrap_or(&[])
            .iter()
            .filter_map(|parameter| {
                let Some(name) = parameter.get("name").and_then(PropertyNode::as_str) else {
                    debug!("Skipping parameter without a name");
                    return None;
                };
                Some(Parameter {
                    name: name.to_string(),
                    ty: truthy_text(parameter, "type"),
                })
            })
            .collect()
    }

    pub(super) fn into_constructor(self) -> Constructor {
        Constructor {
            visibility: self.visibility(),
            parameters: self.parameters(),
        }
    }

    pub(super) fn into_method(self, name: String) -> Method {
        Method {
            name,
            return_type: self.return_type(),
            visibility: self.visibility(),
            is_static: self.is_static(),
            parameters: self.parameters(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classforge_core::property::{Scalar, build_tree};

    fn member(entries: &[(&str, Scalar)]) -> PropertyNode {
        build_tree(
            &entries
                .iter()
                .map(|(path, value)| (path.to_string(), value.clone()))
                .collect::<Vec<_>>(),
        )
    }

    fn text(value: &str) -> Scalar {
        Scalar::Text(value.to_string())
    }

    #[test]
    fn empty_return_type_still_allows_constructor_detection() {
        let op = member(&[("name", text("Foo")), ("rtype", text(""))]);
        assert!(OperationInfo::new("Foo", &op).is_constructor_candidate());
    }

    #[test]
    fn constructor_detection_ignores_staticness_for_name_match() {
        let op = member(&[("name", text("Foo")), ("static", Scalar::Bool(true))]);
        assert!(OperationInfo::new("Foo", &op).is_constructor_candidate());
    }

    #[test]
    fn truthy_non_text_return_type_blocks_constructor_detection() {
        // A set-but-numeric return type still counts as a declared return
        // type, so the class-named operation stays a method.
        let op = member(&[("name", text("Foo")), ("rtype", Scalar::Int(5))]);
        let info = OperationInfo::new("Foo", &op);

        assert!(!info.is_constructor_candidate());
        assert_eq!(
            info.into_method("Foo".to_string()).return_type.as_deref(),
            Some("5")
        );
    }

    #[test]
    fn new_must_return_the_owning_class() {
        let op = member(&[
            ("name", text("new")),
            ("static", Scalar::Bool(true)),
            ("rtype", text("Other")),
        ]);
        assert!(!OperationInfo::new("Foo", &op).is_constructor_candidate());
    }

    #[test]
    fn parameters_keep_declared_order_and_optional_types() {
        let op = member(&[
            ("name", text("run")),
            ("parameters/0/name", text("first")),
            ("parameters/0/type", text("int")),
            ("parameters/1/name", text("second")),
        ]);
        let method = OperationInfo::new("Foo", &op).into_method("run".to_string());

        assert_eq!(method.parameters.len(), 2);
        assert_eq!(method.parameters[0].ty.as_deref(), Some("int"));
        assert_eq!(method.parameters[1].name, "second");
        assert_eq!(method.parameters[1].ty, None);
    }

    #[test]
    fn unnamed_parameters_are_dropped() {
        let op = member(&[
            ("name", text("run")),
            ("parameters/0/type", text("int")),
            ("parameters/1/name", text("kept")),
        ]);
        let method = OperationInfo::new("Foo", &op).into_method("run".to_string());

        assert_eq!(method.parameters.len(), 1);
        assert_eq!(method.parameters[0].name, "kept");
    }
}
