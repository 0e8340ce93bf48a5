//! Java source rendering for a [`ClassModel`].
//!
//! Rendering is a total, deterministic function of the model: it never
//! fails and the same model always yields byte-identical output. The
//! structural shape is fixed regardless of member count:
//!
//! ```text
//! public <kind> <Name>[ extends <Super>][ implements <I1>, <I2>] {
//!     <enum constants>
//!     <attributes>
//!     <constructors>
//!     <methods>
//! }
//! ```
//!
//! Blank lines separate each constructor and method from the member above
//! it; there is no blank line before the first attribute or enum constant,
//! and no trailing newline after the closing brace.

use classforge_core::model::{ClassKind, ClassModel, Parameter};

use crate::config::StyleConfig;

/// Renders a class model to Java source text.
pub(crate) fn render_java(model: &ClassModel, style: &StyleConfig) -> String {
    let indent = style.indent();
    let unknown = style.unknown_type();
    let mut out = String::new();

    // Class-level visibility is not modeled; generated types are always
    // public.
    out.push_str(&format!("public {} {}", model.kind(), model.name()));
    if let Some(super_class) = model.super_class() {
        out.push_str(&format!(" extends {super_class}"));
    }
    if !model.interfaces().is_empty() {
        out.push_str(&format!(" implements {}", model.interfaces().join(", ")));
    }
    out.push_str(" {\n");

    let constants = model.enum_constants();
    for (position, constant) in constants.iter().enumerate() {
        let is_last = position + 1 == constants.len();
        if !is_last {
            out.push_str(&format!("{indent}{constant},\n"));
        } else if model.has_body_members() {
            out.push_str(&format!("{indent}{constant};\n"));
        } else {
            out.push_str(&format!("{indent}{constant}\n"));
        }
    }

    for attribute in model.attributes() {
        out.push_str(indent);
        if let Some(keyword) = attribute.visibility.keyword() {
            out.push_str(keyword);
            out.push(' ');
        }
        if attribute.is_static {
            out.push_str("static ");
        }
        if attribute.is_final {
            out.push_str("final ");
        }
        out.push_str(&format!(
            "{} {}",
            attribute.ty.as_deref().unwrap_or(unknown),
            attribute.name
        ));
        if let Some(default) = &attribute.default {
            out.push_str(&format!(" = {default}"));
        }
        out.push_str(";\n");
    }

    for constructor in model.constructors() {
        out.push('\n');
        out.push_str(indent);
        if model.kind() != ClassKind::Enum {
            if let Some(keyword) = constructor.visibility.keyword() {
                out.push_str(keyword);
                out.push(' ');
            }
        }
        out.push_str(&format!(
            "{}({})",
            model.name(),
            parameter_list(&constructor.parameters, unknown)
        ));
        push_empty_body(&mut out, indent);
    }

    for method in model.methods() {
        out.push('\n');
        out.push_str(indent);
        if model.kind() != ClassKind::Interface {
            if let Some(keyword) = method.visibility.keyword() {
                out.push_str(keyword);
                out.push(' ');
            }
        }
        if method.is_static {
            out.push_str("static ");
        }
        out.push_str(&format!(
            "{} {}({})",
            method.return_type.as_deref().unwrap_or("void"),
            method.name,
            parameter_list(&method.parameters, unknown)
        ));
        push_empty_body(&mut out, indent);
    }

    out.push('}');
    out
}

fn parameter_list(parameters: &[Parameter], unknown: &str) -> String {
    parameters
        .iter()
        .map(|parameter| {
            format!(
                "{} {}",
                parameter.ty.as_deref().unwrap_or(unknown),
                parameter.name
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_empty_body(out: &mut String, indent: &str) {
    out.push_str(" {\n\n");
    out.push_str(indent);
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use classforge_core::model::{Attribute, Constructor, Method, Visibility};

    fn style() -> StyleConfig {
        StyleConfig::default()
    }

    fn attribute(name: &str, ty: Option<&str>, visibility: Visibility) -> Attribute {
        Attribute {
            name: name.to_string(),
            ty: ty.map(str::to_string),
            visibility,
            is_static: false,
            is_final: false,
            default: None,
        }
    }

    #[test]
    fn empty_class_renders_header_and_braces() {
        let model = ClassModel::new("Empty");
        assert_eq!(render_java(&model, &style()), "public class Empty {\n}");
    }

    #[test]
    fn extends_and_implements_clauses() {
        let mut model = ClassModel::new("Child");
        model.set_super_class("Base");
        model.add_interface("Readable");
        model.add_interface("Writable");

        let source = render_java(&model, &style());
        assert!(source.starts_with(
            "public class Child extends Base implements Readable, Writable {\n"
        ));
    }

    #[test]
    fn attribute_lines_cover_all_modifiers() {
        let mut model = ClassModel::new("Holder");
        model.add_attribute(Attribute {
            name: "LIMIT".to_string(),
            ty: Some("int".to_string()),
            visibility: Visibility::Protected,
            is_static: true,
            is_final: true,
            default: Some("10".to_string()),
        });
        model.add_attribute(attribute("bare", None, Visibility::Unspecified));

        let source = render_java(&model, &style());
        assert!(source.contains("    protected static final int LIMIT = 10;\n"));
        // Unspecified visibility emits no keyword, missing type renders the
        // placeholder.
        assert!(source.contains("    ??? bare;\n"));
    }

    #[test]
    fn enum_constant_terminators() {
        let mut model = ClassModel::new("Color");
        model.make_enum();
        model.add_enum_constant("RED");
        model.add_enum_constant("GREEN");

        // Without body members the last constant is bare.
        let source = render_java(&model, &style());
        assert_eq!(source, "public enum Color {\n    RED,\n    GREEN\n}");

        // With a body member it ends in a semicolon.
        model.add_attribute(attribute("shade", Some("int"), Visibility::Private));
        let source = render_java(&model, &style());
        assert!(source.contains("    RED,\n    GREEN;\n    private int shade;\n"));
    }

    #[test]
    fn constructor_visibility_is_suppressed_on_enums() {
        let mut model = ClassModel::new("Color");
        model.add_constructor(Constructor {
            visibility: Visibility::Private,
            parameters: Vec::new(),
        });

        let plain = render_java(&model, &style());
        assert!(plain.contains("\n    private Color() {\n"));

        model.make_enum();
        let as_enum = render_java(&model, &style());
        assert!(as_enum.contains("\n    Color() {\n"));
    }

    #[test]
    fn method_visibility_is_suppressed_on_interfaces() {
        let mut model = ClassModel::new("Worker");
        model.add_method(Method {
            name: "run".to_string(),
            return_type: None,
            visibility: Visibility::Public,
            is_static: false,
            parameters: Vec::new(),
        });

        let plain = render_java(&model, &style());
        assert!(plain.contains("\n    public void run() {\n"));

        model.make_interface();
        let as_interface = render_java(&model, &style());
        assert!(as_interface.contains("\n    void run() {\n"));
    }

    #[test]
    fn static_method_with_parameters() {
        let mut model = ClassModel::new("Calc");
        model.add_method(Method {
            name: "add".to_string(),
            return_type: Some("int".to_string()),
            visibility: Visibility::Public,
            is_static: true,
            parameters: vec![
                Parameter {
                    name: "a".to_string(),
                    ty: Some("int".to_string()),
                },
                Parameter {
                    name: "b".to_string(),
                    ty: None,
                },
            ],
        });

        let source = render_java(&model, &style());
        assert!(source.contains("\n    public static int add(int a, ??? b) {\n"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut model = ClassModel::new("Stable");
        model.set_super_class("Base");
        model.add_attribute(attribute("x", Some("int"), Visibility::Private));
        model.add_method(Method {
            name: "touch".to_string(),
            return_type: None,
            visibility: Visibility::Public,
            is_static: false,
            parameters: Vec::new(),
        });

        assert_eq!(render_java(&model, &style()), render_java(&model, &style()));
    }

    #[test]
    fn custom_style_is_honored() {
        let style = StyleConfig::new(Some("  ".to_string()), Some("Object".to_string()));
        let mut model = ClassModel::new("Tight");
        model.add_attribute(attribute("x", None, Visibility::Private));

        let source = render_java(&model, &style);
        assert!(source.contains("  private Object x;\n"));
    }
}
