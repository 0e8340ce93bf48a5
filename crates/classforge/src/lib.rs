//! ClassForge - Java class skeletons from UML class models.
//!
//! Classification and rendering for class-like diagram elements. A host
//! integration captures the selected element as a plain snapshot of its
//! property paths, values, and connections; ClassForge turns that snapshot
//! into a normalized class model and renders it as Java source text.

pub mod config;

mod classify;
mod error;
mod render;
mod selection;

pub use classforge_core::{model, property, snapshot};

pub use error::ClassForgeError;
pub use selection::select_class;

use log::{debug, info, trace};

use classforge_core::model::ClassModel;
use classforge_core::snapshot::ElementSnapshot;

use config::AppConfig;

/// Builder for classifying and rendering class exports.
///
/// This provides an API for processing one element snapshot through the
/// classification and rendering stages.
///
/// # Examples
///
/// ```rust
/// use classforge::{ExportBuilder, config::AppConfig, property::Scalar, snapshot::ElementSnapshot};
///
/// let element = ElementSnapshot::new(
///     "class",
///     vec![("name".to_string(), Scalar::Text("Foo".to_string()))],
///     Vec::new(),
/// );
///
/// let builder = ExportBuilder::new(AppConfig::default());
///
/// // Classify the snapshot into a class model
/// let model = builder.classify(&element)
///     .expect("Failed to classify");
///
/// // Render the class model to Java source
/// let source = builder.render_java(&model);
/// assert_eq!(source, "public class Foo {\n}");
/// ```
#[derive(Default)]
pub struct ExportBuilder {
    config: AppConfig,
}

impl ExportBuilder {
    /// Create a new export builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Classify an element snapshot into a normalized class model.
    ///
    /// This builds the element's property tree, derives the class kind and
    /// relationships, and classifies every attribute and operation into its
    /// semantic role.
    ///
    /// # Arguments
    ///
    /// * `element` - An immutable snapshot of the selected class element
    ///
    /// # Errors
    ///
    /// Returns [`ClassForgeError::MissingClassName`] when the element has
    /// no usable name; all other malformed data degrades to documented
    /// defaults instead of failing.
    pub fn classify(&self, element: &ElementSnapshot) -> Result<ClassModel, ClassForgeError> {
        info!("Classifying selected element");

        let model = classify::classify_element(element)?;

        debug!(
            class_name = model.name(),
            kind:? = model.kind();
            "Element classified"
        );
        trace!(model:?; "Classified class model");

        Ok(model)
    }

    /// Render a class model to Java source text.
    ///
    /// Rendering is a total function: it cannot fail and always yields the
    /// same output for the same model.
    ///
    /// # Arguments
    ///
    /// * `model` - A classified class model
    pub fn render_java(&self, model: &ClassModel) -> String {
        info!(class_name = model.name(); "Rendering Java source");
        render::render_java(model, self.config.style())
    }
}
