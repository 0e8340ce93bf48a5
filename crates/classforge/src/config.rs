//! Configuration types for ClassForge exports.
//!
//! This module provides configuration structures that control how the
//! generated source is styled. All types implement [`serde::Deserialize`]
//! for loading from external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Source formatting options (indentation, the
//!   unknown-type placeholder).
//!
//! # Example
//!
//! ```
//! # use classforge::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.style().indent(), "    ");
//! assert_eq!(config.style().unknown_type(), "???");
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Source formatting configuration for generated class skeletons.
///
/// Fields that are not set fall back to the renderer defaults: four-space
/// indentation and the `???` placeholder for missing types.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// One level of indentation inside the class body.
    #[serde(default)]
    indent: Option<String>,

    /// Placeholder token rendered for missing declared types.
    #[serde(default)]
    unknown_type: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the specified options.
    pub fn new(indent: Option<String>, unknown_type: Option<String>) -> Self {
        Self {
            indent,
            unknown_type,
        }
    }

    /// Returns the configured indentation string.
    pub fn indent(&self) -> &str {
        self.indent.as_deref().unwrap_or("    ")
    }

    /// Returns the placeholder token for missing declared types.
    pub fn unknown_type(&self) -> &str {
        self.unknown_type.as_deref().unwrap_or("???")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_renderer_contract() {
        let config = AppConfig::default();
        assert_eq!(config.style().indent(), "    ");
        assert_eq!(config.style().unknown_type(), "???");
    }

    #[test]
    fn overrides_take_effect() {
        let style = StyleConfig::new(Some("\t".to_string()), Some("TODO".to_string()));
        assert_eq!(style.indent(), "\t");
        assert_eq!(style.unknown_type(), "TODO");
    }
}
