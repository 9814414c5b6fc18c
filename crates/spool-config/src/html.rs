//! HTML-generation plugin options.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Descriptor for the bundler's HTML-generation plugin.
///
/// The referenced template file must already exist when this descriptor is
/// handed to the bundler; see [`crate::template::TemplateArtifact`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlPluginOptions {
    /// Path to the pre-rendered HTML template
    pub template: PathBuf,

    /// Minification settings applied to the generated HTML
    #[serde(default)]
    pub minify: MinifyOptions,
}

impl HtmlPluginOptions {
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            minify: MinifyOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifyOptions {
    #[serde(default = "default_true")]
    pub collapse_whitespace: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minification_enabled_by_default() {
        let options = HtmlPluginOptions::new("out/index.html");
        assert!(options.minify.collapse_whitespace);
        assert_eq!(options.template, PathBuf::from("out/index.html"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(HtmlPluginOptions::new("out/index.html")).unwrap();
        assert_eq!(
            value["minify"]["collapseWhitespace"],
            serde_json::json!(true)
        );
    }
}
