//! Configuration assembly.
//!
//! [`Assembler`] composes the full bundler configuration in two phases: first
//! the template artifact is rendered and written (the only side effect), then
//! the configuration value referencing its path is built from pure,
//! mode-derived parts. The artifact therefore always exists on disk before a
//! [`BundleConfig`] is returned.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result};
use crate::html::HtmlPluginOptions;
use crate::loader::LoaderRule;
use crate::mode::BuildMode;
use crate::output::OutputOptions;
use crate::template::{HtmlRenderer, TemplateArtifact};

/// The composed configuration value handed to the external bundler.
///
/// Serializes to the bundler's expected configuration schema (camelCase
/// keys). Treated as an immutable plain value once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfig {
    /// Mode label derived from the build mode
    pub mode: BuildMode,

    /// Entry points, keyed by chunk name
    pub entry: IndexMap<String, Vec<String>>,

    /// Module resolution settings
    #[serde(default)]
    pub resolve: ResolveOptions,

    /// Output descriptor
    pub output: OutputOptions,

    /// Loader rules
    pub module: ModuleOptions,

    /// Development server descriptor (fixed, mode-independent)
    pub dev_server: DevServerOptions,

    /// Plugin descriptors
    pub plugins: Vec<PluginDescriptor>,
}

impl BundleConfig {
    /// Create from `serde_json::Value` (for programmatic config from an
    /// embedder).
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Convert to `serde_json::Value`.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

/// Module resolution settings forwarded to the bundler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveOptions {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

/// Loader rule list, nested to match the bundler's schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleOptions {
    pub rules: Vec<LoaderRule>,
}

/// A configured bundler plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum PluginDescriptor {
    /// HTML-generation plugin referencing a produced template artifact
    Html(HtmlPluginOptions),
}

/// Builds a [`BundleConfig`] for one project root.
///
/// # Example
///
/// ```no_run
/// use spool_config::{Assembler, BuildMode};
///
/// let shell = || -> spool_config::Result<String> { Ok("<!doctype html><html></html>".to_string()) };
/// let config = Assembler::new(".")
///     .mode(BuildMode::resolve(Some("production")))
///     .assemble(&shell)
///     .unwrap();
/// assert!(config.mode.is_production());
/// ```
#[derive(Debug, Clone)]
pub struct Assembler {
    root: PathBuf,
    mode: BuildMode,
    entries: IndexMap<String, Vec<String>>,
    output_dir: PathBuf,
    template_dir: PathBuf,
    template_filename: String,
}

impl Assembler {
    /// Create an assembler for `root` with the default development mode.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            mode: BuildMode::default(),
            entries: default_entries(),
            output_dir: root.join("gh-pages"),
            template_dir: root.join("out"),
            template_filename: "index.html".to_string(),
            root,
        }
    }

    /// Set the build mode. The mode is fixed for the lifetime of the
    /// assembler; every derived field is a function of it.
    pub fn mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the default `app -> ["./src"]` entry map.
    pub fn entry(mut self, name: impl Into<String>, modules: Vec<String>) -> Self {
        self.entries = IndexMap::from([(name.into(), modules)]);
        self
    }

    /// Override the output directory (default: `<root>/gh-pages`).
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Override the template artifact directory (default: `<root>/out`).
    pub fn template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    /// Assemble the configuration, producing the template artifact as a
    /// precondition for the HTML plugin descriptor.
    ///
    /// # Errors
    ///
    /// Fails if the renderer fails or the artifact cannot be written. There
    /// is no partial configuration: either a complete value and a complete
    /// on-disk artifact, or an error.
    pub fn assemble(&self, renderer: &dyn HtmlRenderer) -> Result<BundleConfig> {
        info!(mode = %self.mode, root = %self.root.display(), "assembling bundler configuration");

        // Phase 1: render and write the template artifact.
        let html = renderer.render()?;
        let artifact =
            TemplateArtifact::prepare(&self.template_dir, &self.template_filename, &html)?;

        // Phase 2: pure composition referencing the artifact path.
        Ok(BundleConfig {
            mode: self.mode,
            entry: self.entries.clone(),
            resolve: ResolveOptions::default(),
            output: OutputOptions::for_mode(self.mode, self.output_dir.clone()),
            module: ModuleOptions {
                rules: vec![LoaderRule::for_mode(self.mode, self.root.clone())],
            },
            dev_server: DevServerOptions::for_root(&self.root),
            plugins: vec![PluginDescriptor::Html(HtmlPluginOptions::new(
                artifact.into_path(),
            ))],
        })
    }
}

/// Assemble a configuration from an optional environment value.
///
/// Convenience wrapper: resolves the mode per [`BuildMode::resolve`] and runs
/// an [`Assembler`] with defaults.
pub fn assemble(
    env: Option<&str>,
    root: impl AsRef<Path>,
    renderer: &dyn HtmlRenderer,
) -> Result<BundleConfig> {
    Assembler::new(root.as_ref())
        .mode(BuildMode::resolve(env))
        .assemble(renderer)
}

fn default_entries() -> IndexMap<String, Vec<String>> {
    IndexMap::from([("app".to_string(), vec!["./src".to_string()])])
}

fn default_extensions() -> Vec<String> {
    vec![
        ".ts".to_string(),
        ".tsx".to_string(),
        ".js".to_string(),
        ".jsx".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Result<String> {
        Ok("<html></html>".to_string())
    }

    #[test]
    fn default_entry_and_extensions() {
        let assembler = Assembler::new("/project");
        assert_eq!(assembler.entries["app"], vec!["./src".to_string()]);

        let resolve = ResolveOptions::default();
        assert_eq!(resolve.extensions, vec![".ts", ".tsx", ".js", ".jsx"]);
    }

    #[test]
    fn plugin_descriptor_is_tagged_by_name() {
        let descriptor =
            PluginDescriptor::Html(HtmlPluginOptions::new(PathBuf::from("out/index.html")));
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["name"], serde_json::json!("html"));
        assert_eq!(value["template"], serde_json::json!("out/index.html"));
    }

    #[test]
    fn config_round_trips_through_value() {
        let tmp = tempfile::tempdir().unwrap();
        let config = assemble(Some("production"), tmp.path(), &shell).unwrap();

        let value = config.to_value().unwrap();
        let restored = BundleConfig::from_value(value).unwrap();
        assert!(restored.mode.is_production());
        assert_eq!(restored.output.filename, config.output.filename);
    }
}
