//! Loader rule construction.
//!
//! Every build gets the same TypeScript loader with caching; development
//! builds additionally attach a display-name transform so debugging tools can
//! show a stable component identity per source file.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::mode::BuildMode;

/// A matcher + transform pairing applied to source files before bundling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderRule {
    /// File-extension matcher (regex, as the bundler expects)
    pub test: String,

    /// Loader identifier
    pub loader: String,

    /// Loader options mapping
    pub options: LoaderOptions,
}

impl LoaderRule {
    /// Build the loader rule for a mode.
    ///
    /// The transform is attached iff `mode` is development; production and
    /// unspecified builds get a fully-formed options record without it rather
    /// than a partially-shaped value.
    pub fn for_mode(mode: BuildMode, root: impl Into<PathBuf>) -> Self {
        let display_name_transform = if mode.is_development() {
            Some(DisplayNameTransform::new(root))
        } else {
            None
        };

        Self {
            test: default_test(),
            loader: default_loader(),
            options: LoaderOptions {
                use_cache: true,
                cache_directory: default_cache_directory(),
                display_name_transform,
            },
        }
    }
}

/// Options for the primary source-transform loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderOptions {
    /// Enable the loader's transform cache
    #[serde(default = "default_true")]
    pub use_cache: bool,

    /// Cache directory for transformed sources
    #[serde(default = "default_cache_directory")]
    pub cache_directory: PathBuf,

    /// Display-name transform, present only for development builds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name_transform: Option<DisplayNameTransform>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            cache_directory: default_cache_directory(),
            display_name_transform: None,
        }
    }
}

/// Derives a per-file display name for the styled-component transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayNameTransform {
    /// Root the file path is made relative to
    pub root: PathBuf,
}

impl DisplayNameTransform {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Derive the display name for a binding defined in `file`.
    ///
    /// The name is `{binding}__{path}` where `path` is the file path relative
    /// to the transform root, with the extension suffix removed and path
    /// separators normalized to underscores. The derivation is byte-for-byte
    /// reproducible given the same inputs; debuggers use it as an identity.
    pub fn display_name(&self, binding: &str, file: &Path) -> String {
        let relative = file.strip_prefix(&self.root).unwrap_or(file);
        let stem = relative.with_extension("");

        let mut path_part = String::new();
        for component in stem.components() {
            if let Component::Normal(part) = component {
                if !path_part.is_empty() {
                    path_part.push('_');
                }
                path_part.push_str(&part.to_string_lossy());
            }
        }

        format!("{binding}__{path_part}")
    }
}

fn default_true() -> bool {
    true
}

fn default_test() -> String {
    r"\.tsx?$".to_string()
}

fn default_loader() -> String {
    "awesome-typescript-loader".to_string()
}

fn default_cache_directory() -> PathBuf {
    PathBuf::from("node_modules/.cache/spool")
}
