//! Development server configuration types.
//!
//! The dev-server descriptor is fixed and mode-independent: the same content
//! root, stats verbosity, and error overlay apply to every assembled
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    /// Directory served as the development content root
    #[serde(default = "default_content_base")]
    pub content_base: PathBuf,

    /// Stats verbosity flags
    #[serde(default)]
    pub stats: StatsOptions,

    /// In-browser overlay configuration
    #[serde(default)]
    pub overlay: OverlayOptions,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            content_base: default_content_base(),
            stats: StatsOptions::default(),
            overlay: OverlayOptions::default(),
        }
    }
}

impl DevServerOptions {
    /// Dev-server descriptor with the content root resolved under `root`.
    pub fn for_root(root: impl AsRef<std::path::Path>) -> Self {
        Self {
            content_base: root.as_ref().join("src"),
            ..Self::default()
        }
    }
}

/// Build-stats verbosity flags. Chunk and module listings are suppressed to
/// keep dev-server output readable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatsOptions {
    #[serde(default)]
    pub chunks: bool,

    #[serde(default)]
    pub modules: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OverlayOptions {
    /// Show compile errors as a full-screen overlay in the browser
    #[serde(default = "default_true")]
    pub errors: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self { errors: true }
    }
}

fn default_content_base() -> PathBuf {
    PathBuf::from("src")
}

fn default_true() -> bool {
    true
}
