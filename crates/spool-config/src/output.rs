//! Output naming policy and output descriptor.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::mode::BuildMode;

/// Output filename pattern.
///
/// Exactly two forms exist: a content-hashed pattern for production builds and
/// a stable pattern for everything else. [`BuildMode::Unspecified`] shares the
/// stable pattern with development on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilenamePattern {
    #[serde(rename = "static/[name].js")]
    Stable,
    #[serde(rename = "static/[name].[chunkhash].js")]
    Hashed,
}

impl FilenamePattern {
    /// Select the naming policy for a build mode.
    pub fn for_mode(mode: BuildMode) -> Self {
        if mode.is_production() {
            FilenamePattern::Hashed
        } else {
            FilenamePattern::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilenamePattern::Stable => "static/[name].js",
            FilenamePattern::Hashed => "static/[name].[chunkhash].js",
        }
    }
}

/// Output descriptor handed to the external bundler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Filename pattern for entry chunks
    pub filename: FilenamePattern,

    /// Filename pattern for non-entry chunks (same policy as `filename`)
    pub chunk_filename: FilenamePattern,

    /// Output directory
    pub path: PathBuf,

    /// Library export target label
    #[serde(default = "default_library_target")]
    pub library_target: String,
}

impl OutputOptions {
    /// Build the output descriptor for a mode, rooted at `output_dir`.
    pub fn for_mode(mode: BuildMode, output_dir: impl Into<PathBuf>) -> Self {
        let pattern = FilenamePattern::for_mode(mode);
        Self {
            filename: pattern,
            chunk_filename: pattern,
            path: output_dir.into(),
            library_target: default_library_target(),
        }
    }
}

fn default_library_target() -> String {
    "umd".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn production_uses_hashed_pattern() {
        assert_eq!(
            FilenamePattern::for_mode(BuildMode::Production),
            FilenamePattern::Hashed
        );
    }

    #[test]
    fn development_and_unspecified_share_stable_pattern() {
        // Unspecified deliberately follows development naming; there is no
        // third pattern even though there are three modes.
        assert_eq!(
            FilenamePattern::for_mode(BuildMode::Development),
            FilenamePattern::Stable
        );
        assert_eq!(
            FilenamePattern::for_mode(BuildMode::Unspecified),
            FilenamePattern::Stable
        );
    }

    #[test]
    fn pattern_serializes_to_literal() {
        assert_eq!(
            serde_json::to_value(FilenamePattern::Hashed).unwrap(),
            serde_json::json!("static/[name].[chunkhash].js")
        );
        assert_eq!(
            serde_json::to_value(FilenamePattern::Stable).unwrap(),
            serde_json::json!("static/[name].js")
        );
    }

    #[test]
    fn output_options_share_pattern_between_entry_and_chunk() {
        let output = OutputOptions::for_mode(BuildMode::Production, "gh-pages");
        assert_eq!(output.filename, output.chunk_filename);
        assert_eq!(output.library_target, "umd");
    }

    proptest! {
        #[test]
        fn hashed_iff_env_is_production(env in ".*") {
            let mode = BuildMode::resolve(Some(&env));
            let pattern = FilenamePattern::for_mode(mode);
            if env == "production" {
                prop_assert_eq!(pattern, FilenamePattern::Hashed);
            } else {
                prop_assert_eq!(pattern, FilenamePattern::Stable);
            }
        }
    }
}
