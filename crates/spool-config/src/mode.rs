//! Build mode resolution.
//!
//! The mode is derived once from a single environment signal and is immutable
//! afterwards; every mode-dependent field in the assembled configuration is a
//! pure function of it.

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`BuildMode::from_env`].
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// Build environment selector.
///
/// Serializes to the bundler's mode labels: `"development"`, `"production"`,
/// and `"none"` for anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Development build (default when the signal is absent)
    #[default]
    Development,
    /// Production build (content-hashed output naming)
    Production,
    /// Unrecognized signal; falls back to development-style naming
    #[serde(rename = "none")]
    Unspecified,
}

impl BuildMode {
    /// Resolve the build mode from an optional environment value.
    ///
    /// `"development"` or an absent value resolves to [`BuildMode::Development`]
    /// (absence is a deliberate default-to-development policy, not an
    /// oversight), `"production"` to [`BuildMode::Production`], and any other
    /// value to [`BuildMode::Unspecified`]. Never an error.
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            None | Some("development") => BuildMode::Development,
            Some("production") => BuildMode::Production,
            Some(_) => BuildMode::Unspecified,
        }
    }

    /// Resolve the build mode from the `NODE_ENV` environment variable.
    ///
    /// Thin wrapper over [`BuildMode::resolve`]; embedders that want a pure
    /// assembler should call `resolve` with an explicit value instead.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(MODE_ENV_VAR).ok().as_deref())
    }

    /// Mode label as the external bundler expects it.
    pub fn label(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
            BuildMode::Unspecified => "none",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, BuildMode::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, BuildMode::Production)
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_resolve() {
        assert_eq!(BuildMode::resolve(Some("development")), BuildMode::Development);
        assert_eq!(BuildMode::resolve(Some("production")), BuildMode::Production);
        assert_eq!(BuildMode::resolve(Some("staging")), BuildMode::Unspecified);
        assert_eq!(BuildMode::resolve(Some("")), BuildMode::Unspecified);
    }

    #[test]
    fn absent_value_defaults_to_development() {
        // Absence is treated identically to explicit "development".
        assert_eq!(BuildMode::resolve(None), BuildMode::Development);
        assert_eq!(BuildMode::resolve(None), BuildMode::resolve(Some("development")));
    }

    #[test]
    fn mode_labels() {
        assert_eq!(BuildMode::Development.label(), "development");
        assert_eq!(BuildMode::Production.label(), "production");
        assert_eq!(BuildMode::Unspecified.label(), "none");
    }

    #[test]
    fn mode_serializes_to_bundler_labels() {
        assert_eq!(
            serde_json::to_value(BuildMode::Unspecified).unwrap(),
            serde_json::json!("none")
        );
        assert_eq!(
            serde_json::to_value(BuildMode::Production).unwrap(),
            serde_json::json!("production")
        );
    }
}
