//! Pluggable config validation strategies.
//!
//! Schema validation checks an assembled (or embedder-supplied) value for
//! shape problems without touching the filesystem, so it is safe for library
//! and in-memory use.

use crate::assemble::{BundleConfig, PluginDescriptor};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate an assembled bundler configuration
    fn validate(&self, config: &BundleConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use spool_config::{Assembler, ConfigValidator, SchemaValidator};
///
/// let tmp = tempfile::tempdir().unwrap();
/// let shell = || -> spool_config::Result<String> { Ok("<html></html>".to_string()) };
/// let config = Assembler::new(tmp.path()).assemble(&shell).unwrap();
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BundleConfig) -> Result<()> {
        // Entry validation
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, modules) in &config.entry {
            if modules.is_empty() || modules.iter().any(|m| m.trim().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("entry '{}' has no modules", name),
                    hint: Some("Each entry needs at least one non-empty module path".to_string()),
                });
            }
        }

        // Loader rules must carry a loader identifier and a matcher
        if config.module.rules.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "no loader rules configured".to_string(),
                hint: Some("At least one loader rule is required to process sources".to_string()),
            });
        }

        for rule in &config.module.rules {
            if rule.loader.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "loader identifier cannot be empty".to_string(),
                    hint: None,
                });
            }
            if rule.test.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "loader rule matcher cannot be empty".to_string(),
                    hint: Some("Set 'test' to a file-extension pattern".to_string()),
                });
            }
        }

        // Plugin descriptors must reference a template path
        for plugin in &config.plugins {
            let PluginDescriptor::Html(html) = plugin;
            if html.template.as_os_str().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "html plugin template path cannot be empty".to_string(),
                    hint: Some("Assemble the config so the template artifact is produced first".to_string()),
                });
            }
        }

        Ok(())
    }
}
