//! Template artifact production.
//!
//! The HTML-generation plugin reads its template from disk, so the rendered
//! shell must be fully written before the plugin descriptor referencing it is
//! composed. This module owns that single side effect.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Renders a complete HTML document for the application shell.
///
/// Treated as an opaque external collaborator; a render failure aborts the
/// whole assembly before any configuration value is produced.
pub trait HtmlRenderer {
    fn render(&self) -> Result<String>;
}

impl<F> HtmlRenderer for F
where
    F: Fn() -> Result<String>,
{
    fn render(&self) -> Result<String> {
        self()
    }
}

/// A rendered HTML template on disk.
///
/// Created and written exactly once per assembly; by the time [`prepare`]
/// returns, the file is fully written and closed, so the path is immediately
/// readable by the bundler.
///
/// [`prepare`]: TemplateArtifact::prepare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateArtifact {
    path: PathBuf,
}

impl TemplateArtifact {
    /// Write `content` to `filename` inside `dir`, creating the directory if
    /// it is absent.
    ///
    /// Directory creation is idempotent. Filesystem failures propagate; there
    /// is no fallback template.
    pub fn prepare(dir: &Path, filename: &str, content: &str) -> Result<Self> {
        fs::create_dir_all(dir)?;

        let path = dir.join(filename);
        fs::write(&path, content)?;
        debug!(path = %path.display(), bytes = content.len(), "wrote template artifact");

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out");
        assert!(!dir.exists());

        let artifact = TemplateArtifact::prepare(&dir, "index.html", "<html></html>").unwrap();

        assert!(dir.is_dir());
        assert_eq!(artifact.path(), dir.join("index.html"));
        let written = fs::read_to_string(artifact.path()).unwrap();
        assert_eq!(written, "<html></html>");
    }

    #[test]
    fn prepare_succeeds_when_directory_exists() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out");
        fs::create_dir_all(&dir).unwrap();

        let artifact = TemplateArtifact::prepare(&dir, "index.html", "shell").unwrap();
        assert_eq!(fs::read_to_string(artifact.path()).unwrap(), "shell");
    }

    #[test]
    fn prepare_overwrites_previous_content() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_path_buf();

        TemplateArtifact::prepare(&dir, "index.html", "a longer first rendering").unwrap();
        let artifact = TemplateArtifact::prepare(&dir, "index.html", "second").unwrap();

        // Fully overwritten, no trailing bytes from the first write.
        assert_eq!(fs::read_to_string(artifact.path()).unwrap(), "second");
    }

    #[test]
    fn closure_renderers_implement_the_trait() {
        let renderer = || -> Result<String> { Ok("<html></html>".to_string()) };
        assert_eq!(renderer.render().unwrap(), "<html></html>");
    }
}
