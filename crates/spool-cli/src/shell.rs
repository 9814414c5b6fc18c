//! Built-in HTML shell renderer.
//!
//! The original application pre-renders its whole component tree into the
//! template; the CLI ships this minimal single-page shell instead, and
//! embedders plug in their own [`HtmlRenderer`].

use spool_config::{HtmlRenderer, Result};

/// Renders a minimal single-page application shell.
#[derive(Debug, Clone)]
pub struct ShellRenderer {
    title: String,
    mount_id: String,
}

impl ShellRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mount_id: "app".to_string(),
        }
    }

    /// Override the id of the mount element (default: "app").
    pub fn mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }
}

impl HtmlRenderer for ShellRenderer {
    fn render(&self) -> Result<String> {
        Ok(format!(
            r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
  </head>
  <body>
    <div id="{mount}"></div>
  </body>
</html>
"#,
            title = self.title,
            mount = self.mount_id,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_contains_title_and_mount_element() {
        let html = ShellRenderer::new("My App").render().unwrap();
        assert!(html.contains("<title>My App</title>"));
        assert!(html.contains(r#"<div id="app"></div>"#));
    }

    #[test]
    fn mount_id_is_overridable() {
        let html = ShellRenderer::new("t").mount_id("root").render().unwrap();
        assert!(html.contains(r#"<div id="root"></div>"#));
    }

    #[test]
    fn render_is_deterministic() {
        let renderer = ShellRenderer::new("t");
        assert_eq!(renderer.render().unwrap(), renderer.render().unwrap());
    }
}
