//! Configuration assembly for the Spool web toolchain.
//!
//! This crate turns a single environment signal (the build mode) into a
//! complete, serializable bundler configuration plus the one filesystem
//! artifact the bundler's HTML plugin consumes. Mode resolution, naming
//! policy, and loader construction are pure functions; the template write
//! is the only side effect and is isolated in [`template`].

pub mod assemble;
pub mod dev;
pub mod error;
pub mod html;
pub mod loader;
pub mod mode;
pub mod output;
pub mod template;
pub mod validation;

// Re-export main types
pub use assemble::*;
pub use dev::*;
pub use error::*;
pub use html::*;
pub use loader::*;
pub use mode::*;
pub use output::*;
pub use template::{HtmlRenderer, TemplateArtifact};

// Re-export validation
pub use validation::{ConfigValidator, SchemaValidator};
