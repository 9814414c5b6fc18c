//! Spool CLI - assemble and emit bundler configuration.
//!
//! The CLI wraps `spool-config`: `spool emit` assembles a configuration for a
//! project root (writing the HTML template artifact as a side effect) and
//! prints or writes it as JSON for the external bundler; `spool check`
//! validates an existing configuration file.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod shell;

pub use shell::ShellRenderer;
