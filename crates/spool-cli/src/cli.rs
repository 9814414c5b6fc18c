//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Spool - bundler configuration assembler
#[derive(Parser, Debug)]
#[command(
    name = "spool",
    version,
    about = "Assemble bundler configuration for a client-side web application"
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the configuration and emit it as JSON
    Emit(EmitArgs),
    /// Validate an existing configuration JSON file
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Build mode ("development" or "production"; falls back to NODE_ENV,
    /// then to development)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Write the JSON configuration to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Page title for the built-in HTML shell
    #[arg(long, default_value = "Spool App")]
    pub title: String,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to a configuration JSON file
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn emit_defaults() {
        let cli = Cli::parse_from(["spool", "emit"]);
        let Command::Emit(args) = cli.command else {
            panic!("expected emit command");
        };
        assert!(args.mode.is_none());
        assert_eq!(args.root, PathBuf::from("."));
        assert_eq!(args.title, "Spool App");
    }

    #[test]
    fn emit_accepts_mode_flag() {
        let cli = Cli::parse_from(["spool", "emit", "--mode", "production"]);
        let Command::Emit(args) = cli.command else {
            panic!("expected emit command");
        };
        assert_eq!(args.mode.as_deref(), Some("production"));
    }
}
