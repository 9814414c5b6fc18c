//! Spool CLI entry point.

use clap::Parser;
use spool_cli::{cli, commands, logger};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    match args.command {
        cli::Command::Emit(emit_args) => commands::emit_execute(emit_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    }
}
