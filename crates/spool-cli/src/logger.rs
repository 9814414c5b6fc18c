//! Logging infrastructure for the Spool CLI.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at program start. Verbosity resolves in order: `--verbose`
/// (debug for spool crates), `--quiet` (errors only), `RUST_LOG`, then info.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("spool=debug,spool_config=debug,spool_cli=debug")
    } else if quiet {
        EnvFilter::new("spool=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("spool=info,spool_config=info,spool_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
