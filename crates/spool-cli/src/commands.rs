//! CLI command implementations.

use std::fs;

use anyhow::Context;
use tracing::info;

use spool_config::{
    Assembler, BuildMode, BundleConfig, ConfigValidator, SchemaValidator,
};

use crate::cli::{CheckArgs, EmitArgs};
use crate::shell::ShellRenderer;

/// Assemble the configuration and emit it as JSON.
pub fn emit_execute(args: EmitArgs) -> anyhow::Result<()> {
    let mode = match args.mode.as_deref() {
        Some(value) => BuildMode::resolve(Some(value)),
        None => BuildMode::from_env(),
    };

    let renderer = ShellRenderer::new(args.title);
    let config = Assembler::new(&args.root)
        .mode(mode)
        .assemble(&renderer)
        .context("failed to assemble bundler configuration")?;
    SchemaValidator.validate(&config)?;

    let json = serde_json::to_string_pretty(&config.to_value()?)?;
    match args.out {
        Some(path) => {
            fs::write(&path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), mode = %config.mode, "wrote configuration");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Validate an existing configuration JSON file.
pub fn check_execute(args: CheckArgs) -> anyhow::Result<()> {
    let content = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read {}", args.config.display()))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", args.config.display()))?;

    let config = BundleConfig::from_value(value)?;
    SchemaValidator.validate(&config)?;

    println!("{}: ok ({} mode)", args.config.display(), config.mode);
    Ok(())
}
