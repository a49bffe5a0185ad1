//! Expand command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use lindenmayer_core::{LSystem, Rule};

use crate::commands::system;
use crate::config::{Config, OutputFormat};
use crate::SystemArgs;

/// JSON shape of an expansion.
#[derive(Debug, Serialize)]
struct Expansion<'a> {
    axiom: &'a str,
    generation: usize,
    rules: &'a [Rule],
    sentence: &'a str,
}

/// Expand the system and render it.
///
/// Generation count precedence: `generations` flag, a non-zero count in the
/// description, then the configured default. Needs an axiom from `--file` or
/// `--axiom`.
pub fn execute(
    config: &Config,
    args: &SystemArgs,
    generations: Option<usize>,
    format: OutputFormat,
    save: Option<PathBuf>,
) -> Result<String> {
    if args.file.is_none() && args.axiom.is_none() {
        anyhow::bail!("No axiom given. Use --file or --axiom");
    }

    let mut description = system::resolve(args)?;
    description.generations = generations
        .or((description.generations > 0).then_some(description.generations))
        .unwrap_or(config.default_generations);

    if let Some(path) = save {
        description
            .save(&path)
            .with_context(|| format!("Failed to save description to {}", path.display()))?;
    }

    let lsystem = description.expand();
    info!(
        generation = lsystem.generation(),
        len = lsystem.sentence().len(),
        "system_expanded"
    );

    render(&lsystem, format)
}

/// Render a system's current sentence in the requested format.
pub fn render(lsystem: &LSystem, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(lsystem.sentence().to_string()),
        OutputFormat::Json => {
            let expansion = Expansion {
                axiom: lsystem.axiom(),
                generation: lsystem.generation(),
                rules: lsystem.current_rules(),
                sentence: lsystem.sentence(),
            };
            Ok(serde_json::to_string_pretty(&expansion)?)
        }
    }
}
