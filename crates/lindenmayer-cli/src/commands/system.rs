//! Resolve a system from command-line sources.

use anyhow::{Context, Result};
use tracing::debug;

use lindenmayer_core::SystemDescription;

use crate::SystemArgs;

/// Merge the description file (if any) with `--axiom` and `--rule` flags.
///
/// Flag rules are appended after file rules, so file rules keep priority.
/// Rules alone are enough; the axiom is then empty.
pub fn resolve(args: &SystemArgs) -> Result<SystemDescription> {
    let mut description = match (&args.file, &args.axiom) {
        (Some(path), _) => SystemDescription::load(path)
            .with_context(|| format!("Failed to load description {}", path.display()))?,
        (None, Some(axiom)) => SystemDescription::new(axiom.clone()),
        (None, None) if !args.rules.is_empty() => SystemDescription::new(""),
        (None, None) => anyhow::bail!("No system given. Use --file, --axiom or --rule"),
    };

    if let Some(axiom) = &args.axiom {
        description.axiom.clone_from(axiom);
    }
    description.rules.extend(args.rules.iter().cloned());

    debug!(
        axiom = %description.axiom,
        rules = description.rules.len(),
        "system_resolved"
    );

    Ok(description)
}
