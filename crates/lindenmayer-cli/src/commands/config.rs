//! Config command implementation.
//!
//! Manages CLI configuration.

use anyhow::Result;

use crate::config::Config;

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("lsys Configuration");
    println!("{:-<40}", "");
    println!("Default Generations: {}", config.default_generations);
    println!("Output Format:       {}", config.format);

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value and persist it.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    apply(config, key, value)?;
    config.save()?;
    println!("Set {} to: {}", key, value);
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    println!("{}", lookup(config, key)?);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}

fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "default-generations" | "generations" => config.default_generations = value.parse()?,
        "format" => config.format = value.parse()?,
        _ => anyhow::bail!(
            "Unknown config key: {}. Valid keys: default-generations, format",
            key
        ),
    }
    Ok(())
}

fn lookup(config: &Config, key: &str) -> Result<String> {
    match key {
        "default-generations" | "generations" => Ok(config.default_generations.to_string()),
        "format" => Ok(config.format.to_string()),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
}
