//! lsys - expand Lindenmayer systems from the command line.
//!
//! Systems come from a JSON description file, from `--axiom`/`--rule` flags,
//! or both (flags are applied on top of the file).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use lindenmayer_core::Rule;

mod commands;
mod config;

use config::Config;

/// lsys - expand L-systems and preview rule application.
#[derive(Parser, Debug)]
#[command(
    name = "lsys",
    author,
    version,
    about = "Expand Lindenmayer systems",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the system comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SystemArgs {
    /// JSON description file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Axiom (overrides the description's).
    #[arg(short, long)]
    pub axiom: Option<String>,

    /// Rule as PREDECESSOR=SUCCESSOR (repeatable, appended after file rules).
    #[arg(short, long = "rule")]
    pub rules: Vec<Rule>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Expand a system and print the resulting sentence.
    Expand {
        #[command(flatten)]
        system: SystemArgs,

        /// Generations to expand (defaults to the description, then the config).
        #[arg(short = 'n', long)]
        generations: Option<usize>,

        /// Output format: plain or json.
        #[arg(long)]
        format: Option<String>,

        /// Also write the resolved description to this file.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Print what INPUT becomes after one generation.
    Successor {
        #[command(flatten)]
        system: SystemArgs,

        /// Text to rewrite.
        input: String,
    },

    /// List the rules in priority order.
    Rules {
        #[command(flatten)]
        system: SystemArgs,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration commands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Value to set.
        value: String,
    },

    /// Reset configuration to defaults.
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    // RUST_LOG takes over when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load()?;

    match cli.command {
        Commands::Expand {
            system,
            generations,
            format,
            save,
        } => {
            let format = match format {
                Some(f) => f.parse()?,
                None => config.format,
            };
            let output = commands::expand::execute(&config, &system, generations, format, save)?;
            println!("{}", output);
        }

        Commands::Successor { system, input } => {
            let lsystem = commands::system::resolve(&system)?.build();
            println!("{}", lsystem.successor(&input));
        }

        Commands::Rules { system } => {
            let description = commands::system::resolve(&system)?;
            for rule in &description.rules {
                println!("{}", rule);
            }
        }

        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => commands::config::show(&config)?,
            ConfigCommands::Get { key } => commands::config::get(&config, &key)?,
            ConfigCommands::Set { key, value } => {
                commands::config::set(&mut config, &key, &value)?
            }
            ConfigCommands::Reset => commands::config::reset()?,
        },
    }

    Ok(())
}
