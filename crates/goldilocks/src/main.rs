//! Goldilocks CLI
//!
//! Labels every planet of an exoplanet catalog as inside or outside its host
//! star's habitable zone.
//!
//! # Commands
//!
//! - `clean`: drop rows missing required fields
//! - `classify`: add the `In Goldilock Zone` flag column
//! - `summary`: count and list the habitable planets
//! - `zone`: habitable zone of a single star
//!
//! Catalogs go to stdout or files; logs always go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;


const DEFAULT_LOG_FILTER: &str = "goldilocks=info,catalog=info";

/// Habitable-zone classification for exoplanet catalogs
#[derive(Parser)]
#[command(name = "goldilocks", version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Cell delimiter, overriding the configuration
    #[arg(long, global = true, value_name = "CHAR")]
    delimiter: Option<char>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop rows missing required fields
    Clean(commands::CleanArgs),
    /// Add the habitable-zone flag column to a catalog
    ///
    /// Writes `<input stem>_with_goldilock_zone.csv` beside the input unless
    /// an output path is given.
    Classify(commands::ClassifyArgs),
    /// Classify a catalog and report how many planets are habitable
    Summary(commands::SummaryArgs),
    /// Luminosity and habitable zone of a single star
    Zone(commands::ZoneArgs),
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        1 => EnvFilter::new("goldilocks=debug,catalog=debug,stellar=debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, stdout: &mut impl Write) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref(), cli.delimiter)?;

    match cli.command {
        Commands::Clean(args) => commands::clean(&config, args, stdout),
        Commands::Classify(args) => commands::classify(&config, args).map(|_| ()),
        Commands::Summary(args) => commands::summary(&config, args, stdout),
        Commands::Zone(args) => commands::zone(&config, args, stdout),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    run(cli, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
