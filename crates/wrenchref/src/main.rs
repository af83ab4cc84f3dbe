//! wrenchref - ISO metric wrench-size reference table

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wrenchref_core::{StoreConfig, WrenchSizes};

#[derive(Parser)]
#[command(
    name = "wrenchref",
    version,
    about = "ISO metric wrench-size reference table",
    long_about = "Reads the wrench-size reference table (tamano_llaves in tornillos.db)\n\
                  and prints it or looks up single metrics.\n\
                  \n\
                  Examples:\n\
                    wrenchref                        # Print the full table (default)\n\
                    wrenchref table --json           # Full table as JSON\n\
                    wrenchref lookup M8              # Nominal diameter and wrench size of M8\n\
                    wrenchref metrics                # List available metrics\n\
                  \n\
                  Environment Variables:\n\
                    WRENCHREF_DATA_DIR               # Directory holding tornillos.db\n\
                    WRENCHREF_CONFIG                 # Path to config TOML\n\
                    WRENCHREF_NO_COLOR               # Disable ANSI colors (log-friendly)\n\
                    RUST_LOG                         # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory holding the database (default: platform data dir)
    #[arg(long, env = "WRENCHREF_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Config file (default: <config dir>/wrenchref/config.toml)
    #[arg(long, env = "WRENCHREF_CONFIG")]
    config: Option<PathBuf>,

    /// Database file name inside the data directory
    #[arg(long)]
    database: Option<String>,

    /// Table name
    #[arg(long)]
    table: Option<String>,

    /// Disable ANSI colors (log-friendly)
    #[arg(
        long,
        env = "WRENCHREF_NO_COLOR",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the full table (default)
    Table {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show nominal diameter and wrench size of one metric
    Lookup {
        /// Metric designation, e.g. M8
        metric: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available metrics
    Metrics,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .init();

    let config = load_config(&cli)?;
    let paths = config
        .paths()
        .context("Could not determine data directory")?;
    let sizes = WrenchSizes::from_config(&config, &paths);

    tracing::debug!(
        db = %sizes.db_path().display(),
        table = sizes.table_name(),
        "Resolved reference table"
    );

    match cli.command.unwrap_or(Command::Table { json: false }) {
        Command::Table { json } => run_table(&sizes, json, cli.no_color)?,
        Command::Lookup { metric, json } => run_lookup(&sizes, &metric, json)?,
        Command::Metrics => run_metrics(&sizes)?,
    }

    Ok(())
}

/// Config file, then command-line overrides
fn load_config(cli: &Cli) -> Result<StoreConfig> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => dirs::config_dir().map(|d| d.join("wrenchref").join("config.toml")),
    };

    let mut config = match path {
        Some(path) => StoreConfig::load(&path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => StoreConfig::default(),
    };

    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(database) = &cli.database {
        config.database = database.clone();
    }
    if let Some(table) = &cli.table {
        config.table = table.clone();
    }

    Ok(config)
}

fn run_table(sizes: &WrenchSizes, json: bool, no_color: bool) -> Result<(), cli::CliError> {
    let rows = sizes.rows()?;
    println!("{}", cli::format_table(&rows, json, no_color));
    Ok(())
}

fn run_lookup(sizes: &WrenchSizes, metric: &str, json: bool) -> Result<(), cli::CliError> {
    let row = sizes.row(metric)?;
    println!("{}", cli::format_lookup(&row, json));
    Ok(())
}

fn run_metrics(sizes: &WrenchSizes) -> Result<(), cli::CliError> {
    let metrics = sizes.metrics()?;
    println!("{}", cli::format_metrics(&metrics));
    Ok(())
}
