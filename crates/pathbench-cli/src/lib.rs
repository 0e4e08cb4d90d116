//! Command-line front end for the pathbench shortest-path engine

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub mod commands;
pub mod config;

use commands::{
    OutputContext, compare, completion, config as config_cmd, generate, inspect, matrix, run,
};
use config::{Config, OutputFormat};

/// Command-line interface for shortest-path benchmarking
#[derive(Parser)]
#[command(name = "pathbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, env = "PATHBENCH_CONFIG", global = true)]
    pub config: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one algorithm (or `all`) for a source/target pair
    Run(run::RunArgs),
    /// Compare every algorithm on a source/target pair
    Compare(compare::CompareArgs),
    /// All-pairs shortest distances (Floyd-Warshall)
    Matrix(matrix::MatrixArgs),
    /// Generate a random graph as an adjacency matrix
    Generate(generate::GenerateArgs),
    /// Show graph size, flags and adjacency matrix
    Inspect(inspect::InspectArgs),
    /// Configuration management
    Config(config_cmd::ConfigArgs),
    /// Generate shell completion scripts
    Completion(completion::CompletionArgs),
}

/// Install the global tracing subscriber; logs go to stderr
///
/// `RUST_LOG` wins, then the config file's `log_filter`, then a level
/// picked from `--debug`/`--verbose`.
pub fn init_tracing(cli: &Cli, cfg: &Config) {
    let fallback = if cli.debug {
        "pathbench_core=trace,pathbench_cli=trace".to_string()
    } else if cli.verbose {
        "pathbench_core=debug,pathbench_cli=debug".to_string()
    } else {
        cfg.log_filter
            .clone()
            .unwrap_or_else(|| "pathbench_core=warn,pathbench_cli=warn".to_string())
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Load configuration, set up logging and dispatch the subcommand
pub fn run(cli: Cli) -> Result<()> {
    let cfg = Config::load(cli.config.as_deref())?;
    init_tracing(&cli, &cfg);

    let output = OutputContext {
        json: cli.json || cfg.output == OutputFormat::Json,
        verbose: cli.verbose,
        debug: cli.debug,
    };
    tracing::debug!(config = ?cli.config, json = output.json, "starting pathbench");

    match cli.command {
        Commands::Run(args) => run::execute(args, &cfg, &output),
        Commands::Compare(args) => compare::execute(args, &cfg, &output),
        Commands::Matrix(args) => matrix::execute(args, &cfg, &output),
        Commands::Generate(args) => generate::execute(args, &cfg, &output),
        Commands::Inspect(args) => inspect::execute(args, &cfg, &output),
        Commands::Config(args) => config_cmd::execute(args, &cfg, cli.config.as_deref(), &output),
        Commands::Completion(args) => completion::execute(args, &output),
    }
}
