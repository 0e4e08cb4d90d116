use anyhow::Result;
use clap::{Args, Subcommand};

use super::OutputContext;
use crate::config::Config;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Write a configuration file with default values
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
}

pub fn execute(
    args: ConfigArgs,
    cfg: &Config,
    path: Option<&str>,
    output: &OutputContext,
) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(cfg, output),
        ConfigCommands::Init { force } => init_config(path, force, output),
        ConfigCommands::Path => show_path(path, output),
    }
}

fn show_config(cfg: &Config, output: &OutputContext) -> Result<()> {
    if output.json {
        return output.print_json(cfg);
    }

    let generator = &cfg.generator;
    println!("Current Configuration");
    println!("=====================");
    println!("Output:     {:?}", cfg.output);
    println!(
        "Log filter: {}",
        cfg.log_filter.as_deref().unwrap_or("(not set)")
    );
    println!("Directed:   {}", cfg.directed);
    println!("Weighted:   {}", cfg.weighted);
    println!();
    println!("Generator");
    println!("  nodes:            {}", generator.nodes);
    println!("  edge_probability: {}", generator.edge_probability);
    println!("  directed:         {}", generator.directed);
    println!("  weighted:         {}", generator.weighted);
    println!(
        "  weights:          {}..={}",
        generator.min_weight, generator.max_weight
    );
    println!(
        "  seed:             {}",
        generator
            .seed
            .map_or_else(|| "(random)".to_string(), |seed| seed.to_string())
    );

    Ok(())
}

fn init_config(path: Option<&str>, force: bool, output: &OutputContext) -> Result<()> {
    let config_path = Config::resolve_path(path);

    if config_path.exists() && !force {
        output.print_error(&format!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        ));
        return Ok(());
    }

    Config::default().save(path)?;
    output.print_success(&format!(
        "Configuration file created at {}",
        config_path.display()
    ));

    Ok(())
}

fn show_path(path: Option<&str>, output: &OutputContext) -> Result<()> {
    let config_path = Config::resolve_path(path);
    println!("{}", config_path.display());
    if output.verbose {
        if config_path.exists() {
            output.print_info("File exists");
        } else {
            output.print_info("File does not exist");
        }
    }
    Ok(())
}
