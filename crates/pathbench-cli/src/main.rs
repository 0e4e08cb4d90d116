use anyhow::Result;
use clap::Parser;
use pathbench_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    pathbench_cli::run(cli)
}
