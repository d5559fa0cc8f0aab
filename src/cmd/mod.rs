mod generate;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cleaning-seed")]
#[command(version)]
#[command(
    about = "Generate SQL test data for the cleaning service marketplace schema",
    long_about = None
)]
pub struct Cli {
    /// Output SQL file [default: test_data.sql]
    pub output: Option<PathBuf>,

    /// Random seed for reproducible output (random if not specified)
    #[arg(long)]
    pub seed: Option<u64>,

    /// YAML config file providing seed and output
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Generate data but do not write the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Output run statistics as JSON
    #[arg(long)]
    pub json: bool,

    /// Show progress during generation
    #[arg(short, long)]
    pub progress: bool,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    generate::run(
        cli.output,
        cli.seed,
        cli.config,
        cli.dry_run,
        cli.json,
        cli.progress,
    )
}
