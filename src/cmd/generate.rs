//! Generate command CLI handler.

use cleaning_seed::seed::{self, SeedConfig, SeedYamlConfig, TableStats};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// JSON output for the generate command
#[derive(Serialize)]
struct GenerateJsonOutput {
    output_file: String,
    seed: u64,
    dry_run: bool,
    statistics: GenerateStatistics,
    tables: Vec<TableStats>,
}

#[derive(Serialize)]
struct GenerateStatistics {
    tables_generated: usize,
    total_rows: usize,
    bytes_written: u64,
    elapsed_secs: f64,
}

pub fn run(
    output: Option<PathBuf>,
    seed: Option<u64>,
    config: Option<PathBuf>,
    dry_run: bool,
    json: bool,
    progress: bool,
) -> anyhow::Result<()> {
    let file_config = config
        .as_deref()
        .map(SeedYamlConfig::load)
        .transpose()?;

    let seed_config = SeedConfig {
        dry_run,
        progress: progress && !json,
        ..SeedConfig::resolve(output, seed, file_config.as_ref())
    };

    if seed_config.progress {
        eprintln!(
            "Generating test data (seed: {}) -> {}",
            seed_config.seed,
            seed_config.output.display()
        );
    }

    let start_time = Instant::now();
    let stats = seed::run(&seed_config)?;
    let elapsed = start_time.elapsed();

    if json {
        let output_json = GenerateJsonOutput {
            output_file: stats.output.display().to_string(),
            seed: stats.seed,
            dry_run: stats.dry_run,
            statistics: GenerateStatistics {
                tables_generated: stats.tables.len(),
                total_rows: stats.total_rows,
                bytes_written: stats.bytes_written,
                elapsed_secs: elapsed.as_secs_f64(),
            },
            tables: stats.tables,
        };
        println!("{}", serde_json::to_string_pretty(&output_json)?);
        return Ok(());
    }

    if seed_config.progress || dry_run {
        for table in &stats.tables {
            eprintln!("  {}: {} rows", table.name, table.rows);
        }
        eprintln!("  Total rows: {}", stats.total_rows);
        eprintln!("  Elapsed time: {:.3?}", elapsed);
    }

    if dry_run {
        println!("Dry run complete. No files written.");
    } else {
        println!("{}", seed::completion_message(&stats.output));
    }

    Ok(())
}
