//! Seeding run: generate every table, render, write the output file.
//!
//! Tables are generated in a fixed order (accounts, profiles, categories,
//! services, profile views, shortlists, bookings), rendered in memory and
//! written with a single file write at the end.

mod config;

pub use config::{SeedConfig, SeedYamlConfig, DEFAULT_OUTPUT};

use crate::generator::{GeneratedData, Generator};
use crate::renderer;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Row count of one generated table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub name: String,
    pub rows: usize,
}

/// Statistics from a seeding run
#[derive(Debug, Default, Serialize)]
pub struct SeedStats {
    pub seed: u64,
    pub output: PathBuf,
    pub dry_run: bool,
    pub tables: Vec<TableStats>,
    pub total_rows: usize,
    pub bytes_written: u64,
}

/// Message printed once the output file has been written
pub fn completion_message(output: &Path) -> String {
    format!("Test data SQL written to '{}'.", output.display())
}

/// Generate all tables for `config.seed`, reporting each through `stats`
pub fn generate(config: &SeedConfig, stats: &mut SeedStats) -> GeneratedData {
    let pb = if config.progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb.set_message("Generating...");
        Some(pb)
    } else {
        None
    };

    let mut generator = Generator::new(config.seed);
    let data = generator.generate_with(|table| {
        if let Some(ref pb) = pb {
            pb.set_message(format!("{}: {} rows", table.name(), table.rows.len()));
        }
        stats.tables.push(TableStats {
            name: table.name().to_string(),
            rows: table.rows.len(),
        });
    });
    stats.total_rows = data.total_rows();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    data
}

/// Run a full seeding pass
pub fn run(config: &SeedConfig) -> anyhow::Result<SeedStats> {
    let mut stats = SeedStats {
        seed: config.seed,
        output: config.output.clone(),
        dry_run: config.dry_run,
        ..Default::default()
    };

    let data = generate(config, &mut stats);

    if config.dry_run {
        return Ok(stats);
    }

    if let Some(parent) = config.output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(&config.output)
        .with_context(|| format!("failed to create output file: {}", config.output.display()))?;
    let writer = BufWriter::with_capacity(256 * 1024, file);
    stats.bytes_written = renderer::render_to_writer(&data, writer)
        .with_context(|| format!("failed to write output file: {}", config.output.display()))?;

    Ok(stats)
}
