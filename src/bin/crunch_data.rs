//! CLI entry point for `crunch_data`.
//!
//! Reads `fetch_data` interchange rows from stdin, accumulates the three
//! sensor columns, and prints the mean and median of each as a plain-text
//! report or, with `--json`, as JSON.

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Parser;
use lpo_weather::output::{render_json, render_text};
use lpo_weather::parser::parse_record;
use lpo_weather::record::Record;
use lpo_weather::stats::DaySummary;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "crunch_data")]
#[command(
    about = "Summarize fetch_data output: mean and median per sensor column",
    long_about = None
)]
struct Cli {
    /// Output the summary as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Unrecognized arguments, ignored with a warning
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    lpo_weather::init_tracing();

    let cli = Cli::parse();
    for arg in &cli.ignored {
        warn!(argument = %arg, "Unknown argument ignored");
    }

    let stdin = std::io::stdin();
    let records = read_records(stdin.lock())?;
    debug!(rows = records.len(), "Input consumed");

    let summary = DaySummary::from_records(&records)?;

    if cli.json {
        println!("{}", render_json(&summary)?);
    } else {
        print!("{}", render_text(&summary));
    }

    Ok(())
}

/// Reads interchange rows until EOF. Blank lines are skipped; any other
/// malformed line is fatal, naming the line number.
fn read_records(input: impl BufRead) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line.context("reading standard input")?;
        if line.trim().is_empty() {
            continue;
        }

        records.push(
            parse_record(&line).with_context(|| format!("input line {}: {:?}", idx + 1, line))?,
        );
    }

    Ok(records)
}
