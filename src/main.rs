use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use capital_gains::cli::Cli;
use capital_gains::config::TaxConfig;
use capital_gains::model::TaxLine;
use capital_gains::{engine, input};

fn main() -> Result<()> {
    // Logging goes to stderr; stdout carries only the JSON results.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let reader: Box<dyn BufRead> = match &cli.file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut sessions = 0usize;

    // One session per line; results for already-printed sessions stand
    // even if a later line fails.
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let operations = input::parse_session(&line)?;
        let taxes = engine::run(&operations, config)?;

        let result: Vec<TaxLine> = taxes.into_iter().map(|tax| TaxLine { tax }).collect();
        serde_json::to_writer(&mut out, &result)?;
        writeln!(out)?;
        sessions += 1;
    }

    info!(sessions, "all sessions processed");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<TaxConfig> {
    let mut config = match &cli.config {
        Some(path) => TaxConfig::from_file(path)?,
        None => TaxConfig::default(),
    };

    if let Some(threshold) = cli.exemption_threshold {
        config.exemption_threshold = threshold;
    }
    if let Some(rate) = cli.tax_rate {
        config.tax_rate = rate;
    }

    Ok(config)
}
