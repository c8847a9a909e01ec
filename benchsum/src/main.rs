//! # benchsum
//!
//! Prints a per-label summary of the benchmark results in `./results`.
//!
//! ## Overview
//!
//! benchsum is built on top of benchsumlib. Every file directly inside the
//! `results` directory of the current working directory is scanned; each
//! line ending in a number contributes that number to the group named by the
//! line's leading token. One line per label is printed, values sorted:
//!
//! ```text
//! $ cat results/run1.txt
//! alpha_fn        12
//! beta_fn          7
//! alpha_fn          3
//! $ benchsum
//! alpha_fn             :      3     12
//! beta_fn              :      7
//! ```
//!
//! There are no options beyond `--help` and `--version`. Diagnostics go to
//! stderr and can be raised with `RUST_LOG=debug`.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use benchsumlib::{summarize, CollectOptions, RESULTS_DIR};
use clap::Command;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("benchsum")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Summarize benchmark result files into a per-label table of sorted values")
        .after_help("Reads every file in ./results and prints one line per label.")
}

/// Send tracing output to stderr so stdout carries only the table
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run() -> anyhow::Result<()> {
    let lines = summarize(RESULTS_DIR, &CollectOptions::new())
        .with_context(|| format!("could not summarize '{RESULTS_DIR}'"))?;

    debug!(labels = lines.len(), "rendered summary");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let _ = build_command().get_matches();
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
