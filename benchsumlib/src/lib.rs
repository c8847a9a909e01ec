//! # benchsumlib
//!
//! Summarizes benchmark output: groups trailing integer measurements by the
//! label that starts each line and renders them as a sorted table.
//!
//! ## Overview
//!
//! Benchmark runs often leave a directory of text files full of lines like
//! `alpha_fn        12`. This library turns such a directory into one row
//! per label with every measurement for that label, sorted ascending:
//!
//! ```text
//! alpha_fn             :      3     12
//! beta_fn              :      7
//! ```
//!
//! The pipeline has three stages:
//!
//! - **Source**: list the direct entries of the results directory
//! - **Collect**: extract a label and a trailing value from each line and
//!   group values by label, keeping labels in first-seen order
//! - **Output**: sort each label's values and lay them out in fixed-width
//!   columns
//!
//! Lines that do not end in a digit are skipped. Values are arbitrary
//! precision, so long digit runs never overflow.
//!
//! ## Example
//!
//! ```rust
//! use benchsumlib::{collect, render, CollectOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let results = dir.path().join("results");
//! fs::create_dir(&results).unwrap();
//! fs::write(results.join("run1.txt"), "alpha_fn 12\nbeta_fn 7\nalpha_fn 3\n").unwrap();
//!
//! let table = collect(&results, &CollectOptions::new()).unwrap();
//! assert_eq!(table.len(), 2);
//!
//! let lines = render(&table);
//! assert_eq!(lines[0], "alpha_fn             :      3     12");
//! assert_eq!(lines[1], "beta_fn              :      7");
//! ```

pub mod collector;
pub mod error;
pub mod extract;
pub mod options;
pub mod output;
pub mod source;
pub mod table;
pub mod value;

pub use collector::{collect, read_results_file, summarize};
pub use error::BenchsumError;
pub use extract::{extract, Record};
pub use options::{CollectOptions, FileOrder, RESULTS_DIR};
pub use output::{format_line, render};
pub use table::ResultTable;
pub use value::Value;

/// Result type for benchsumlib operations
pub type Result<T> = std::result::Result<T, BenchsumError>;
