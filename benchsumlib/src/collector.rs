//! High-level collection API.
//!
//! Reads every entry of a results directory, extracts label/value pairs from
//! each line and groups them into a [`ResultTable`]. Collection fails fast:
//! the first unreadable or undecodable file aborts the run and no partial
//! table is returned.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::BenchsumError;
use crate::options::CollectOptions;
use crate::output::render;
use crate::source::list_results;
use crate::table::ResultTable;
use crate::Result;

/// Collect a results directory into a table.
///
/// Files are visited in the order chosen by `options`; labels keep the order
/// in which that traversal first meets them.
///
/// # Example
///
/// ```rust,ignore
/// use benchsumlib::{collect, CollectOptions};
///
/// let table = collect("results", &CollectOptions::new())?;
/// for (label, values) in table.iter() {
///     println!("{label}: {} samples", values.len());
/// }
/// ```
pub fn collect(dir: impl AsRef<Path>, options: &CollectOptions) -> Result<ResultTable> {
    let files = list_results(dir, options.file_order)?;

    let mut table = ResultTable::new();

    for path in files {
        let text = read_results_file(&path)?;
        let matched = table.ingest(&text);
        debug!(path = %path.display(), matched, "scanned results file");
    }

    Ok(table)
}

/// Collect a results directory and render it as summary lines.
pub fn summarize(dir: impl AsRef<Path>, options: &CollectOptions) -> Result<Vec<String>> {
    let table = collect(dir, options)?;
    Ok(render(&table))
}

/// Read a results file fully as UTF-8 text.
///
/// Fails with [`BenchsumError::FileRead`] when the path cannot be read as a
/// file (this includes directories) and with [`BenchsumError::Encoding`] when
/// its bytes are not valid UTF-8.
pub fn read_results_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| BenchsumError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|e| BenchsumError::Encoding {
        path: path.to_path_buf(),
        source: e.utf8_error(),
    })
}
