//! Text rendering of a [`ResultTable`].
//!
//! One line per label, in first-seen order:
//!
//! ```text
//! alpha_fn             :      3     12
//! beta_fn              :      7
//! ```
//!
//! The label is left-aligned in a field of [`LABEL_WIDTH`] characters and
//! followed by a colon. Each value, sorted ascending, is written as a single
//! space plus a right-aligned field of [`VALUE_WIDTH`] characters. Neither
//! field truncates; longer text just widens it.

use std::fmt::Write;

use crate::table::ResultTable;
use crate::value::Value;

/// Minimum width of the label column.
pub const LABEL_WIDTH: usize = 21;

/// Minimum width of each value field, not counting its leading space.
pub const VALUE_WIDTH: usize = 6;

/// Render every label of the table as a summary line.
pub fn render(table: &ResultTable) -> Vec<String> {
    table
        .iter()
        .map(|(label, values)| {
            let mut sorted = values.to_vec();
            sorted.sort();
            format_line(label, &sorted)
        })
        .collect()
}

/// Format one summary line. Values are written in the order given.
pub fn format_line(label: &str, values: &[Value]) -> String {
    let mut line = format!("{:<width$}:", label, width = LABEL_WIDTH);
    for value in values {
        // Writing to a String cannot fail
        let _ = write!(line, " {:>width$}", value, width = VALUE_WIDTH);
    }
    line
}
