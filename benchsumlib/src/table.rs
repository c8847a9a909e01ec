//! The label-to-values table built from result files.

use indexmap::IndexMap;
use serde::Serialize;

use crate::extract::extract;
use crate::value::Value;

/// Values grouped by label, in the order labels were first seen.
///
/// Values for each label are kept in the order they were encountered;
/// sorting happens only when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    groups: IndexMap<String, Vec<Value>>,
}

impl ResultTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to a label's group, creating the group on first use.
    pub fn push(&mut self, label: impl Into<String>, value: Value) {
        self.groups.entry(label.into()).or_default().push(value);
    }

    /// Extract every matching line of `text` into the table.
    ///
    /// Lines are split on `\n` and `\r`, so `\r\n` and bare `\r` endings both
    /// work. Non-matching lines are skipped. Returns the number of lines that
    /// matched.
    pub fn ingest(&mut self, text: &str) -> usize {
        let mut matched = 0;
        for line in text.split(|c: char| c == '\n' || c == '\r') {
            if let Some(record) = extract(line) {
                self.push(record.label, record.value);
                matched += 1;
            }
        }
        matched
    }

    /// Values collected for a label, in encounter order.
    pub fn get(&self, label: &str) -> Option<&[Value]> {
        self.groups.get(label).map(Vec::as_slice)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// `(label, values)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.groups
            .iter()
            .map(|(label, values)| (label.as_str(), values.as_slice()))
    }
}
