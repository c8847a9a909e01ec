//! Options controlling how a results directory is collected.

use serde::{Deserialize, Serialize};

/// Name of the results directory, relative to the working directory.
pub const RESULTS_DIR: &str = "results";

/// Order in which the entries of a results directory are visited.
///
/// Labels appear in the output in first-seen order, so this decides the
/// row order when labels are spread across several files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOrder {
    /// Sorted by file name, reproducible across platforms (default)
    #[default]
    Sorted,
    /// Whatever order the operating system lists entries in
    Listing,
}

/// Options for collecting results.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Traversal order of directory entries
    pub file_order: FileOrder,
}

impl CollectOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the traversal order.
    pub fn file_order(mut self, order: FileOrder) -> Self {
        self.file_order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_sorted() {
        assert_eq!(CollectOptions::new().file_order, FileOrder::Sorted);
    }

    #[test]
    fn test_builder_sets_order() {
        let options = CollectOptions::new().file_order(FileOrder::Listing);
        assert_eq!(options.file_order, FileOrder::Listing);
    }

    #[test]
    fn test_file_order_serde_names() {
        assert_eq!(
            serde_json::to_string(&FileOrder::Listing).unwrap(),
            "\"listing\""
        );
        let order: FileOrder = serde_json::from_str("\"sorted\"").unwrap();
        assert_eq!(order, FileOrder::Sorted);
    }
}
