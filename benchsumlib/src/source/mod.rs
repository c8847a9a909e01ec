//! Source discovery: find the result files to scan.
//!
//! This is the first stage of the pipeline. A results directory is listed
//! one level deep, with no filtering by name or extension; the traversal
//! order is chosen with [`FileOrder`](crate::FileOrder).
//!
//! ## Example
//!
//! ```rust,ignore
//! use benchsumlib::source::list_results;
//! use benchsumlib::FileOrder;
//!
//! let files = list_results("results", FileOrder::Sorted)?;
//! ```

pub mod listing;

pub use listing::list_results;
