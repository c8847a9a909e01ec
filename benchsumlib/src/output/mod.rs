//! Output formatting: present collected results as text.
//!
//! This module handles the last stage of the pipeline. Rendering is pure
//! formatting over an already-built [`ResultTable`](crate::ResultTable):
//! values are sorted per label and laid out in fixed-width columns. Nothing
//! here touches the filesystem or prints.
//!
//! ## Example
//!
//! ```rust
//! use benchsumlib::output::render;
//! use benchsumlib::ResultTable;
//!
//! let mut table = ResultTable::new();
//! table.ingest("svc: 100\nsvc: 50\n");
//!
//! assert_eq!(render(&table), vec!["svc                  :     50    100"]);
//! ```

pub mod summary;

pub use summary::{format_line, render, LABEL_WIDTH, VALUE_WIDTH};
