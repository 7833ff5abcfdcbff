//! # cts-scan
//!
//! Query strategies over a tag index.
//!
//! A scanner is built over an opened [`TagIndex`](cts_index::TagIndex) and a
//! base directory. Each call to [`TagScanner::query`] returns a fresh lazy
//! iterator of [`Entry`] values whose `file` is already absolute.
//!
//! ## Strategies
//! - [`FullScanner`]: every record in stored order, query text ignored
//! - [`PartialScanner`]: records whose name contains the query text
//! - [`IndexedScanner`]: exact or prefix lookup through the index itself
//!
//! ## Usage
//!
//! ```rust
//! use cts_index::TagFile;
//! use cts_scan::{IndexedOptions, IndexedScanner, TagScanner};
//!
//! let mut tags = TagFile::from_text(
//!     "!_TAG_FILE_SORTED\t1\t//\nfoo\ta.c\t10\nfoobar\tb.c\t20\n",
//! );
//! let options = IndexedOptions { prefix: true, ..Default::default() };
//! let mut scanner = IndexedScanner::new(&mut tags, "/src", options);
//!
//! let names: Vec<String> = scanner
//!     .query("foo")
//!     .map(|entry| entry.unwrap().name().to_string())
//!     .collect();
//! assert_eq!(names, ["foo", "foobar"]);
//! ```
//!
//! ## Traversal precondition
//! A tag index keeps its cursors inside the handle, so only one traversal
//! may run against a handle at a time. Scanners hold the handle by value or
//! by `&mut`, and a query iterator borrows its scanner mutably, so the
//! borrow checker rejects overlapping traversals.

pub mod entry;
pub mod full;
pub mod indexed;
pub mod options;
pub mod partial;
pub mod scanner;

#[cfg(test)]
mod test_support;

pub use entry::{resolve_path, Entry};
pub use full::{FullScan, FullScanner};
pub use indexed::{IndexedScan, IndexedScanner};
pub use options::{IndexedOptions, PartialOptions, ScanOptions};
pub use partial::PartialScanner;
pub use scanner::{build_scanner, EntryIter, TagScanner};
