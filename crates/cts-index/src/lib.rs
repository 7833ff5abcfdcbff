//! # cts-index
//!
//! Read access to ctags tag files.
//!
//! This crate is the collaborator the scanners in `cts-scan` query through.
//! It never writes tag files; it only opens them and walks their records.
//!
//! ## Features
//! - `TagIndex` trait with sequential (`first`/`next`) and indexed
//!   (`find`/`find_next`) cursors
//! - `TagFile` reader for the Exuberant/Universal ctags text format
//! - Binary search over sorted and case-folded tag files
//! - Pseudo-tag (`!_TAG_...`) header handling
//!
//! ## Usage
//!
//! ```rust
//! use cts_index::{SearchFlags, TagFile, TagIndex};
//!
//! let mut tags = TagFile::from_text("main\tsrc/main.c\t/^int main(void)$/;\"\tf\n");
//! let record = tags.find("main", SearchFlags::FULL_MATCH).unwrap().unwrap();
//! assert_eq!(record.file, "src/main.c");
//! ```

pub mod error;
pub mod flags;
pub mod index;
pub mod record;
pub mod tag_file;

pub use error::IndexError;
pub use flags::SearchFlags;
pub use index::TagIndex;
pub use record::TagRecord;
pub use tag_file::{PseudoTag, SortState, TagFile};
