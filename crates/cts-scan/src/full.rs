//! Unfiltered scan over every record.

use std::path::{Path, PathBuf};

use cts_index::{IndexError, TagIndex};
use tracing::{debug, trace};

use crate::entry::{absolute_base, Entry};
use crate::scanner::{step, Cursor, EntryIter, TagScanner};

/// Yields every record in the index's stored order.
///
/// The query text is accepted for interface uniformity and otherwise
/// ignored.
#[derive(Debug)]
pub struct FullScanner<I> {
    index: I,
    base_dir: PathBuf,
}

impl<I: TagIndex> FullScanner<I> {
    pub fn new(index: I, base_dir: impl AsRef<Path>) -> Self {
        Self {
            index,
            base_dir: absolute_base(base_dir.as_ref()),
        }
    }

    /// Absolute directory record paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Walk the whole index from the first record.
    pub fn scan(&mut self) -> FullScan<'_, I> {
        FullScan {
            index: &mut self.index,
            base_dir: &self.base_dir,
            cursor: Cursor::Start,
            yielded: 0,
        }
    }

    /// Give the index handle back.
    pub fn into_inner(self) -> I {
        self.index
    }
}

impl<I: TagIndex> TagScanner for FullScanner<I> {
    fn query<'s>(&'s mut self, text: &str) -> EntryIter<'s> {
        debug!(query = text, "Full scan");
        Box::new(self.scan())
    }
}

/// Iterator returned by [`FullScanner::scan`].
#[derive(Debug)]
pub struct FullScan<'s, I> {
    index: &'s mut I,
    base_dir: &'s Path,
    cursor: Cursor,
    yielded: usize,
}

impl<I: TagIndex> Iterator for FullScan<'_, I> {
    type Item = Result<Entry, IndexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.cursor {
            Cursor::Start => TagIndex::first(&mut *self.index),
            Cursor::Next => TagIndex::next(&mut *self.index),
            Cursor::Done => return None,
        };

        let item = step(&mut self.cursor, result, self.base_dir);
        match &item {
            Some(Ok(_)) => self.yielded += 1,
            Some(Err(e)) => debug!(error = %e, yielded = self.yielded, "Full scan failed"),
            None => trace!(yielded = self.yielded, "Full scan finished"),
        }
        item
    }
}
