//! Exact and prefix lookup through the index's own search.

use std::path::{Path, PathBuf};

use cts_index::{IndexError, SearchFlags, TagIndex};
use tracing::{debug, trace};

use crate::entry::{absolute_base, Entry};
use crate::options::IndexedOptions;
use crate::scanner::{step, Cursor, EntryIter, TagScanner};

/// Yields the records the index itself matches for the query text.
///
/// Ordering and the end of the matching run are decided by the index;
/// nothing is filtered here. On a sorted tag file this avoids reading the
/// records outside the run.
#[derive(Debug)]
pub struct IndexedScanner<I> {
    index: I,
    base_dir: PathBuf,
    options: IndexedOptions,
}

impl<I: TagIndex> IndexedScanner<I> {
    pub fn new(index: I, base_dir: impl AsRef<Path>, options: IndexedOptions) -> Self {
        Self {
            index,
            base_dir: absolute_base(base_dir.as_ref()),
            options,
        }
    }

    /// Lookup mode passed to the index.
    pub fn flags(&self) -> SearchFlags {
        SearchFlags::new(self.options.prefix, self.options.insensitive)
    }

    pub fn options(&self) -> IndexedOptions {
        self.options
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Look up `text` under the configured mode.
    pub fn lookup(&mut self, text: &str) -> IndexedScan<'_, I> {
        let flags = self.flags();
        IndexedScan {
            index: &mut self.index,
            base_dir: &self.base_dir,
            query: text.to_string(),
            flags,
            cursor: Cursor::Start,
            yielded: 0,
        }
    }

    pub fn into_inner(self) -> I {
        self.index
    }
}

impl<I: TagIndex> TagScanner for IndexedScanner<I> {
    fn query<'s>(&'s mut self, text: &str) -> EntryIter<'s> {
        debug!(query = text, flags = ?self.flags(), "Indexed lookup");
        Box::new(self.lookup(text))
    }
}

/// Iterator returned by [`IndexedScanner::lookup`].
#[derive(Debug)]
pub struct IndexedScan<'s, I> {
    index: &'s mut I,
    base_dir: &'s Path,
    query: String,
    flags: SearchFlags,
    cursor: Cursor,
    yielded: usize,
}

impl<I: TagIndex> Iterator for IndexedScan<'_, I> {
    type Item = Result<Entry, IndexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.cursor {
            Cursor::Start => TagIndex::find(&mut *self.index, &self.query, self.flags),
            Cursor::Next => TagIndex::find_next(&mut *self.index),
            Cursor::Done => return None,
        };

        let item = step(&mut self.cursor, result, self.base_dir);
        match &item {
            Some(Ok(_)) => self.yielded += 1,
            Some(Err(e)) => debug!(error = %e, query = %self.query, "Indexed lookup failed"),
            None => trace!(query = %self.query, yielded = self.yielded, "Indexed lookup finished"),
        }
        item
    }
}
