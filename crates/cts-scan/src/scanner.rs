//! The scanner contract and strategy selection.

use std::path::Path;

use cts_index::{IndexError, TagIndex, TagRecord};
use cts_types::ScanStrategy;

use crate::entry::Entry;
use crate::full::FullScanner;
use crate::indexed::IndexedScanner;
use crate::options::ScanOptions;
use crate::partial::PartialScanner;

/// Lazy sequence of entries produced by one query.
///
/// Index errors are passed through unchanged; the sequence ends after the
/// first error.
pub type EntryIter<'s> = Box<dyn Iterator<Item = Result<Entry, IndexError>> + 's>;

/// A query strategy over a tag index.
pub trait TagScanner {
    /// Start a new traversal for `text`.
    ///
    /// Every call starts from the beginning of the index. Nothing is read
    /// from the index until the returned iterator is polled.
    fn query<'s>(&'s mut self, text: &str) -> EntryIter<'s>;
}

/// Build the scanner for `strategy` over `index`.
pub fn build_scanner<'a, I>(
    strategy: ScanStrategy,
    index: I,
    base_dir: impl AsRef<Path>,
    options: ScanOptions,
) -> Box<dyn TagScanner + 'a>
where
    I: TagIndex + 'a,
{
    match strategy {
        ScanStrategy::Full => Box::new(FullScanner::new(index, base_dir)),
        ScanStrategy::Partial => Box::new(PartialScanner::new(index, base_dir, options.into())),
        ScanStrategy::Indexed => Box::new(IndexedScanner::new(index, base_dir, options.into())),
    }
}

/// Position of a scanner iterator relative to the index cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cursor {
    /// Nothing requested yet
    Start,
    /// At least one record returned
    Next,
    /// Exhausted or failed
    Done,
}

/// Turn one cursor step into an iterator item and move the cursor.
pub(crate) fn step(
    cursor: &mut Cursor,
    result: Result<Option<TagRecord>, IndexError>,
    base_dir: &Path,
) -> Option<Result<Entry, IndexError>> {
    match result {
        Ok(Some(record)) => {
            *cursor = Cursor::Next;
            Some(Ok(Entry::from_record(record, base_dir)))
        }
        Ok(None) => {
            *cursor = Cursor::Done;
            None
        }
        Err(e) => {
            *cursor = Cursor::Done;
            Some(Err(e))
        }
    }
}
