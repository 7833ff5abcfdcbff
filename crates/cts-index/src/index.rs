//! The tag index contract.
//!
//! A tag index keeps two cursors: a sequential one driven by `first`/`next`
//! and a lookup one driven by `find`/`find_next`. Both are part of the
//! handle's state, so only one traversal per cursor can be active at a time.

use crate::error::IndexError;
use crate::flags::SearchFlags;
use crate::record::TagRecord;

/// Read access to a tag index.
///
/// Each method returns `Ok(None)` when there is no (further) record, and an
/// error when the underlying index cannot be read.
pub trait TagIndex {
    /// Rewind the sequential cursor and return the first record.
    fn first(&mut self) -> Result<Option<TagRecord>, IndexError>;

    /// Advance the sequential cursor.
    fn next(&mut self) -> Result<Option<TagRecord>, IndexError>;

    /// Position the lookup cursor on the first record matching `name`.
    fn find(&mut self, name: &str, flags: SearchFlags) -> Result<Option<TagRecord>, IndexError>;

    /// Advance the lookup cursor under the flags of the last `find`.
    fn find_next(&mut self) -> Result<Option<TagRecord>, IndexError>;
}

impl<T: TagIndex + ?Sized> TagIndex for &mut T {
    fn first(&mut self) -> Result<Option<TagRecord>, IndexError> {
        (**self).first()
    }

    fn next(&mut self) -> Result<Option<TagRecord>, IndexError> {
        (**self).next()
    }

    fn find(&mut self, name: &str, flags: SearchFlags) -> Result<Option<TagRecord>, IndexError> {
        (**self).find(name, flags)
    }

    fn find_next(&mut self) -> Result<Option<TagRecord>, IndexError> {
        (**self).find_next()
    }
}

impl<T: TagIndex + ?Sized> TagIndex for Box<T> {
    fn first(&mut self) -> Result<Option<TagRecord>, IndexError> {
        (**self).first()
    }

    fn next(&mut self) -> Result<Option<TagRecord>, IndexError> {
        (**self).next()
    }

    fn find(&mut self, name: &str, flags: SearchFlags) -> Result<Option<TagRecord>, IndexError> {
        (**self).find(name, flags)
    }

    fn find_next(&mut self) -> Result<Option<TagRecord>, IndexError> {
        (**self).find_next()
    }
}
