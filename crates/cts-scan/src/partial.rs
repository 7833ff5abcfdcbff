//! Substring filtering over a full scan.

use std::path::Path;

use cts_index::TagIndex;
use tracing::debug;

use crate::full::FullScanner;
use crate::options::PartialOptions;
use crate::scanner::{EntryIter, TagScanner};

/// Yields records whose name contains the query text.
///
/// Walks the whole index through an inner [`FullScanner`] and keeps the
/// stored order. An empty query matches every record. With
/// `insensitive`, the query and each name are lowercased before the test;
/// yielded entries keep their original case.
#[derive(Debug)]
pub struct PartialScanner<I> {
    full: FullScanner<I>,
    options: PartialOptions,
}

impl<I: TagIndex> PartialScanner<I> {
    pub fn new(index: I, base_dir: impl AsRef<Path>, options: PartialOptions) -> Self {
        Self {
            full: FullScanner::new(index, base_dir),
            options,
        }
    }

    pub fn options(&self) -> PartialOptions {
        self.options
    }

    pub fn base_dir(&self) -> &Path {
        self.full.base_dir()
    }

    pub fn into_inner(self) -> I {
        self.full.into_inner()
    }
}

impl<I: TagIndex> TagScanner for PartialScanner<I> {
    fn query<'s>(&'s mut self, text: &str) -> EntryIter<'s> {
        let insensitive = self.options.insensitive;
        let needle = if insensitive {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        debug!(query = text, insensitive, "Partial scan");

        Box::new(self.full.scan().filter(move |item| match item {
            Ok(entry) if insensitive => entry.name().to_lowercase().contains(&needle),
            Ok(entry) => entry.name().contains(&needle),
            Err(_) => true,
        }))
    }
}
