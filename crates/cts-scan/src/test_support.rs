//! In-memory tag index for scanner tests.

use cts_index::{IndexError, SearchFlags, TagIndex, TagRecord};

use crate::scanner::EntryIter;

pub(crate) fn record(name: &str, file: &str, line: u64) -> TagRecord {
    TagRecord {
        name: name.to_string(),
        file: file.to_string(),
        pattern: Some(format!("/^{name}$/")),
        line_number: line,
        kind: Some("f".to_string()),
        file_scope: false,
        fields: Vec::new(),
    }
}

/// `foo` in a.c, `foobar` in b.c, `bar` in c.c, in that order.
pub(crate) fn sample_index() -> MemoryIndex {
    MemoryIndex::new(vec![
        record("foo", "a.c", 10),
        record("foobar", "b.c", 20),
        record("bar", "c.c", 30),
    ])
}

pub(crate) fn names(iter: EntryIter<'_>) -> Vec<String> {
    iter.map(|entry| entry.unwrap().name().to_string())
        .collect()
}

/// Records held in a vector; lookups scan linearly in stored order.
#[derive(Debug, Default)]
pub(crate) struct MemoryIndex {
    records: Vec<TagRecord>,
    scan_pos: usize,
    lookup: Option<(String, SearchFlags, usize)>,
    fail_at: Option<usize>,
    /// Number of primitive calls made so far
    pub(crate) calls: usize,
}

impl MemoryIndex {
    pub(crate) fn new(records: Vec<TagRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Fail when either cursor reaches `pos`.
    pub(crate) fn failing_at(mut self, pos: usize) -> Self {
        self.fail_at = Some(pos);
        self
    }

    fn take(&self, pos: usize) -> Result<Option<TagRecord>, IndexError> {
        if self.fail_at == Some(pos) {
            return Err(IndexError::Malformed {
                line: pos + 1,
                reason: "injected failure".to_string(),
            });
        }
        Ok(self.records.get(pos).cloned())
    }

    fn advance_lookup(&mut self) -> Result<Option<TagRecord>, IndexError> {
        let Some((query, flags, pos)) = self.lookup.as_mut() else {
            return Ok(None);
        };

        while *pos < self.records.len() {
            let current = *pos;
            *pos += 1;
            if self.fail_at == Some(current) {
                return Err(IndexError::Malformed {
                    line: current + 1,
                    reason: "injected failure".to_string(),
                });
            }

            let name = &self.records[current].name;
            let (name, query) = if flags.is_case_insensitive() {
                (name.to_ascii_lowercase(), query.to_ascii_lowercase())
            } else {
                (name.clone(), query.clone())
            };
            let hit = if flags.is_prefix() {
                name.starts_with(&query)
            } else {
                name == query
            };
            if hit {
                return Ok(Some(self.records[current].clone()));
            }
        }
        Ok(None)
    }
}

impl TagIndex for MemoryIndex {
    fn first(&mut self) -> Result<Option<TagRecord>, IndexError> {
        self.calls += 1;
        self.scan_pos = 0;
        let record = self.take(0);
        self.scan_pos = 1;
        record
    }

    fn next(&mut self) -> Result<Option<TagRecord>, IndexError> {
        self.calls += 1;
        let record = self.take(self.scan_pos);
        self.scan_pos += 1;
        record
    }

    fn find(&mut self, name: &str, flags: SearchFlags) -> Result<Option<TagRecord>, IndexError> {
        self.calls += 1;
        self.lookup = Some((name.to_string(), flags, 0));
        self.advance_lookup()
    }

    fn find_next(&mut self) -> Result<Option<TagRecord>, IndexError> {
        self.calls += 1;
        self.advance_lookup()
    }
}
