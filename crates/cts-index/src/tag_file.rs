//! Tag file reader.
//!
//! Loads a ctags tag file and serves records through the [`TagIndex`]
//! cursors. The file is kept as raw bytes: ctags copies source lines into
//! patterns unchanged, so a tag file may hold any encoding. Names are
//! compared byte-wise and each record is decoded (lossily) only when a
//! cursor returns it, so a malformed line only fails the traversal that
//! touches it.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::IndexError;
use crate::flags::SearchFlags;
use crate::index::TagIndex;
use crate::record::TagRecord;

const PSEUDO_PREFIX: &[u8] = b"!_";
const SORTED_PSEUDO_TAG: &str = "!_TAG_FILE_SORTED";

/// Sort order declared by the `!_TAG_FILE_SORTED` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortState {
    /// No order (or no header); lookups scan linearly
    #[default]
    Unsorted,
    /// Sorted byte-wise
    Sorted,
    /// Sorted with ASCII case folded
    FoldSorted,
}

impl SortState {
    fn from_header(value: &str) -> Self {
        match value.trim() {
            "1" => SortState::Sorted,
            "2" => SortState::FoldSorted,
            _ => SortState::Unsorted,
        }
    }
}

/// A `!_TAG_...` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoTag {
    pub name: String,
    pub file: String,
    pub pattern: String,
}

impl PseudoTag {
    fn parse(line: &[u8]) -> Self {
        let line = String::from_utf8_lossy(line);
        let mut parts = line.splitn(3, '\t');
        Self {
            name: parts.next().unwrap_or_default().to_string(),
            file: parts.next().unwrap_or_default().to_string(),
            pattern: parts.next().unwrap_or_default().to_string(),
        }
    }
}

/// Byte range of one record line within the file contents.
#[derive(Debug, Clone, Copy)]
struct Line {
    start: usize,
    end: usize,
    number: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Search {
    /// Walk the sorted run starting at the lower bound
    Binary { fold: bool },
    /// Test every record
    Linear,
}

#[derive(Debug)]
struct Lookup {
    query: String,
    flags: SearchFlags,
    search: Search,
    pos: usize,
}

/// An opened tag file.
#[derive(Debug)]
pub struct TagFile {
    path: Option<PathBuf>,
    bytes: Vec<u8>,
    lines: Vec<Line>,
    pseudo_tags: Vec<PseudoTag>,
    sort_state: SortState,
    scan_pos: usize,
    lookup: Option<Lookup>,
}

impl TagFile {
    /// Open and load a tag file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut tags = Self::from_bytes(bytes);
        tags.path = Some(path.to_path_buf());
        info!(
            path = ?path,
            records = tags.len(),
            sort_state = ?tags.sort_state,
            "Opened tag file"
        );
        Ok(tags)
    }

    /// Build a tag index from tag file text already in memory.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_bytes(text.into().into_bytes())
    }

    /// Build a tag index from raw tag file contents.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let mut lines = Vec::new();
        let mut pseudo_tags = Vec::new();

        let mut offset = 0;
        for (i, raw) in bytes.split(|&b| b == b'\n').enumerate() {
            let start = offset;
            offset += raw.len() + 1;

            let line = raw.strip_suffix(b"\r").unwrap_or(raw);
            if line.is_empty() {
                continue;
            }
            if line.starts_with(PSEUDO_PREFIX) {
                pseudo_tags.push(PseudoTag::parse(line));
                continue;
            }
            lines.push(Line {
                start,
                end: start + line.len(),
                number: i + 1,
            });
        }

        let sort_state = pseudo_tags
            .iter()
            .find(|tag| tag.name == SORTED_PSEUDO_TAG)
            .map(|tag| SortState::from_header(&tag.file))
            .unwrap_or_default();

        debug!(records = lines.len(), ?sort_state, "Indexed tag lines");

        Self {
            path: None,
            bytes,
            lines,
            pseudo_tags,
            sort_state,
            scan_pos: 0,
            lookup: None,
        }
    }

    /// Path the file was opened from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn sort_state(&self) -> SortState {
        self.sort_state
    }

    pub fn pseudo_tags(&self) -> &[PseudoTag] {
        &self.pseudo_tags
    }

    /// Number of record lines (pseudo-tags excluded).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn search_for(&self, flags: SearchFlags) -> Search {
        match (self.sort_state, flags.is_case_insensitive()) {
            (SortState::Sorted, false) => Search::Binary { fold: false },
            (SortState::FoldSorted, _) => Search::Binary { fold: true },
            _ => Search::Linear,
        }
    }

    fn advance_lookup(&mut self) -> Result<Option<TagRecord>, IndexError> {
        let Some(lookup) = self.lookup.as_mut() else {
            return Ok(None);
        };

        while lookup.pos < self.lines.len() {
            let line = self.lines[lookup.pos];
            lookup.pos += 1;

            let name = name_of(&self.bytes, line);
            let query = lookup.query.as_bytes();
            if let Search::Binary { fold } = lookup.search {
                if !in_run(name, query, lookup.flags.is_prefix(), fold) {
                    lookup.pos = self.lines.len();
                    return Ok(None);
                }
            }

            if matches(name, query, lookup.flags) {
                return parse_line(&self.bytes, line).map(Some);
            }
        }

        Ok(None)
    }
}

impl TagIndex for TagFile {
    fn first(&mut self) -> Result<Option<TagRecord>, IndexError> {
        self.scan_pos = 0;
        self.next()
    }

    fn next(&mut self) -> Result<Option<TagRecord>, IndexError> {
        let Some(&line) = self.lines.get(self.scan_pos) else {
            return Ok(None);
        };
        self.scan_pos += 1;
        parse_line(&self.bytes, line).map(Some)
    }

    fn find(&mut self, name: &str, flags: SearchFlags) -> Result<Option<TagRecord>, IndexError> {
        let search = self.search_for(flags);
        let pos = match search {
            Search::Binary { fold } => {
                let bytes = &self.bytes;
                self.lines.partition_point(|&line| {
                    compare(name_of(bytes, line), name.as_bytes(), fold).is_lt()
                })
            }
            Search::Linear => 0,
        };

        debug!(query = name, ?flags, ?search, start = pos, "Tag lookup");

        self.lookup = Some(Lookup {
            query: name.to_string(),
            flags,
            search,
            pos,
        });
        self.advance_lookup()
    }

    fn find_next(&mut self) -> Result<Option<TagRecord>, IndexError> {
        self.advance_lookup()
    }
}

fn line_bytes(bytes: &[u8], line: Line) -> &[u8] {
    &bytes[line.start..line.end]
}

fn name_of(bytes: &[u8], line: Line) -> &[u8] {
    let line = line_bytes(bytes, line);
    match line.iter().position(|&b| b == b'\t') {
        Some(tab) => &line[..tab],
        None => line,
    }
}

fn parse_line(bytes: &[u8], line: Line) -> Result<TagRecord, IndexError> {
    TagRecord::parse(&String::from_utf8_lossy(line_bytes(bytes, line)), line.number)
}

/// Order two names the way the tag file is sorted. Folded order follows
/// `sort -f`, which maps lowercase onto uppercase.
fn compare(name: &[u8], query: &[u8], fold: bool) -> Ordering {
    if fold {
        name.iter()
            .map(u8::to_ascii_uppercase)
            .cmp(query.iter().map(u8::to_ascii_uppercase))
    } else {
        name.cmp(query)
    }
}

/// Whether `name` still belongs to the sorted run that starts at the lower
/// bound of `query`.
fn in_run(name: &[u8], query: &[u8], prefix: bool, fold: bool) -> bool {
    match (prefix, fold) {
        (false, false) => name == query,
        (false, true) => name.eq_ignore_ascii_case(query),
        (true, false) => name.starts_with(query),
        (true, true) => {
            name.len() >= query.len() && name[..query.len()].eq_ignore_ascii_case(query)
        }
    }
}

fn matches(name: &[u8], query: &[u8], flags: SearchFlags) -> bool {
    in_run(name, query, flags.is_prefix(), flags.is_case_insensitive())
}
