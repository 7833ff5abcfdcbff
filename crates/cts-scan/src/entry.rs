//! Normalized query results.

use std::path::{Component, Path, PathBuf};

use cts_index::TagRecord;
use serde::Serialize;
use tracing::warn;

/// One tag hit, with its file resolved against the scanner's base directory.
///
/// Entries are plain values: fields are read through accessors and never
/// change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    name: String,
    file: PathBuf,
    pattern: Option<String>,
    line_number: u64,
    kind: Option<String>,
    file_scope: bool,
}

impl Entry {
    /// Project a raw record onto an entry, resolving its file against
    /// `base_dir`. Extension fields other than kind, line and file scope
    /// are dropped.
    pub fn from_record(record: TagRecord, base_dir: &Path) -> Self {
        Self {
            file: resolve_path(base_dir, Path::new(&record.file)),
            name: record.name,
            pattern: record.pattern,
            line_number: record.line_number,
            kind: record.kind,
            file_scope: record.file_scope,
        }
    }

    /// Symbol name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the defining file
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Search pattern that relocates the definition
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Line number recorded when the index was built (0 when unknown)
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Kind code
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Symbol is only visible inside its file
    pub fn file_scope(&self) -> bool {
        self.file_scope
    }
}

/// Join `file` onto `base_dir` and normalize the result.
///
/// An absolute `file` replaces the base. `.` components are dropped and
/// `..` removes the previous component, without touching the filesystem.
pub fn resolve_path(base_dir: &Path, file: &Path) -> PathBuf {
    normalize_path(&base_dir.join(file))
}

/// Make a base directory absolute against the current working directory.
pub(crate) fn absolute_base(base_dir: &Path) -> PathBuf {
    if base_dir.is_absolute() {
        return normalize_path(base_dir);
    }

    match std::env::current_dir() {
        Ok(cwd) => normalize_path(&cwd.join(base_dir)),
        Err(e) => {
            warn!(base_dir = ?base_dir, error = %e, "Cannot resolve working directory, keeping relative base");
            normalize_path(base_dir)
        }
    }
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                cleaned.push(component.as_os_str());
            }
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, file: &str) -> TagRecord {
        TagRecord {
            name: name.to_string(),
            file: file.to_string(),
            pattern: Some(format!("/^{name}$/")),
            line_number: 10,
            kind: Some("f".to_string()),
            file_scope: true,
            fields: vec![("signature".to_string(), "()".to_string())],
        }
    }

    #[test]
    fn test_from_record_projects_fields() {
        let entry = Entry::from_record(record("foo", "a.c"), Path::new("/src"));
        assert_eq!(entry.name(), "foo");
        assert_eq!(entry.file(), Path::new("/src/a.c"));
        assert_eq!(entry.pattern(), Some("/^foo$/"));
        assert_eq!(entry.line_number(), 10);
        assert_eq!(entry.kind(), Some("f"));
        assert!(entry.file_scope());
    }

    #[test]
    fn test_absolute_record_file_is_kept() {
        let entry = Entry::from_record(record("foo", "/usr/include/stdio.h"), Path::new("/src"));
        assert_eq!(entry.file(), Path::new("/usr/include/stdio.h"));
    }

    #[test]
    fn test_resolve_path_normalizes_dots() {
        assert_eq!(
            resolve_path(Path::new("/src/proj"), Path::new("./lib/../main.c")),
            PathBuf::from("/src/proj/main.c")
        );
        assert_eq!(
            resolve_path(Path::new("/src/proj"), Path::new("../other/x.c")),
            PathBuf::from("/src/other/x.c")
        );
    }

    #[test]
    fn test_resolve_path_does_not_climb_above_root() {
        assert_eq!(
            resolve_path(Path::new("/"), Path::new("../../a.c")),
            PathBuf::from("/a.c")
        );
    }

    #[test]
    fn test_absolute_base_from_relative() {
        let base = absolute_base(Path::new("some/dir"));
        assert!(base.is_absolute());
        assert!(base.ends_with("some/dir"));
    }

    #[test]
    fn test_absolute_base_from_empty() {
        let base = absolute_base(Path::new(""));
        assert_eq!(base, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_entry_serializes_all_fields() {
        let entry = Entry::from_record(record("foo", "a.c"), Path::new("/src"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "foo");
        assert_eq!(json["file"], "/src/a.c");
        assert_eq!(json["line_number"], 10);
        assert_eq!(json["kind"], "f");
        assert_eq!(json["file_scope"], true);
        assert!(json.get("fields").is_none());
    }
}
