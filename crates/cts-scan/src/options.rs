//! Per-strategy scanner options.
//!
//! Options deserialize with `deny_unknown_fields`, so a misspelled option in
//! a config source is an error instead of being ignored.

use serde::Deserialize;

/// Options for [`PartialScanner`](crate::PartialScanner).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialOptions {
    /// Lowercase both the query and each name before the containment test
    pub insensitive: bool,
}

/// Options for [`IndexedScanner`](crate::IndexedScanner).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexedOptions {
    /// Match names that start with the query instead of equal names
    pub prefix: bool,
    /// Ignore case in the index comparison
    pub insensitive: bool,
}

/// Strategy-independent options for [`build_scanner`](crate::build_scanner).
///
/// `prefix` only affects the indexed strategy; `insensitive` affects the
/// partial and indexed strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanOptions {
    pub prefix: bool,
    pub insensitive: bool,
}

impl From<ScanOptions> for PartialOptions {
    fn from(options: ScanOptions) -> Self {
        Self {
            insensitive: options.insensitive,
        }
    }
}

impl From<ScanOptions> for IndexedOptions {
    fn from(options: ScanOptions) -> Self {
        Self {
            prefix: options.prefix,
            insensitive: options.insensitive,
        }
    }
}
