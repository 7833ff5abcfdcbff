//! Lookup mode flags for indexed searches.

use bitflags::bitflags;

bitflags! {
    /// Match mode passed to [`TagIndex::find`](crate::TagIndex::find).
    ///
    /// Combines a match type (full or prefix) with a case mode (observe or
    /// ignore). The zero value is a full, case-sensitive match.
    ///
    /// ```rust
    /// use cts_index::SearchFlags;
    ///
    /// let flags = SearchFlags::PARTIAL_MATCH | SearchFlags::IGNORE_CASE;
    /// assert!(flags.is_prefix());
    /// assert!(flags.is_case_insensitive());
    /// ```
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SearchFlags: u8 {
        /// Name must start with the query text.
        const PARTIAL_MATCH = 0b0000_0001;
        /// Compare names without regard to ASCII case.
        const IGNORE_CASE   = 0b0000_0010;
    }
}

impl SearchFlags {
    /// Name must equal the query text.
    pub const FULL_MATCH: Self = Self::empty();
    /// Compare names byte for byte.
    pub const OBSERVE_CASE: Self = Self::empty();

    /// Build flags from the two scanner switches.
    pub fn new(prefix: bool, insensitive: bool) -> Self {
        let search_type = if prefix {
            Self::PARTIAL_MATCH
        } else {
            Self::FULL_MATCH
        };
        let case = if insensitive {
            Self::IGNORE_CASE
        } else {
            Self::OBSERVE_CASE
        };
        search_type | case
    }

    pub fn is_prefix(self) -> bool {
        self.contains(Self::PARTIAL_MATCH)
    }

    pub fn is_case_insensitive(self) -> bool {
        self.contains(Self::IGNORE_CASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_combinations_are_distinct() {
        let all = [
            SearchFlags::new(false, false),
            SearchFlags::new(false, true),
            SearchFlags::new(true, false),
            SearchFlags::new(true, true),
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_default_is_full_observe_case() {
        let flags = SearchFlags::default();
        assert_eq!(flags, SearchFlags::FULL_MATCH | SearchFlags::OBSERVE_CASE);
        assert!(!flags.is_prefix());
        assert!(!flags.is_case_insensitive());
    }

    #[test]
    fn test_new_sets_expected_bits() {
        let flags = SearchFlags::new(true, false);
        assert!(flags.is_prefix());
        assert!(!flags.is_case_insensitive());

        let flags = SearchFlags::new(false, true);
        assert!(!flags.is_prefix());
        assert!(flags.is_case_insensitive());
    }
}
