//! Counting changes across nested change reports.

use super::result::{Change, PropertyChanges};

/// A change report that can count what it contains.
pub trait Changed {
    /// All changes, including nested reports.
    fn total_changes(&self) -> usize;

    /// Breaking changes, including nested reports.
    fn total_breaking_changes(&self) -> usize;
}

impl Changed for PropertyChanges {
    fn total_changes(&self) -> usize {
        self.changes.len()
    }

    fn total_breaking_changes(&self) -> usize {
        count_breaking_changes(&self.changes)
    }
}

impl<C: Changed> Changed for Option<C> {
    fn total_changes(&self) -> usize {
        self.as_ref().map_or(0, Changed::total_changes)
    }

    fn total_breaking_changes(&self) -> usize {
        self.as_ref().map_or(0, Changed::total_breaking_changes)
    }
}

impl<K, C: Changed> Changed for indexmap::IndexMap<K, C> {
    fn total_changes(&self) -> usize {
        self.values().map(Changed::total_changes).sum()
    }

    fn total_breaking_changes(&self) -> usize {
        self.values().map(Changed::total_breaking_changes).sum()
    }
}

/// Number of breaking changes in `changes`.
#[must_use]
pub fn count_breaking_changes(changes: &[Change]) -> usize {
    changes.iter().filter(|c| c.breaking).count()
}
