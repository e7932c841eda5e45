/// Project entries and the path-keyed working set
///
/// Entries only live for one query. The set keeps insertion order and lets a
/// later entry with the same path replace an earlier one in place.

use serde::Serialize;
use std::collections::HashMap;

/// One resolved project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub path: String,
    /// Tier; lower sorts first
    pub primary_order: u32,
    /// Recency position inside the recent tier, 0 elsewhere
    pub secondary_order: u32,
}

impl ProjectEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>, primary: u32, secondary: u32) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            primary_order: primary,
            secondary_order: secondary,
        }
    }

    /// Zero-padded orders followed by the name, compared as plain text
    pub fn sort_key(&self) -> String {
        format!(
            "{:04}_{:04}_{}",
            self.primary_order, self.secondary_order, self.name
        )
    }
}

/// Entries keyed by path, last write wins
#[derive(Debug, Default)]
pub struct EntrySet {
    entries: Vec<ProjectEntry>,
    by_path: HashMap<String, usize>,
}

impl EntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: ProjectEntry) {
        match self.by_path.get(&entry.path) {
            Some(&idx) => self.entries[idx] = entry,
            None => {
                self.by_path.insert(entry.path.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the set, sorted ascending by `sort_key`
    pub fn into_sorted(self) -> Vec<ProjectEntry> {
        let mut entries = self.entries;
        entries.sort_by_cached_key(ProjectEntry::sort_key);
        entries
    }
}
