/// Project Manager source
///
/// Parses the Project Manager extension's `projects.json` and matches its
/// records against a search query.

use crate::config::SortTiers;
use crate::core::entry::{EntrySet, ProjectEntry};
use crate::core::normalize::{last_segment, normalize};
use crate::core::probe::FileProbe;
use crate::error::{LauncherError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// One record of `projects.json`. Every field is optional on disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub root_path: Option<String>,
    pub name: Option<String>,
    pub enabled: Option<Value>,
    /// Anything but a list of strings counts as no tags
    pub tags: Option<Value>,
}

impl ProjectRecord {
    /// Only a literal `true` counts
    pub fn is_enabled(&self) -> bool {
        matches!(self.enabled, Some(Value::Bool(true)))
    }

    fn tag_strs(&self) -> impl Iterator<Item = &str> {
        self.tags
            .as_ref()
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }
}

/// Why a record matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Name,
    Path,
    Tag,
}

impl MatchKind {
    pub fn tier(self, tiers: &SortTiers) -> u32 {
        match self {
            MatchKind::Name => tiers.name,
            MatchKind::Path => tiers.path,
            MatchKind::Tag => tiers.tag,
        }
    }
}

/// Parse `projects.json`
///
/// # Returns
/// * `Ok(Vec<ProjectRecord>)` - Records whose fields have the right types
/// * `Err(LauncherError)` - If the file is not JSON or not a list
pub fn parse_projects(path: &Path, bytes: &[u8]) -> Result<Vec<ProjectRecord>> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| {
        LauncherError::MalformedSource {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let Value::Array(items) = value else {
        return Err(LauncherError::UnexpectedShape {
            path: path.to_path_buf(),
            expected: "a list of projects",
        });
    };

    let records = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value::<ProjectRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("Skipping project record {}: {}", i, e);
                None
            }
        })
        .collect();

    Ok(records)
}

/// Match a record against an already-normalized query. First hit wins.
pub fn match_record(record: &ProjectRecord, name: &str, root_path: &str, query: &str) -> Option<MatchKind> {
    if normalize(name).contains(query) {
        return Some(MatchKind::Name);
    }

    if normalize(last_segment(root_path)).contains(query) {
        return Some(MatchKind::Path);
    }

    record
        .tag_strs()
        .any(|tag| normalize(tag).contains(query))
        .then_some(MatchKind::Tag)
}

/// Search mode: filter enabled, existing projects by name, directory or tag
pub fn search_projects(
    records: &[ProjectRecord],
    query: &str,
    tiers: &SortTiers,
    probe: &dyn FileProbe,
) -> EntrySet {
    let query = normalize(query);
    let mut set = EntrySet::new();

    for record in records {
        let (Some(root_path), Some(name)) = (&record.root_path, &record.name) else {
            continue;
        };
        if !record.is_enabled() {
            continue;
        }
        if !probe.exists(Path::new(root_path)) {
            tracing::debug!("Skipping {}: path does not exist", root_path);
            continue;
        }

        if let Some(kind) = match_record(record, name, root_path, &query) {
            set.insert(ProjectEntry::new(
                name.clone(),
                root_path.clone(),
                kind.tier(tiers),
                0,
            ));
        }
    }

    set
}
