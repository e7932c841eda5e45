/// Project resolver
///
/// Reads the source a query needs through the probe and hands the parsed
/// JSON to the matching pure function. Nothing is cached between queries.

use crate::config::ResolverConfig;
use crate::core::entry::{EntrySet, ProjectEntry};
use crate::core::probe::FileProbe;
use crate::core::project_manager::{parse_projects, search_projects};
use crate::core::recent::{parse_storage, recent_projects};
use crate::error::Result;

/// Literal query that lists recent folders
pub const RECENT_TRIGGER: &str = "r";

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Match Project Manager entries against the text
    Search(String),
    /// List recently opened folders; no text filter
    Recent,
}

impl Query {
    /// Classify raw launcher input
    ///
    /// `"r"` lists recent folders, anything longer than one character is a
    /// search, and everything else (including empty input) is no query.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == RECENT_TRIGGER {
            return Some(Query::Recent);
        }

        if raw.chars().count() > 1 {
            Some(Query::Search(raw.to_string()))
        } else {
            None
        }
    }
}

/// Resolves queries against the configured sources
pub struct ProjectResolver<P: FileProbe> {
    config: ResolverConfig,
    probe: P,
}

impl<P: FileProbe> ProjectResolver<P> {
    pub fn new(config: ResolverConfig, probe: P) -> Self {
        Self { config, probe }
    }

    /// Resolve a query into sorted entries
    ///
    /// # Returns
    /// * `Ok(Vec<ProjectEntry>)` - Entries sorted by tier, recency, then name
    /// * `Err(LauncherError)` - If a source file exists but cannot be read or parsed
    pub fn resolve(&self, query: &Query) -> Result<Vec<ProjectEntry>> {
        let set = match query {
            Query::Search(text) => self.search(text)?,
            Query::Recent => self.recent()?,
        };

        tracing::info!("{:?} resolved to {} project(s)", query, set.len());

        Ok(set.into_sorted())
    }

    fn search(&self, text: &str) -> Result<EntrySet> {
        let path = &self.config.project_manager_path;
        if !self.probe.exists(path) {
            tracing::debug!("No Project Manager config at {}", path.display());
            return Ok(EntrySet::new());
        }

        let bytes = self.probe.read(path)?;
        let records = parse_projects(path, &bytes)?;

        Ok(search_projects(&records, text, &self.config.tiers, &self.probe))
    }

    fn recent(&self) -> Result<EntrySet> {
        if !self.config.include_recent {
            return Ok(EntrySet::new());
        }

        let Some(path) = self
            .config
            .storage_paths
            .iter()
            .find(|p| self.probe.exists(p))
        else {
            tracing::debug!("No VS Code storage file found");
            return Ok(EntrySet::new());
        };

        tracing::debug!("Reading recent folders from {}", path.display());
        let bytes = self.probe.read(path)?;
        let storage = parse_storage(path, &bytes)?;

        Ok(recent_projects(&storage, &self.config.tiers, &self.probe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::probe::{DiskProbe, MemoryProbe};
    use crate::error::LauncherError;
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PM: &str = "/home/u/pm.json";
    const STORAGE_A: &str = "/home/u/a/storage.json";
    const STORAGE_B: &str = "/home/u/b/storage.json";

    fn config() -> ResolverConfig {
        ResolverConfig {
            project_manager_path: PathBuf::from(PM),
            storage_paths: vec![PathBuf::from(STORAGE_A), PathBuf::from(STORAGE_B)],
            include_recent: true,
            tiers: Default::default(),
        }
    }

    fn storage(paths: &[&str]) -> String {
        let items: Vec<_> = paths
            .iter()
            .map(|p| json!({"id": "openRecentFolder", "enabled": true, "label": p, "uri": {"path": p}}))
            .collect();
        json!({"lastKnownMenubarData": {"menus": {"File": {"items": [
            {"id": "submenuitem.1", "submenu": {"items": items}}
        ]}}}})
        .to_string()
    }

    fn projects() -> String {
        json!([
            {"name": "Foo", "rootPath": "/tmp/foo", "enabled": true, "tags": ["bar"]},
            {"name": "Bar tools", "rootPath": "/src/tools", "enabled": true}
        ])
        .to_string()
    }

    #[test]
    fn test_query_parse() {
        assert_eq!(Query::parse("r"), Some(Query::Recent));
        assert_eq!(Query::parse("x"), None);
        assert_eq!(Query::parse(""), None);
        assert_eq!(Query::parse("é"), None);
        assert_eq!(Query::parse("rr"), Some(Query::Search("rr".to_string())));
        assert_eq!(Query::parse("foo"), Some(Query::Search("foo".to_string())));
    }

    #[test]
    fn test_search_orders_by_tier() {
        let probe = MemoryProbe::new()
            .with_file(PM, projects())
            .with_dir("/tmp/foo")
            .with_dir("/src/tools");
        let resolver = ProjectResolver::new(config(), probe);

        let found = resolver.resolve(&Query::Search("bar".to_string())).unwrap();
        let names: Vec<_> = found.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bar tools", "Foo"]);
        assert_eq!(found[0].primary_order, 0);
        assert_eq!(found[1].primary_order, 100);
    }

    #[test]
    fn test_search_ignores_recent_history() {
        let probe = MemoryProbe::new()
            .with_file(STORAGE_A, storage(&["/src/foo-recent"]))
            .with_dir("/src/foo-recent");
        let resolver = ProjectResolver::new(config(), probe);

        assert!(resolver.resolve(&Query::Search("foo".to_string())).unwrap().is_empty());
    }

    #[test]
    fn test_recent_first_storage_wins() {
        let probe = MemoryProbe::new()
            .with_file(PM, projects())
            .with_file(STORAGE_A, storage(&["/src/one", "/src/two", "/src/three"]))
            .with_file(STORAGE_B, storage(&["/src/four"]))
            .with_dir("/src/one")
            .with_dir("/src/two")
            .with_dir("/src/three")
            .with_dir("/src/four");
        let resolver = ProjectResolver::new(config(), probe);

        let found = resolver.resolve(&Query::Recent).unwrap();
        let paths: Vec<_> = found.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/src/one", "/src/two", "/src/three"]);
        assert!(found.iter().all(|e| e.primary_order == 200));
    }

    #[test]
    fn test_recent_falls_back_to_second_storage() {
        let probe = MemoryProbe::new()
            .with_file(STORAGE_B, storage(&["/src/four"]))
            .with_dir("/src/four");
        let resolver = ProjectResolver::new(config(), probe);

        let found = resolver.resolve(&Query::Recent).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "four");
    }

    #[test]
    fn test_recent_disabled_reads_nothing() {
        // Malformed on purpose: it must not even be read
        let probe = MemoryProbe::new().with_file(STORAGE_A, "{");
        let mut config = config();
        config.include_recent = false;
        let resolver = ProjectResolver::new(config, probe);

        assert!(resolver.resolve(&Query::Recent).unwrap().is_empty());
    }

    #[test]
    fn test_missing_sources_are_empty() {
        let resolver = ProjectResolver::new(config(), MemoryProbe::new());

        assert!(resolver.resolve(&Query::Search("foo".to_string())).unwrap().is_empty());
        assert!(resolver.resolve(&Query::Recent).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_source_fails_query() {
        let probe = MemoryProbe::new().with_file(PM, "[{\"name\": ");
        let resolver = ProjectResolver::new(config(), probe);

        let err = resolver.resolve(&Query::Search("foo".to_string())).unwrap_err();
        assert!(matches!(err, LauncherError::MalformedSource { .. }));
    }

    #[test]
    fn test_on_disk() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("foo");
        fs::create_dir(&project).unwrap();

        let pm = temp.path().join("projects.json");
        let project_path = project.to_str().unwrap();
        fs::write(
            &pm,
            json!([
                {"name": "Foo", "rootPath": project_path, "enabled": true, "tags": ["bar"]},
                {"name": "Foo gone", "rootPath": temp.path().join("gone").to_str().unwrap(), "enabled": true}
            ])
            .to_string(),
        )
        .unwrap();

        let config = ResolverConfig {
            project_manager_path: pm,
            storage_paths: vec![temp.path().join("storage.json")],
            include_recent: true,
            tiers: Default::default(),
        };
        let resolver = ProjectResolver::new(config, DiskProbe);

        let found = resolver.resolve(&Query::Search("foo".to_string())).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, project_path);
        assert!(resolver.resolve(&Query::Recent).unwrap().is_empty());
    }
}
