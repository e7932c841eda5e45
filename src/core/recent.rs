/// Recent-folder source
///
/// VS Code mirrors its menu bar into `storage.json`. The "Open Recent"
/// submenu holds one `openRecentFolder` item per recently opened folder,
/// most recent first. Menu ids above that level change between releases,
/// so every submenu of the File menu is scanned.

use crate::config::SortTiers;
use crate::core::entry::{EntrySet, ProjectEntry};
use crate::core::normalize::{last_segment, normalize};
use crate::core::probe::FileProbe;
use crate::error::{LauncherError, Result};
use serde_json::Value;
use std::path::Path;

/// Submenu item id of a recently opened folder
pub const RECENT_FOLDER_ID: &str = "openRecentFolder";

const FILE_MENU_ITEMS: &str = "/lastKnownMenubarData/menus/File/items";

/// A folder listed in the recent menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentFolder {
    pub path: String,
}

/// Parse a storage file. Only syntax is checked here; a missing menu is
/// simply an empty history.
pub fn parse_storage(path: &Path, bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|source| LauncherError::MalformedSource {
        path: path.to_path_buf(),
        source,
    })
}

/// Recent folders in file order
pub fn recent_folders(storage: &Value) -> Vec<RecentFolder> {
    let Some(items) = storage.pointer(FILE_MENU_ITEMS).and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| item.get("id").is_some())
        .filter_map(|item| item.pointer("/submenu/items").and_then(Value::as_array))
        .flatten()
        .filter_map(recent_folder)
        .collect()
}

fn recent_folder(item: &Value) -> Option<RecentFolder> {
    if item.get("id").and_then(Value::as_str) != Some(RECENT_FOLDER_ID) {
        return None;
    }
    if item.get("enabled") != Some(&Value::Bool(true)) {
        return None;
    }

    // label is required but not used
    item.get("label")?;
    let path = item.pointer("/uri/path")?.as_str()?;

    Some(RecentFolder {
        path: path.to_string(),
    })
}

/// Recent mode: every existing recent folder, in file order
///
/// Secondary order starts one above the recent tier and counts up per
/// surviving folder, so the stored recency survives sorting.
pub fn recent_projects(storage: &Value, tiers: &SortTiers, probe: &dyn FileProbe) -> EntrySet {
    let mut set = EntrySet::new();
    let mut secondary = tiers.recent + 1;

    for folder in recent_folders(storage) {
        if !probe.exists(Path::new(&folder.path)) {
            tracing::debug!("Skipping recent folder {}: path does not exist", folder.path);
            continue;
        }

        let name = normalize(last_segment(&folder.path));
        set.insert(ProjectEntry::new(name, folder.path, tiers.recent, secondary));
        secondary += 1;
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::probe::MemoryProbe;
    use serde_json::json;

    fn folder(path: &str) -> Value {
        json!({
            "id": RECENT_FOLDER_ID,
            "enabled": true,
            "label": format!("~{}", path),
            "uri": {"$mid": 1, "path": path, "scheme": "file"}
        })
    }

    fn storage(submenu: Vec<Value>) -> Value {
        json!({
            "lastKnownMenubarData": {
                "menus": {
                    "File": {
                        "items": [
                            {"id": "workbench.action.files.newUntitledFile", "label": "&&New File"},
                            {"id": "submenuitem.35", "label": "Open &&Recent", "submenu": {"items": submenu}}
                        ]
                    }
                }
            }
        })
    }

    fn probe() -> MemoryProbe {
        MemoryProbe::new()
            .with_dir("/src/zeta")
            .with_dir("/src/Álpha")
            .with_dir("/src/mid")
    }

    #[test]
    fn test_three_folders_keep_file_order() {
        let storage = storage(vec![folder("/src/zeta"), folder("/src/Álpha"), folder("/src/mid")]);

        let found = recent_projects(&storage, &SortTiers::default(), &probe()).into_sorted();
        let names: Vec<_> = found.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert!(found.iter().all(|e| e.primary_order == 200));

        let secondary: Vec<_> = found.iter().map(|e| e.secondary_order).collect();
        assert_eq!(secondary, vec![201, 202, 203]);
    }

    #[test]
    fn test_missing_folder_does_not_consume_order() {
        let storage = storage(vec![folder("/src/zeta"), folder("/gone"), folder("/src/mid")]);

        let found = recent_projects(&storage, &SortTiers::default(), &probe()).into_sorted();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].path, "/src/mid");
        assert_eq!(found[1].secondary_order, 202);
    }

    #[test]
    fn test_other_items_ignored() {
        let mut disabled = folder("/src/mid");
        disabled["enabled"] = json!(false);
        let mut no_label = folder("/src/zeta");
        no_label.as_object_mut().unwrap().remove("label");
        let file = json!({
            "id": "openRecentFile",
            "enabled": true,
            "label": "notes.md",
            "uri": {"path": "/src/mid"}
        });

        let storage = storage(vec![disabled, no_label, file, folder("/src/Álpha")]);
        let folders = recent_folders(&storage);
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].path, "/src/Álpha");
    }

    #[test]
    fn test_submenu_without_parent_id_ignored() {
        let storage = json!({
            "lastKnownMenubarData": {"menus": {"File": {"items": [
                {"label": "Open Recent", "submenu": {"items": [folder("/src/mid")]}}
            ]}}}
        });
        assert!(recent_folders(&storage).is_empty());
    }

    #[test]
    fn test_missing_menu_is_empty() {
        assert!(recent_folders(&json!({})).is_empty());
        assert!(recent_folders(&json!([1, 2, 3])).is_empty());
        assert!(recent_folders(&json!({"lastKnownMenubarData": {"menus": {}}})).is_empty());
    }

    #[test]
    fn test_parse_storage_rejects_bad_json() {
        let err = parse_storage(Path::new("/cfg/storage.json"), b"{\"a\":").unwrap_err();
        assert!(matches!(err, LauncherError::MalformedSource { .. }));
    }
}
