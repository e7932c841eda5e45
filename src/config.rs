/// Resolver and plugin configuration
///
/// Every path, flag and sort tier the resolver uses lives here so tests
/// can point it at fixture files instead of the real home directory.

use crate::error::{LauncherError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Project Manager extension config, relative to the home directory
const PROJECT_MANAGER_FILE: &str =
    ".config/Code/User/globalStorage/alefragnani.project-manager/projects.json";

/// VS Code storage files holding the recent-folder menu, in lookup order
const STORAGE_FILES: &[&str] = &[
    ".config/Code/storage.json",
    ".config/Code/User/globalStorage/storage.json",
];

const DEFAULT_EDITOR: &str = "code";
const DEFAULT_ICON: &str = "xdg:com.visualstudio.code";

const ENV_INCLUDE_RECENT: &str = "VSCODE_PROJECTS_INCLUDE_RECENT";
const ENV_EDITOR: &str = "VSCODE_PROJECTS_EDITOR";
const ENV_OPEN_WITH_EDITOR: &str = "VSCODE_PROJECTS_OPEN_WITH_EDITOR";

/// Primary sort tiers. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortTiers {
    /// Project Manager entry matched by name
    pub name: u32,
    /// Project Manager entry matched by its directory name
    pub path: u32,
    /// Project Manager entry matched by one of its tags
    pub tag: u32,
    /// Recently opened folder
    pub recent: u32,
}

impl Default for SortTiers {
    fn default() -> Self {
        Self {
            name: 0,
            path: 0,
            tag: 100,
            recent: 200,
        }
    }
}

/// Everything the resolver needs to find and rank projects
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub project_manager_path: PathBuf,
    /// Tried in order; the first one that exists wins
    pub storage_paths: Vec<PathBuf>,
    pub include_recent: bool,
    pub tiers: SortTiers,
}

impl ResolverConfig {
    /// Standard VS Code locations under the given home directory
    pub fn for_home<P: AsRef<Path>>(home: P) -> Self {
        let home = home.as_ref();

        Self {
            project_manager_path: home.join(PROJECT_MANAGER_FILE),
            storage_paths: STORAGE_FILES.iter().map(|f| home.join(f)).collect(),
            include_recent: true,
            tiers: SortTiers::default(),
        }
    }

    /// Standard locations for the current user, with environment overrides
    ///
    /// # Returns
    /// * `Ok(ResolverConfig)` - Config rooted at the user's home directory
    /// * `Err(LauncherError)` - If the home directory cannot be determined
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            LauncherError::Config("Could not determine home directory".to_string())
        })?;

        let mut config = Self::for_home(home);
        if let Ok(value) = env::var(ENV_INCLUDE_RECENT) {
            config.include_recent = parse_flag(&value).unwrap_or(true);
        }

        Ok(config)
    }
}

/// Host-facing settings layered on top of the resolver config
#[derive(Debug, Clone)]
pub struct PluginConfig {
    pub resolver: ResolverConfig,
    /// Executable looked up on PATH; its absence disables the plugin
    pub editor_executable: String,
    pub icon: String,
    /// Open entries by spawning the editor instead of the desktop opener
    pub open_with_editor: bool,
}

impl PluginConfig {
    pub fn new(resolver: ResolverConfig) -> Self {
        Self {
            resolver,
            editor_executable: DEFAULT_EDITOR.to_string(),
            icon: DEFAULT_ICON.to_string(),
            open_with_editor: false,
        }
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(ResolverConfig::from_env()?);
        if let Ok(editor) = env::var(ENV_EDITOR) {
            let editor = editor.trim();
            if !editor.is_empty() {
                config.editor_executable = editor.to_string();
            }
        }
        if let Ok(value) = env::var(ENV_OPEN_WITH_EDITOR) {
            config.open_with_editor = parse_flag(&value).unwrap_or(false);
        }

        Ok(config)
    }
}

/// Parse a boolean-ish environment value. Unknown values yield None.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
