/// Launcher-facing plugin
///
/// Owns the resolver and turns raw launcher queries into result rows. If the
/// editor is missing, every query answers with a single notice instead.

use crate::config::PluginConfig;
use crate::core::{DiskProbe, FileProbe, ProjectResolver, Query};
use crate::error::{LauncherError, Result};
use crate::host::item::{OpenTarget, ResultItem, ResultSink};
use crate::host::launch::find_executable;
use std::path::{Path, PathBuf};

/// Static plugin metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub trigger: &'static str,
    pub synopsis: &'static str,
    pub binary: &'static str,
}

pub const PLUGIN_INFO: PluginInfo = PluginInfo {
    name: "VS Code Projects",
    description: "Open & search Visual Studio Code Project files.",
    trigger: "vc ",
    synopsis: "<project name>",
    binary: "code",
};

const NOT_INSTALLED: &str = "Visual Studio Code not installed";

pub struct ProjectsPlugin<P: FileProbe> {
    resolver: ProjectResolver<P>,
    editor_name: String,
    editor: Option<PathBuf>,
    icon: String,
    open_with_editor: bool,
}

impl ProjectsPlugin<DiskProbe> {
    /// Plugin for the current user: real filesystem, editor looked up on PATH
    pub fn from_env() -> Result<Self> {
        let config = PluginConfig::from_env()?;
        let editor = find_executable(&config.editor_executable);
        if editor.is_none() {
            tracing::warn!("'{}' not found on PATH", config.editor_executable);
        }

        Ok(Self::new(config, DiskProbe, editor))
    }
}

impl<P: FileProbe> ProjectsPlugin<P> {
    /// `editor` is the resolved executable, `None` when it is not installed
    pub fn new(config: PluginConfig, probe: P, editor: Option<PathBuf>) -> Self {
        Self {
            resolver: ProjectResolver::new(config.resolver, probe),
            editor_name: config.editor_executable,
            editor,
            icon: config.icon,
            open_with_editor: config.open_with_editor,
        }
    }

    pub fn info(&self) -> PluginInfo {
        PLUGIN_INFO
    }

    pub fn is_installed(&self) -> bool {
        self.editor.is_some()
    }

    /// Configured editor executable name
    pub fn editor_name(&self) -> &str {
        &self.editor_name
    }

    /// Open action for an arbitrary path, honouring `open_with_editor`
    pub fn open_target(&self, path: &str) -> Result<OpenTarget> {
        let editor = self
            .editor
            .as_deref()
            .ok_or_else(|| LauncherError::EditorNotFound(self.editor_name.clone()))?;

        Ok(self.target_for(editor, path))
    }

    /// Answer one launcher query
    ///
    /// Rows are appended in resolver order. A query that fails to resolve
    /// adds one notice row carrying the error and nothing else.
    pub fn handle_query<S: ResultSink + ?Sized>(&self, raw: &str, sink: &mut S) {
        let Some(editor) = &self.editor else {
            sink.add(ResultItem::notice("vc", NOT_INSTALLED, "", &self.icon));
            return;
        };

        let Some(query) = Query::parse(raw) else {
            return;
        };

        match self.resolver.resolve(&query) {
            Ok(entries) => {
                for entry in &entries {
                    let target = self.target_for(editor, &entry.path);
                    sink.add(ResultItem::for_entry(entry, &self.icon, target));
                }
            }
            Err(e) => {
                tracing::warn!("Query '{}' failed: {}", raw, e);
                sink.add(ResultItem::notice(
                    "vc_error",
                    &e.user_message(),
                    PLUGIN_INFO.name,
                    &self.icon,
                ));
            }
        }
    }

    fn target_for(&self, editor: &Path, path: &str) -> OpenTarget {
        if self.open_with_editor {
            OpenTarget::Editor {
                executable: editor.to_path_buf(),
                path: path.to_string(),
            }
        } else {
            OpenTarget::FileUri {
                path: path.to_string(),
            }
        }
    }
}
