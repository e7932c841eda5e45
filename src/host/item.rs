/// Result rows handed to the launcher

use crate::core::ProjectEntry;
use serde::Serialize;
use std::path::PathBuf;

/// What activating a row does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpenTarget {
    /// Hand `file://<path>` to the desktop opener
    FileUri { path: String },
    /// Start the editor with the path as its argument
    Editor { executable: PathBuf, path: String },
}

impl OpenTarget {
    pub fn path(&self) -> &str {
        match self {
            OpenTarget::FileUri { path } | OpenTarget::Editor { path, .. } => path,
        }
    }
}

/// An activatable action on a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub id: String,
    pub text: String,
    pub target: OpenTarget,
}

/// One launcher result row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub id: String,
    pub text: String,
    pub subtext: String,
    pub icon: String,
    pub actions: Vec<Action>,
}

impl ResultItem {
    /// Row for a resolved project with a single "open" action
    pub fn for_entry(entry: &ProjectEntry, icon: &str, target: OpenTarget) -> Self {
        Self {
            id: format!("{}_{}", entry.path, entry.name),
            text: entry.name.clone(),
            subtext: entry.path.clone(),
            icon: icon.to_string(),
            actions: vec![Action {
                id: "open".to_string(),
                text: format!("Open {} in Visual Studio Code", entry.path),
                target,
            }],
        }
    }

    /// Informational row with no actions
    pub fn notice(id: &str, text: &str, subtext: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            subtext: subtext.to_string(),
            icon: icon.to_string(),
            actions: Vec::new(),
        }
    }
}

/// Where the launcher collects rows
pub trait ResultSink {
    fn add(&mut self, item: ResultItem);
}

impl ResultSink for Vec<ResultItem> {
    fn add(&mut self, item: ResultItem) {
        self.push(item);
    }
}
