/// Error types for vscode-projects
///
/// This module defines all possible errors that can occur while resolving
/// and opening projects. Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vscode-projects operations
#[derive(Error, Debug)]
pub enum LauncherError {
    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A source file exists but is not valid JSON
    #[error("Malformed JSON in {}: {source}", path.display())]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A source file parsed but its top level is not what we expect
    #[error("Unexpected layout in {}: expected {expected}", path.display())]
    UnexpectedShape { path: PathBuf, expected: &'static str },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Editor executable is not on PATH
    #[error("Editor executable not found: {0}")]
    EditorNotFound(String),

    /// Spawning the opener or editor failed
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for vscode-projects operations
pub type Result<T> = std::result::Result<T, LauncherError>;

/// Convert LauncherError to a user-friendly error message
impl LauncherError {
    pub fn user_message(&self) -> String {
        match self {
            LauncherError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            LauncherError::MalformedSource { path, .. } => {
                format!("Could not parse {}", path.display())
            }
            LauncherError::UnexpectedShape { path, expected } => {
                format!("{} does not contain {}", path.display(), expected)
            }
            LauncherError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            LauncherError::EditorNotFound(name) => {
                format!("'{}' was not found on PATH", name)
            }
            LauncherError::Launch { program, .. } => {
                format!("Could not start {}", program)
            }
        }
    }
}
