/// vscode-projects library
///
/// Finds VS Code projects from the Project Manager extension and the
/// editor's recent-folder history, ranked for a launcher.

pub mod config;
pub mod core;
pub mod error;
pub mod host;

// Re-exports for convenience
pub use config::{PluginConfig, ResolverConfig};
pub use error::{LauncherError, Result};
pub use host::ProjectsPlugin;
