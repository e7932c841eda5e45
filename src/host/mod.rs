/// Launcher host glue
///
/// Result rows, the plugin that fills them, and the open action.

pub mod item;
pub mod launch;
pub mod plugin;

pub use item::{Action, OpenTarget, ResultItem, ResultSink};
pub use launch::{find_executable, open};
pub use plugin::{PluginInfo, ProjectsPlugin, PLUGIN_INFO};
