/// Core functionality modules
///
/// Contains the project sources, text normalization, ranking and the
/// resolver that ties them together.

pub mod entry;
pub mod normalize;
pub mod probe;
pub mod project_manager;
pub mod recent;
pub mod resolver;

pub use entry::{EntrySet, ProjectEntry};
pub use normalize::normalize;
pub use probe::{DiskProbe, FileProbe, MemoryProbe};
pub use resolver::{ProjectResolver, Query};
