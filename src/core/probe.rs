/// Filesystem access for the resolver
///
/// The resolver never touches `std::fs` directly; it asks a probe whether a
/// path exists and for the bytes of a file. `DiskProbe` is the real thing,
/// `MemoryProbe` serves fixtures.

use crate::error::{LauncherError, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Minimal filesystem capability
pub trait FileProbe {
    /// Whether anything (file or directory) exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
}

/// Probe backed by the real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskProbe;

impl FileProbe for DiskProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(fs::read(path)?)
    }
}

/// In-memory probe: a set of files with contents plus bare directories
#[derive(Debug, Default, Clone)]
pub struct MemoryProbe {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
}

impl MemoryProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given contents
    pub fn with_file<P: Into<PathBuf>, C: Into<Vec<u8>>>(mut self, path: P, contents: C) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Add an (empty) directory
    pub fn with_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.dirs.insert(path.into());
        self
    }
}

impl FileProbe for MemoryProbe {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            LauncherError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }
}
