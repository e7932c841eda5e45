// Executable lookup and the open action
//
// Processes are spawned and left running; we never wait on them.

use crate::error::{LauncherError, Result};
use crate::host::item::OpenTarget;
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
const DESKTOP_OPENER: &str = "open";
#[cfg(not(target_os = "macos"))]
const DESKTOP_OPENER: &str = "xdg-open";

/// Find an executable by name on PATH. Names with a directory part are
/// checked as-is.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let path_var = env::var_os("PATH")?;
    find_executable_in(name, env::split_paths(&path_var))
}

/// Same as `find_executable` over an explicit list of directories
pub fn find_executable_in<I>(name: &str, dirs: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    dirs.into_iter()
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// `file://` URI for an absolute path
pub fn file_uri(path: &str) -> String {
    format!("file://{}", path)
}

/// Program and arguments that open a target
pub fn open_command(target: &OpenTarget) -> (String, Vec<String>) {
    match target {
        OpenTarget::FileUri { path } => (DESKTOP_OPENER.to_string(), vec![file_uri(path)]),
        OpenTarget::Editor { executable, path } => {
            (executable.display().to_string(), vec![path.clone()])
        }
    }
}

/// Run the open action detached from us
pub fn open(target: &OpenTarget) -> Result<()> {
    let (program, args) = open_command(target);
    tracing::info!("Opening {} with {}", target.path(), program);

    Command::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LauncherError::Launch { program, source })?;

    Ok(())
}
