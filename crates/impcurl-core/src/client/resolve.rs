//! Locate the curl binary: an existing file path is used as-is, anything
//! else is looked up on `PATH`.

use std::env;
use std::path::{Path, PathBuf};

pub(crate) fn resolve_binary(binary: &Path) -> Option<PathBuf> {
    if binary.is_file() {
        return Some(absolute(binary));
    }
    // A name with a separator is a path; do not search for it.
    if binary.components().count() != 1 {
        return None;
    }
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(binary))
        .find(|candidate| is_executable(candidate))
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
