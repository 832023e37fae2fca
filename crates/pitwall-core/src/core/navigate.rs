//! Directory resolution for `box`/`cd` and `grid`/`ls`.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Why a pit stop could not happen.
#[derive(Debug)]
pub enum NavError {
    /// Missing, or not a directory.
    NotFound(PathBuf),
    PermissionDenied(PathBuf),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::NotFound(path) => write!(f, "directory not found: {}", path.display()),
            NavError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Joins `arg` onto `cwd`; `..` is the parent of `cwd` (root stays root).
pub fn resolve(cwd: &Path, arg: &str) -> PathBuf {
    if arg == ".." {
        return cwd.parent().unwrap_or(cwd).to_path_buf();
    }
    cwd.join(arg)
}

fn classify(err: &io::Error, path: &Path) -> NavError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => NavError::PermissionDenied(path.to_path_buf()),
        _ => NavError::NotFound(path.to_path_buf()),
    }
}

/// Resolves and validates a navigation target, returning its canonical path.
///
/// The target must exist, be a directory, and be openable for reading.
pub fn navigate(cwd: &Path, arg: &str) -> Result<PathBuf, NavError> {
    let target = resolve(cwd, arg);
    let canonical = fs::canonicalize(&target).map_err(|e| classify(&e, &target))?;
    let metadata = fs::metadata(&canonical).map_err(|e| classify(&e, &canonical))?;
    if !metadata.is_dir() {
        return Err(NavError::NotFound(canonical));
    }
    fs::read_dir(&canonical).map_err(|e| classify(&e, &canonical))?;
    Ok(canonical)
}
