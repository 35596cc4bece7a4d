//! Error and warning types for tree gathering.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a gather or a save.
#[derive(Debug, Error)]
pub enum CanopyError {
    /// Root path does not exist.
    #[error("Path does not exist: {path}")]
    NotFound { path: PathBuf },

    /// Root path exists but is not a directory.
    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Generic I/O error with path context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tree could not be encoded as JSON.
    #[error("Could not encode tree as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The execution report could not be written to stdout.
    #[error("Could not write report: {source}")]
    Report { source: std::io::Error },
}

impl CanopyError {
    /// Create an I/O error with path context, promoting well-known kinds
    /// to their dedicated variants.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Kind of gather warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A canonical path repeated along the current branch.
    Cycle,
    /// Symbolic link target could not be resolved.
    BrokenSymlink,
    /// A directory entry could not be read or scanned.
    ReadError,
    /// Neither a regular file nor a directory.
    UnknownKind,
}

/// Non-fatal warning encountered while gathering a tree.
///
/// The walker collects these instead of logging so callers decide what to
/// do with them; the CLI turns each one into a `warn` log line.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// A symlink whose resolved target is an ancestor of the current branch.
    pub fn symlink_cycle(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Symlink cycle detected at {}, skipping", path.display()),
            path,
            kind: WarningKind::Cycle,
        }
    }

    /// A non-symlink path whose canonical form is an ancestor of the
    /// current branch.
    pub fn cycle(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Cycle detected at {}, skipping", path.display()),
            path,
            kind: WarningKind::Cycle,
        }
    }

    /// A symlink that could not be resolved.
    pub fn broken_symlink(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("Could not resolve symlink {}: {error}", path.display()),
            path,
            kind: WarningKind::BrokenSymlink,
        }
    }

    /// A directory entry that could not be read or scanned.
    pub fn entry_access(path: impl Into<PathBuf>, error: &impl std::fmt::Display) -> Self {
        let path = path.into();
        Self {
            message: format!("Could not access {}: {error}", path.display()),
            path,
            kind: WarningKind::ReadError,
        }
    }

    /// A path that is neither a regular file nor a directory.
    pub fn unknown_kind(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Unknown path type: {}", path.display()),
            path,
            kind: WarningKind::UnknownKind,
        }
    }
}
