//! JSON persistence for gathered trees.
//!
//! The snapshot document is deterministic: two-space indentation, stable
//! key order (`name`, `type`, `children`), UTF-8 throughout with non-ASCII
//! names written raw.

use std::fs;
use std::path::Path;

use crate::error::CanopyError;
use crate::tree::Tree;

/// Encode a tree as the pretty-printed snapshot document.
pub fn to_json(tree: &Tree) -> Result<String, CanopyError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Encode a tree and write the document to `path`.
pub fn write_json(tree: &Tree, path: impl AsRef<Path>) -> Result<(), CanopyError> {
    let json = to_json(tree)?;
    fs::write(&path, json).map_err(|e| CanopyError::io(path.as_ref(), e))?;
    Ok(())
}
