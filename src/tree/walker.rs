//! Recursive walker that gathers a directory hierarchy into a tree

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CanopyError, ScanWarning};

use super::node::{Node, Tree};

/// Everything a gather produces: the tree itself plus the non-fatal
/// warnings collected along the way.
#[derive(Debug)]
pub struct Scan {
    pub tree: Tree,
    pub warnings: Vec<ScanWarning>,
}

/// Canonical paths of every directory entered along the current branch of
/// the walk. Each fan-out hands children their own copy, so only ancestor
/// repeats count as cycles; two branches may expand the same real
/// directory independently.
#[derive(Debug, Clone, Default)]
struct Ancestry(HashSet<PathBuf>);

impl Ancestry {
    fn contains(&self, path: &Path) -> bool {
        self.0.contains(path)
    }

    /// A copy of this ancestry with `path` recorded.
    fn with(&self, path: PathBuf) -> Self {
        let mut next = self.0.clone();
        next.insert(path);
        Self(next)
    }
}

/// Gather the hierarchy under `root` into a tree.
///
/// Fails fast when `root` is missing or is not a directory; below the root
/// everything that can degrade to a warning does. The returned tree always
/// has a folder at its root: should the walk of the root end in a leaf (a
/// race, or a root link that stopped resolving mid-run), the leaf is
/// wrapped in a synthetic folder named after the root path itself.
pub fn gather(root: &Path) -> Result<Scan, CanopyError> {
    if !root.exists() {
        return Err(CanopyError::NotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(CanopyError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut warnings = Vec::new();
    let node = scan_path(root, Ancestry::default(), &mut warnings)?;
    Ok(Scan {
        tree: into_tree(root, node),
        warnings,
    })
}

fn into_tree(root: &Path, node: Node) -> Tree {
    match node {
        folder @ Node::Folder { .. } => Tree { root: folder },
        leaf => Tree {
            root: Node::folder(base_name(root), vec![leaf]),
        },
    }
}

/// Walk one path: resolve symlinks, cut cycles, then classify.
fn scan_path(
    path: &Path,
    ancestry: Ancestry,
    warnings: &mut Vec<ScanWarning>,
) -> Result<Node, CanopyError> {
    if path.is_symlink() {
        return match fs::canonicalize(path) {
            Err(error) => {
                warnings.push(ScanWarning::broken_symlink(path, &error));
                Ok(Node::file(base_name(path)))
            }
            Ok(target) if ancestry.contains(&target) => {
                warnings.push(ScanWarning::symlink_cycle(path));
                Ok(Node::file(base_name(&target)))
            }
            Ok(target) => {
                let branch = ancestry.with(target.clone());
                scan_resolved(&target, &target, branch, warnings)
            }
        };
    }

    let canonical = fs::canonicalize(path).map_err(|e| CanopyError::io(path, e))?;
    if ancestry.contains(&canonical) {
        warnings.push(ScanWarning::cycle(path));
        return Ok(Node::file(base_name(&canonical)));
    }
    let branch = ancestry.with(canonical.clone());
    scan_resolved(path, &canonical, branch, warnings)
}

/// Classify a cycle-checked path and build its node. `ancestry` already
/// contains `canonical`; the node is named after the canonical base name.
fn scan_resolved(
    path: &Path,
    canonical: &Path,
    ancestry: Ancestry,
    warnings: &mut Vec<ScanWarning>,
) -> Result<Node, CanopyError> {
    let name = base_name(canonical);
    let metadata = fs::metadata(path).map_err(|e| CanopyError::io(path, e))?;

    if metadata.is_file() {
        return Ok(Node::file(name));
    }
    if !metadata.is_dir() {
        // Sockets, devices, FIFOs: recorded as files so the document
        // schema stays two-kinded.
        warnings.push(ScanWarning::unknown_kind(path));
        return Ok(Node::file(name));
    }

    // A listing failure here is fatal for this subtree; the parent's entry
    // loop downgrades it to a warning, and at the root it fails the run.
    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| CanopyError::io(path, e))? {
        match entry {
            Ok(entry) => entries.push(entry.path()),
            Err(error) => warnings.push(ScanWarning::entry_access(path, &error)),
        }
    }
    entries.sort_by_cached_key(|p| sort_key(p));

    let mut children = Vec::with_capacity(entries.len());
    for entry_path in entries {
        match scan_path(&entry_path, ancestry.clone(), warnings) {
            Ok(child) => children.push(child),
            Err(error) => warnings.push(ScanWarning::entry_access(&entry_path, &error)),
        }
    }

    Ok(Node::folder(name, children))
}

/// Case-insensitive ordering key with a raw-name tie-break, computed from
/// the directory-entry name rather than the resolved target.
fn sort_key(path: &Path) -> (String, String) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    (name.to_lowercase(), name)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
