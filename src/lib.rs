//! Canopy - snapshot a directory tree as deterministic JSON
//!
//! Walks a folder recursively, following symlinks and cutting cycles, and
//! produces a `{"root": {...}}` document of `file`/`folder` nodes sorted
//! case-insensitively. Non-fatal problems (broken links, unreadable
//! entries, cycles) are returned as warnings rather than logged, so the
//! library stays silent; only the binary talks.

pub mod error;
pub mod output;
pub mod report;
pub mod tree;

pub use error::{CanopyError, ScanWarning, WarningKind};
pub use output::{to_json, write_json};
pub use report::{count_nodes, print_report};
pub use tree::{Node, Scan, Tree, gather};
