//! Directory tree gathering
//!
//! The walker resolves symlinks, cuts cycles per branch, and degrades
//! everything below the root to warnings where the filesystem allows it;
//! the node types define the JSON document the tree serializes to.

mod node;
mod walker;

// Re-export public types
pub use node::{Node, Tree};
pub use walker::{Scan, gather};
