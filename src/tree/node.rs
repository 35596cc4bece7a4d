//! Tree node types and their JSON document shape

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// A single entry in a gathered tree.
///
/// Names carry the resolved base name of the entry (a broken symlink keeps
/// the link's own name). `Folder` children are ordered case-insensitively
/// by the originating directory-entry name, so two runs over the same
/// hierarchy produce identical documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File {
        name: String,
    },
    Folder {
        name: String,
        #[serde(default)]
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a leaf node.
    pub fn file(name: impl Into<String>) -> Self {
        Node::File { name: name.into() }
    }

    /// Create a folder node with the given children.
    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Folder {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name } => name,
            Node::Folder { name, .. } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }
}

// The derive would emit the "type" tag first; the document format fixes
// the key order to name, type, children, so the node side is hand-rolled.
impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::File { name } => {
                let mut state = serializer.serialize_struct("Node", 2)?;
                state.serialize_field("name", name)?;
                state.serialize_field("type", "file")?;
                state.end()
            }
            Node::Folder { name, children } => {
                let mut state = serializer.serialize_struct("Node", 3)?;
                state.serialize_field("name", name)?;
                state.serialize_field("type", "folder")?;
                state.serialize_field("children", children)?;
                state.end()
            }
        }
    }
}

/// Document wrapper around the gathered hierarchy.
///
/// Serializes as `{"root": {...}}`. After normalization the root is always
/// a `Folder`; see `gather`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub root: Node,
}
