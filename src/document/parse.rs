//! Design document parsing and up-front validation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::node::DesignNode;
use crate::error::{EdsmapError, Result};

/// Wrapper containing the node tree for one document entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEntry {
    pub document: DesignNode,
}

/// Metadata for a named style definition in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedStyle {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub style_type: String,
}

/// The root design document: `{ name, nodes, styles?, components? }`.
///
/// Node entries are keyed by node id; a `BTreeMap` keeps traversal order
/// stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: BTreeMap<String, NodeEntry>,
    #[serde(default)]
    pub styles: BTreeMap<String, NamedStyle>,
    #[serde(default)]
    pub components: BTreeMap<String, serde_json::Value>,
}

impl DesignDocument {
    /// Reject malformed documents before any traversal starts.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(EdsmapError::validation("design document is missing a name"));
        }
        if self.nodes.is_empty() {
            return Err(EdsmapError::validation("design document has no nodes"));
        }
        Ok(())
    }

    /// Root node of each document entry, in stable key order.
    pub fn roots(&self) -> impl Iterator<Item = &DesignNode> {
        self.nodes.values().map(|entry| &entry.document)
    }

    /// First node anywhere in the document satisfying the predicate.
    pub fn find_node(&self, pred: impl Fn(&DesignNode) -> bool) -> Option<&DesignNode> {
        fn search<'a>(
            node: &'a DesignNode,
            pred: &impl Fn(&DesignNode) -> bool,
        ) -> Option<&'a DesignNode> {
            if pred(node) {
                return Some(node);
            }
            node.children.iter().find_map(|c| search(c, pred))
        }
        self.roots().find_map(|root| search(root, &pred))
    }
}

/// Parse and validate a design document from its JSON export.
pub fn parse_document(json: &str) -> Result<DesignDocument> {
    let doc: DesignDocument = serde_json::from_str(json)?;
    doc.validate()?;
    Ok(doc)
}
