//! Page records from top-level canvases.

use std::collections::BTreeSet;

use crate::document::{DesignDocument, DesignNode, NodeType};
use crate::types::{PageRecord, RecognizedComponent};

/// Map each top-level canvas to a page with its recognized component ids.
///
/// A component belongs to a page when its source node is a descendant of
/// that page's canvas node. Membership is listed in recognized-tree walk
/// order.
pub fn extract_pages(
    doc: &DesignDocument,
    components: &[RecognizedComponent],
) -> Vec<PageRecord> {
    let mut pages = Vec::new();
    for root in doc.roots() {
        match root.node_type {
            NodeType::Canvas => pages.push(page_record(root, components)),
            NodeType::Document => {
                for child in &root.children {
                    if child.node_type == NodeType::Canvas {
                        pages.push(page_record(child, components));
                    }
                }
            }
            _ => {}
        }
    }
    pages
}

fn page_record(canvas: &DesignNode, components: &[RecognizedComponent]) -> PageRecord {
    let mut subtree_ids = BTreeSet::new();
    canvas.collect_ids(&mut subtree_ids);

    let mut component_ids = Vec::new();
    for root in components {
        root.walk(&mut |component| {
            if component.id != canvas.id && subtree_ids.contains(&component.id) {
                component_ids.push(component.id.clone());
            }
        });
    }

    PageRecord {
        id: canvas.id.clone(),
        name: canvas.name.clone(),
        component_ids,
    }
}
