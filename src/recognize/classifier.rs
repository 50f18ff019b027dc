//! Recursive classification of the design node tree.

use std::collections::BTreeMap;

use log::warn;

use crate::config::Config;
use crate::document::{
    AxisAlign, DesignDocument, DesignNode, LayoutMode, NodeType, TypeStyle,
};
use crate::error::{EdsmapError, Result};
use crate::types::{
    ComponentStyles, EdsComponentType, LayoutInfo, RecognizedComponent, TypographyInfo,
};

use super::properties::extract_properties;
use super::rules::classify_single;

/// Result of classifying a whole document.
#[derive(Debug, Default)]
pub struct ClassifiedTree {
    /// One entry per document root that produced a recognized subtree.
    pub components: Vec<RecognizedComponent>,
    /// Per-node incidents that demoted or skipped a node without aborting the walk.
    pub warnings: Vec<String>,
}

/// Classify every node tree in the document.
///
/// Validation failures abort before traversal; per-node extraction failures
/// are collected as warnings and the affected node is demoted per the
/// drop-or-wrap rule.
pub fn classify_document(doc: &DesignDocument, config: &Config) -> Result<ClassifiedTree> {
    doc.validate()?;

    let mut tree = ClassifiedTree::default();
    for root in doc.roots() {
        if let Some(component) = classify_node(root, 0, config, &mut tree.warnings)? {
            tree.components.push(component);
        }
    }
    Ok(tree)
}

/// Classify one node and its subtree, children before the parent decision.
///
/// Returns `Ok(None)` when the whole subtree drops out of the output.
pub fn classify_node(
    node: &DesignNode,
    depth: usize,
    config: &Config,
    warnings: &mut Vec<String>,
) -> Result<Option<RecognizedComponent>> {
    // Pruned before descending: an invisible node hides its whole subtree.
    if !node.visible {
        return Ok(None);
    }

    if depth > config.max_depth {
        return Err(EdsmapError::too_complex(format!(
            "max depth {} exceeded at node {}",
            config.max_depth, node.id
        )));
    }

    let mut children = Vec::new();
    for child in &node.children {
        if let Some(component) = classify_node(child, depth + 1, config, warnings)? {
            children.push(component);
        }
    }

    match classify_single(node) {
        Some(eds_type) => match extract_properties(eds_type, node) {
            Ok(properties) => Ok(Some(build_component(node, eds_type, properties, children))),
            Err(e) => {
                warn!(
                    "property extraction failed for node {} ({:?}); demoting: {}",
                    node.id, eds_type, e
                );
                warnings.push(format!(
                    "node {} demoted from {:?}: {}",
                    node.id, eds_type, e
                ));
                Ok(wrap_or_drop(node, children))
            }
        },
        None => Ok(wrap_or_drop(node, children)),
    }
}

/// The drop-or-wrap rule: unclassified nodes survive only as synthetic
/// containers around classified descendants.
fn wrap_or_drop(
    node: &DesignNode,
    children: Vec<RecognizedComponent>,
) -> Option<RecognizedComponent> {
    if children.is_empty() {
        return None;
    }
    Some(build_component(
        node,
        EdsComponentType::Container,
        BTreeMap::new(),
        children,
    ))
}

fn build_component(
    node: &DesignNode,
    eds_type: EdsComponentType,
    properties: BTreeMap<String, String>,
    children: Vec<RecognizedComponent>,
) -> RecognizedComponent {
    RecognizedComponent {
        id: node.id.clone(),
        name: node.name.clone(),
        source_type: node.node_type,
        eds_component_type: eds_type,
        properties,
        layout: extract_layout(node),
        styles: extract_component_styles(node),
        bounds: node.absolute_bounding_box,
        pattern: None,
        children,
    }
}

fn px(value: f32) -> String {
    if (value - value.round()).abs() < 0.001 {
        format!("{}px", value.round() as i64)
    } else {
        format!("{value}px")
    }
}

/// Normalize node geometry and auto-layout into CSS-like string values.
fn extract_layout(node: &DesignNode) -> LayoutInfo {
    let mut layout = LayoutInfo::default();

    if let Some(bb) = node.absolute_bounding_box {
        layout.width = Some(px(bb.width));
        layout.height = Some(px(bb.height));
        layout.left = Some(px(bb.x));
        layout.top = Some(px(bb.y));
    }

    if node.layout_mode != LayoutMode::None {
        layout.display = Some("flex".to_string());
        layout.flex_direction = Some(match node.layout_mode {
            LayoutMode::Horizontal => "row".to_string(),
            _ => "column".to_string(),
        });
        layout.justify_content = node.primary_axis_align_items.and_then(|align| match align {
            AxisAlign::Min => Some("flex-start".to_string()),
            AxisAlign::Center => Some("center".to_string()),
            AxisAlign::Max => Some("flex-end".to_string()),
            AxisAlign::SpaceBetween => Some("space-between".to_string()),
            AxisAlign::Other => None,
        });
        layout.gap = node.item_spacing.map(px);
    }

    let pad = [
        node.padding_top,
        node.padding_right,
        node.padding_bottom,
        node.padding_left,
    ];
    if pad.iter().any(Option::is_some) {
        let sides: Vec<String> = pad.iter().map(|p| px(p.unwrap_or(0.0))).collect();
        layout.padding = Some(sides.join(" "));
    }

    layout
}

/// Collect the node's own solid colors and text style for aggregation.
fn extract_component_styles(node: &DesignNode) -> Option<ComponentStyles> {
    let colors: Vec<String> = node
        .fills
        .iter()
        .chain(node.strokes.iter())
        .filter_map(|paint| paint.solid_color())
        .map(|c| c.to_hex())
        .collect();

    let typography = if node.node_type == NodeType::Text {
        node.style.as_ref().map(map_typography)
    } else {
        None
    };

    if colors.is_empty() && typography.is_none() {
        return None;
    }
    Some(ComponentStyles { colors, typography })
}

fn map_typography(style: &TypeStyle) -> TypographyInfo {
    TypographyInfo {
        font_family: style.font_family.clone(),
        font_size: style.font_size,
        font_weight: style.font_weight.map(|w| (w as i64).to_string()),
        line_height: style.line_height_px,
    }
}
