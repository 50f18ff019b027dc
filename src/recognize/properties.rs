//! Archetype-specific property extraction.
//!
//! Extraction reads the raw node's children with positional and naming
//! heuristics. A failure here never aborts the walk: the classifier catches
//! the error and demotes the node to unclassified.

use std::collections::BTreeMap;

use crate::document::{DesignNode, NodeType};
use crate::error::{EdsmapError, Result};
use crate::types::EdsComponentType;

const BUTTON_VARIANTS: &[&str] = &["primary", "secondary", "tertiary", "ghost", "danger"];
const SHORT_LABEL_MAX_CHARS: usize = 20;
const PLACEHOLDER_MAX_OPACITY: f32 = 0.7;

/// Extract the semantic property map for a classified node.
pub fn extract_properties(
    eds_type: EdsComponentType,
    node: &DesignNode,
) -> Result<BTreeMap<String, String>> {
    let mut props = BTreeMap::new();

    match eds_type {
        EdsComponentType::Button => extract_button(node, &mut props)?,
        EdsComponentType::Input => extract_input(node, &mut props)?,
        EdsComponentType::Card => extract_card(node, &mut props)?,
        EdsComponentType::Checkbox | EdsComponentType::Radio => {
            extract_toggle(node, &mut props)?
        }
        EdsComponentType::Select => extract_select(node, &mut props)?,
        EdsComponentType::Text
        | EdsComponentType::Heading
        | EdsComponentType::Subtitle
        | EdsComponentType::Label
        | EdsComponentType::Link => {
            if let Some(chars) = &node.characters {
                props.insert("text".to_string(), chars.clone());
            }
        }
        EdsComponentType::SignInForm
        | EdsComponentType::FormContainer
        | EdsComponentType::Header
        | EdsComponentType::Footer
        | EdsComponentType::Dialog
        | EdsComponentType::Navigation => {
            if let Some(title) = first_text_child(node) {
                props.insert("title".to_string(), title.to_string());
            }
        }
        _ => {}
    }

    Ok(props)
}

fn extract_button(node: &DesignNode, props: &mut BTreeMap<String, String>) -> Result<()> {
    if let Some(text) = first_text_child(node) {
        props.insert("text".to_string(), text.to_string());
    }

    let variant = BUTTON_VARIANTS
        .iter()
        .find(|v| node.name_contains(v))
        .copied()
        .unwrap_or("default");
    props.insert("variant".to_string(), variant.to_string());

    let has_icon = node
        .children
        .iter()
        .any(|c| c.node_type == NodeType::Vector || c.name_contains("icon"));
    if has_icon {
        props.insert("icon".to_string(), "true".to_string());
    }

    Ok(())
}

fn extract_input(node: &DesignNode, props: &mut BTreeMap<String, String>) -> Result<()> {
    let input_type = if node.name_contains("password") {
        "password"
    } else if node.name_contains("email") {
        "email"
    } else {
        "text"
    };
    props.insert("type".to_string(), input_type.to_string());

    if let Some(placeholder) = find_placeholder(node)? {
        props.insert("placeholder".to_string(), placeholder);
    }

    let label = node
        .children
        .iter()
        .filter(|c| c.node_type == NodeType::Text)
        .find(|c| {
            c.name_contains("label")
                || c.characters
                    .as_deref()
                    .map(|t| !t.trim().is_empty() && t.len() <= SHORT_LABEL_MAX_CHARS)
                    .unwrap_or(false)
        })
        .and_then(|c| c.characters.clone());
    if let Some(label) = label {
        props.insert("label".to_string(), label);
    }

    Ok(())
}

/// A placeholder is a child explicitly named so, or a low-opacity text child.
fn find_placeholder(node: &DesignNode) -> Result<Option<String>> {
    for child in &node.children {
        if child.node_type != NodeType::Text {
            continue;
        }
        if child.name_contains("placeholder") {
            return Ok(child.characters.clone());
        }
        if let Some(opacity) = child.opacity {
            if !opacity.is_finite() {
                return Err(EdsmapError::Classification(format!(
                    "node {} has a malformed opacity value",
                    child.id
                )));
            }
            if opacity < PLACEHOLDER_MAX_OPACITY {
                return Ok(child.characters.clone());
            }
        }
    }
    Ok(None)
}

fn extract_card(node: &DesignNode, props: &mut BTreeMap<String, String>) -> Result<()> {
    let has_named = |needle: &str| node.children.iter().any(|c| c.name_contains(needle));

    if has_named("header") {
        props.insert("hasHeader".to_string(), "true".to_string());
    } else if let Some(heading) = largest_font_text_child(node) {
        // Structural fallback: the first child with the largest font acts as the header.
        props.insert("hasHeader".to_string(), "true".to_string());
        if let Some(chars) = &heading.characters {
            props.insert("headerText".to_string(), chars.clone());
        }
    }
    if has_named("content") || has_named("body") {
        props.insert("hasContent".to_string(), "true".to_string());
    }
    if has_named("footer") || has_named("actions") {
        props.insert("hasFooter".to_string(), "true".to_string());
    }

    Ok(())
}

fn extract_toggle(node: &DesignNode, props: &mut BTreeMap<String, String>) -> Result<()> {
    let label = node
        .children
        .iter()
        .find(|c| c.name_contains("option") || c.node_type == NodeType::Text)
        .and_then(|c| c.characters.clone());
    if let Some(label) = label {
        props.insert("label".to_string(), label);
    }

    if node.name_contains("selected") || node.name_contains("checked") {
        props.insert("checked".to_string(), "true".to_string());
    }

    Ok(())
}

fn extract_select(node: &DesignNode, props: &mut BTreeMap<String, String>) -> Result<()> {
    if let Some(value) = first_text_child(node) {
        props.insert("value".to_string(), value.to_string());
    }
    Ok(())
}

fn first_text_child(node: &DesignNode) -> Option<&str> {
    node.find_child(|c| c.node_type == NodeType::Text && c.characters.is_some())
        .and_then(|c| c.characters.as_deref())
}

fn largest_font_text_child(node: &DesignNode) -> Option<&DesignNode> {
    node.children
        .iter()
        .filter(|c| c.node_type == NodeType::Text)
        .max_by(|a, b| {
            let size = |n: &DesignNode| n.style.as_ref().and_then(|s| s.font_size).unwrap_or(0.0);
            size(a).total_cmp(&size(b))
        })
}
