//! Ordered classification rule tables.
//!
//! Each source node type has its own ordered list of name keyword rules;
//! the first matching rule wins and name rules always take priority over
//! geometry fallbacks. Keeping the cascade in static tables makes the order
//! a visible, testable artifact.

use crate::document::{AxisAlign, DesignNode, LayoutMode, NodeType};
use crate::types::EdsComponentType;

/// One name keyword rule: any needle matching yields the result.
///
/// Needles match as whole words against the layer name, so "title" matches
/// "Page Title" but not "untitled", and "line" matches "line 2" but not
/// "outline". Multi-word needles match a run of consecutive name words.
#[derive(Debug, Clone, Copy)]
pub struct NameRule {
    pub needles: &'static [&'static str],
    pub result: EdsComponentType,
}

const fn rule(needles: &'static [&'static str], result: EdsComponentType) -> NameRule {
    NameRule { needles, result }
}

/// Rules for container-like nodes (frames, groups, components, instances).
///
/// Concrete controls come before composite archetypes so that a frame named
/// "Sign In Button" resolves to Button, not SignInForm.
const CONTAINER_RULES: &[NameRule] = &[
    rule(&["button", "btn", "cta"], EdsComponentType::Button),
    rule(&["checkbox", "check box"], EdsComponentType::Checkbox),
    rule(&["radio"], EdsComponentType::Radio),
    rule(&["select", "dropdown", "drop down", "combobox"], EdsComponentType::Select),
    rule(&["input", "text field", "textfield"], EdsComponentType::Input),
    rule(&["sign in", "signin", "login"], EdsComponentType::SignInForm),
    rule(&["form"], EdsComponentType::FormContainer),
    rule(&["header", "app bar", "appbar"], EdsComponentType::Header),
    rule(&["footer"], EdsComponentType::Footer),
    rule(&["nav", "navbar", "menu", "sidebar"], EdsComponentType::Navigation),
    rule(&["dialog", "modal", "popup"], EdsComponentType::Dialog),
    rule(&["tabs", "tab bar", "tabbar"], EdsComponentType::Tabs),
    rule(&["table", "grid view", "data grid"], EdsComponentType::Table),
    rule(&["card", "tile"], EdsComponentType::Card),
    rule(&["icon"], EdsComponentType::Icon),
];

const RECTANGLE_RULES: &[NameRule] = &[
    rule(&["divider", "separator", "rule", "line"], EdsComponentType::Divider),
    rule(&["button", "btn"], EdsComponentType::Button),
    rule(&["input", "field"], EdsComponentType::Input),
    rule(&["checkbox"], EdsComponentType::Checkbox),
    rule(&["radio"], EdsComponentType::Radio),
    rule(&["card"], EdsComponentType::Card),
    rule(&["icon"], EdsComponentType::Icon),
];

const TEXT_RULES: &[NameRule] = &[
    rule(&["link", "anchor"], EdsComponentType::Link),
    rule(&["label"], EdsComponentType::Label),
    rule(&["title", "heading", "headline"], EdsComponentType::Heading),
    rule(&["subtitle", "subheading"], EdsComponentType::Subtitle),
];

const VECTOR_RULES: &[NameRule] = &[rule(&["icon", "glyph"], EdsComponentType::Icon)];

/// The ordered name-rule list for a source node type.
///
/// Canvas and document nodes never classify by name; they only ever appear
/// as synthetic containers around classified descendants.
pub fn name_rules(node_type: NodeType) -> &'static [NameRule] {
    match node_type {
        NodeType::Frame
        | NodeType::Group
        | NodeType::Component
        | NodeType::ComponentSet
        | NodeType::Instance => CONTAINER_RULES,
        NodeType::Rectangle => RECTANGLE_RULES,
        NodeType::Text => TEXT_RULES,
        NodeType::Vector => VECTOR_RULES,
        NodeType::Canvas | NodeType::Document | NodeType::Other => &[],
    }
}

// Geometry thresholds for the structural fallback rules.
const BUTTON_MAX_WIDTH: f32 = 300.0;
const BUTTON_MAX_HEIGHT: f32 = 80.0;
const CARD_MIN_WIDTH: f32 = 240.0;
const CARD_MIN_HEIGHT: f32 = 120.0;
const CHECKBOX_MAX_SIDE: f32 = 24.0;
const ICON_MAX_SIDE: f32 = 32.0;
const DIVIDER_MIN_ASPECT: f32 = 5.0;
const HEADING_MIN_FONT_SIZE: f32 = 24.0;
const SUBTITLE_MIN_FONT_SIZE: f32 = 18.0;

/// Geometry/structural fallback, evaluated only when no name rule matched.
pub fn geometry_fallback(node: &DesignNode) -> Option<EdsComponentType> {
    match node.node_type {
        NodeType::Frame | NodeType::Group | NodeType::Component => container_geometry(node),
        NodeType::Instance => {
            let (w, h) = (node.width(), node.height());
            if w > 0.0 && w <= CHECKBOX_MAX_SIDE && h > 0.0 && h <= CHECKBOX_MAX_SIDE {
                return Some(EdsComponentType::Checkbox);
            }
            container_geometry(node)
        }
        NodeType::Rectangle => {
            if node.aspect_ratio()? > DIVIDER_MIN_ASPECT {
                Some(EdsComponentType::Divider)
            } else {
                None
            }
        }
        NodeType::Vector => {
            let (w, h) = (node.width(), node.height());
            if w > 0.0 && w <= ICON_MAX_SIDE && h > 0.0 && h <= ICON_MAX_SIDE {
                Some(EdsComponentType::Icon)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn container_geometry(node: &DesignNode) -> Option<EdsComponentType> {
    let (w, h) = (node.width(), node.height());

    let centered_row = node.layout_mode == LayoutMode::Horizontal
        && node.primary_axis_align_items == Some(AxisAlign::Center);
    if centered_row && w > 0.0 && w <= BUTTON_MAX_WIDTH && h > 0.0 && h <= BUTTON_MAX_HEIGHT {
        return Some(EdsComponentType::Button);
    }

    if node.corner_radius.unwrap_or(0.0) > 0.0 && w >= CARD_MIN_WIDTH && h >= CARD_MIN_HEIGHT {
        return Some(EdsComponentType::Card);
    }

    None
}

/// Font-size thresholds for text nodes without a name signal.
///
/// Text nodes always classify; the drop rule never applies to them.
pub fn text_fallback(node: &DesignNode) -> EdsComponentType {
    let size = node
        .style
        .as_ref()
        .and_then(|s| s.font_size)
        .unwrap_or(0.0);
    if size >= HEADING_MIN_FONT_SIZE {
        EdsComponentType::Heading
    } else if size >= SUBTITLE_MIN_FONT_SIZE {
        EdsComponentType::Subtitle
    } else {
        EdsComponentType::Text
    }
}

/// Lowercased word list of a layer name, split on runs of non-alphanumerics.
///
/// Design tools hand out names like "Button/Primary", "divider-1", or
/// "untitled"; splitting first keeps keyword matches from firing inside
/// unrelated words.
fn name_words(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Whether the needle's words appear as a consecutive run in `words`.
fn matches_needle(words: &[String], needle: &str) -> bool {
    let needle_words: Vec<&str> = needle.split_whitespace().collect();
    if needle_words.is_empty() {
        return false;
    }
    words
        .windows(needle_words.len())
        .any(|win| win.iter().zip(&needle_words).all(|(w, n)| w == n))
}

/// Full direct-classification cascade for a single node, ignoring children.
///
/// Returns `None` when no rule gives a signal; the caller then applies the
/// drop-or-wrap decision based on whether any descendant classified.
pub fn classify_single(node: &DesignNode) -> Option<EdsComponentType> {
    let words = name_words(&node.name);
    for rule in name_rules(node.node_type) {
        if rule.needles.iter().any(|needle| matches_needle(&words, needle)) {
            return Some(rule.result);
        }
    }

    if let Some(result) = geometry_fallback(node) {
        return Some(result);
    }

    if node.node_type == NodeType::Text {
        return Some(text_fallback(node));
    }

    None
}
