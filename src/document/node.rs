//! Design node types as exported by the design tool API.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Closed set of source node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Rectangle,
    Text,
    Vector,
    #[serde(other)]
    Other,
}

/// Auto-layout direction of a container node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Alignment of items along a layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    #[serde(other)]
    Other,
}

/// Rectangle bounds of a node in absolute canvas coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// RGBA color with channels normalized to the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Whether all channels are finite and inside the normalized range.
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    /// Convert to a hex color string (e.g., "#ff7f00"). Alpha is dropped.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8
        )
    }

    /// Convert to a CSS rgba() expression, folding in an extra opacity factor.
    pub fn to_rgba_css(&self, extra_opacity: f32) -> String {
        let alpha = (self.a * extra_opacity).clamp(0.0, 1.0);
        format!(
            "rgba({}, {}, {}, {:.2})",
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
            alpha
        )
    }
}

/// A fill or stroke paint on a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    pub color: Option<Rgba>,
    pub opacity: Option<f32>,
}

impl Paint {
    pub fn is_solid(&self) -> bool {
        self.paint_type.eq_ignore_ascii_case("solid")
    }

    /// The paint's solid color, if this is a visible solid paint with valid channels.
    pub fn solid_color(&self) -> Option<Rgba> {
        if !self.visible || !self.is_solid() {
            return None;
        }
        self.color.filter(Rgba::is_valid)
    }
}

/// Text style properties attached to a text node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<f32>,
    pub line_height_px: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub text_align_horizontal: Option<String>,
    pub text_case: Option<String>,
}

/// 2D offset, used by shadow effects.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// A visual effect (drop shadow, inner shadow, blur) on a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    pub color: Option<Rgba>,
    pub offset: Option<Vector2>,
    pub radius: Option<f32>,
    pub spread: Option<f32>,
}

impl Effect {
    pub fn is_drop_shadow(&self) -> bool {
        self.effect_type.eq_ignore_ascii_case("drop_shadow")
    }

    pub fn is_inner_shadow(&self) -> bool {
        self.effect_type.eq_ignore_ascii_case("inner_shadow")
    }
}

/// A layout grid definition attached to a container node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGrid {
    pub pattern: String,
    pub count: Option<u32>,
    pub section_size: Option<f32>,
    pub gutter_size: Option<f32>,
}

/// A node in the design tree. Strict parent-owns-children ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default = "default_true")]
    pub visible: bool,
    pub absolute_bounding_box: Option<BoundingBox>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    pub style: Option<TypeStyle>,
    #[serde(default)]
    pub layout_mode: LayoutMode,
    pub item_spacing: Option<f32>,
    pub primary_axis_align_items: Option<AxisAlign>,
    pub counter_axis_align_items: Option<AxisAlign>,
    pub padding_left: Option<f32>,
    pub padding_right: Option<f32>,
    pub padding_top: Option<f32>,
    pub padding_bottom: Option<f32>,
    pub corner_radius: Option<f32>,
    #[serde(default)]
    pub layout_grids: Vec<LayoutGrid>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    pub characters: Option<String>,
    pub opacity: Option<f32>,
    /// Named-style bindings, slot ("fill", "text", "effect") to style id.
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<DesignNode>,
}

fn default_true() -> bool {
    true
}

impl DesignNode {
    pub fn width(&self) -> f32 {
        self.absolute_bounding_box.map(|b| b.width).unwrap_or(0.0)
    }

    pub fn height(&self) -> f32 {
        self.absolute_bounding_box.map(|b| b.height).unwrap_or(0.0)
    }

    /// Case-insensitive substring check against the node name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// The first visible solid fill color, falling back to strokes.
    pub fn first_solid_color(&self) -> Option<Rgba> {
        self.fills
            .iter()
            .chain(self.strokes.iter())
            .find_map(Paint::solid_color)
    }

    /// First direct child satisfying the predicate.
    pub fn find_child(&self, pred: impl Fn(&DesignNode) -> bool) -> Option<&DesignNode> {
        self.children.iter().find(|c| pred(c))
    }

    /// Ratio of the longer to the shorter bounding-box dimension.
    pub fn aspect_ratio(&self) -> Option<f32> {
        let (w, h) = (self.width(), self.height());
        let short = w.min(h);
        if short <= 0.0 {
            return None;
        }
        Some(w.max(h) / short)
    }

    /// Collect this node's id and all descendant ids into the set.
    pub fn collect_ids(&self, acc: &mut BTreeSet<String>) {
        acc.insert(self.id.clone());
        for child in &self.children {
            child.collect_ids(acc);
        }
    }

    /// Depth-first iteration over this node and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DesignNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
