//! Page, layout and pattern records produced by the organizer.

use serde::{Deserialize, Serialize};

/// A top-level canvas mapped to a page, with the recognized components it contains.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub component_ids: Vec<String>,
}

/// Direction variant of a layout unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Row,
    Column,
    Grid,
}

/// Grid parameters read from the first layout-grid definition on a node.
///
/// Multiple simultaneous grid definitions are not supported; only the first
/// entry is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter: Option<f32>,
}

/// An auto-layout container or grid declaration found in the raw tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRecord {
    pub id: String,
    pub name: String,
    pub kind: LayoutKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridInfo>,
}

/// A proximity-grouped cluster of form controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRecord {
    /// Shared tag written onto each member component (e.g. "form-0").
    pub id: String,
    pub kind: String,
    pub component_ids: Vec<String>,
}

/// Combined organizer output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizedLayout {
    pub pages: Vec<PageRecord>,
    pub layouts: Vec<LayoutRecord>,
    pub patterns: Vec<PatternRecord>,
}
