//! The recognized component tree.
//!
//! [`RecognizedComponent`] is the shared intermediate representation between
//! classification, style aggregation, layout organization and downstream
//! code emission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::document::{BoundingBox, NodeType};

/// Closed set of EDS component archetypes a design node can classify into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdsComponentType {
    Button,
    Card,
    Input,
    Checkbox,
    Radio,
    Select,
    Icon,
    Table,
    Dialog,
    Tabs,
    Navigation,
    Label,
    Container,
    SignInForm,
    FormContainer,
    Header,
    Footer,
    Text,
    Link,
    Heading,
    Subtitle,
    Divider,
}

impl EdsComponentType {
    /// Types that participate in form pattern grouping.
    pub fn is_form_control(&self) -> bool {
        matches!(
            self,
            EdsComponentType::Input
                | EdsComponentType::Select
                | EdsComponentType::Checkbox
                | EdsComponentType::Radio
                | EdsComponentType::Button
        )
    }
}

/// Normalized CSS-like layout values extracted from a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
}

/// Typography record carried on a recognized component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyInfo {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<String>,
    pub line_height: Option<f32>,
}

/// Extracted style observations for one component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStyles {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyInfo>,
}

/// A design node classified into an EDS archetype, or a synthetic container
/// wrapping classified descendants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedComponent {
    pub id: String,
    pub name: String,
    pub source_type: NodeType,
    pub eds_component_type: EdsComponentType,
    /// Archetype-specific semantic attributes (text, variant, placeholder, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub layout: LayoutInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<ComponentStyles>,
    /// Source geometry, kept for spatial grouping passes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingBox>,
    /// Pattern tag written back by the layout organizer (e.g. "form-0").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RecognizedComponent>,
}

impl RecognizedComponent {
    /// Depth-first visit of this component and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a RecognizedComponent)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Depth-first mutable visit, used by the pattern annotation pass.
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut RecognizedComponent)) {
        visit(self);
        for child in &mut self.children {
            child.walk_mut(visit);
        }
    }

    /// Total number of components in this subtree.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(RecognizedComponent::count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, eds: EdsComponentType) -> RecognizedComponent {
        RecognizedComponent {
            id: id.to_string(),
            name: id.to_string(),
            source_type: NodeType::Frame,
            eds_component_type: eds,
            properties: BTreeMap::new(),
            layout: LayoutInfo::default(),
            styles: None,
            bounds: None,
            pattern: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn form_control_membership() {
        assert!(EdsComponentType::Input.is_form_control());
        assert!(EdsComponentType::Button.is_form_control());
        assert!(!EdsComponentType::Card.is_form_control());
        assert!(!EdsComponentType::Container.is_form_control());
    }

    #[test]
    fn walk_visits_every_component() {
        let mut root = leaf("root", EdsComponentType::Container);
        root.children.push(leaf("a", EdsComponentType::Button));
        root.children.push(leaf("b", EdsComponentType::Input));

        let mut seen = Vec::new();
        root.walk(&mut |c| seen.push(c.id.clone()));
        assert_eq!(seen, vec!["root", "a", "b"]);
        assert_eq!(root.count(), 3);
    }

    #[test]
    fn empty_fields_are_omitted_from_json() {
        let json = serde_json::to_value(leaf("x", EdsComponentType::Text)).unwrap();
        assert!(json.get("properties").is_none());
        assert!(json.get("children").is_none());
        assert!(json.get("pattern").is_none());
        assert_eq!(json["edsComponentType"], "Text");
    }
}
