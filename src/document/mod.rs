//! Typed model of the input design document.
//!
//! This module provides:
//! - [`DesignNode`] and its leaf types - the node tree as exported by the design tool
//! - [`DesignDocument`] - the root document wrapper with up-front validation
//! - [`parse_document`] - JSON parsing entry point

pub mod node;
pub mod parse;

pub use node::{
    AxisAlign, BoundingBox, DesignNode, Effect, LayoutGrid, LayoutMode, NodeType, Paint, Rgba,
    TypeStyle, Vector2,
};
pub use parse::{parse_document, DesignDocument, NamedStyle, NodeEntry};
