//! Core data types produced by the pipeline.
//!
//! - [`component`] - recognized component tree
//! - [`tokens`] - design token collections
//! - [`organize`] - page/layout/pattern records

pub mod component;
pub mod organize;
pub mod tokens;

pub use component::{
    ComponentStyles, EdsComponentType, LayoutInfo, RecognizedComponent, TypographyInfo,
};
pub use organize::{GridInfo, LayoutKind, LayoutRecord, OrganizedLayout, PageRecord, PatternRecord};
pub use tokens::{DesignToken, StyleTokens};
