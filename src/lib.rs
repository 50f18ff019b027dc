//! EDS Mapper (edsmap) Library
//!
//! A library for mapping exported design documents onto a recognized design
//! system component model. A design export is parsed, its node tree classified
//! into known component archetypes, its reusable style values aggregated into
//! tokens, and its top-level structure organized into pages, layout units and
//! form patterns.
//!
//! # Module Overview
//!
//! - [`document`] - Design export parsing and the raw node tree
//! - [`recognize`] - Component classification (name rules, geometry, structure)
//! - [`styles`] - Style token aggregation (colors, typography, spacing, shadows, breakpoints)
//! - [`organize`] - Pages, layout units and form pattern detection
//! - [`pipeline`] - Staged orchestration over one document snapshot
//! - [`config`] - Configuration file support
//! - [`types`] - Core data types and structures
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use edsmap_lib::{run_pipeline, Config, DesignSource, FileSource};
//!
//! # fn example() -> edsmap_lib::Result<()> {
//! let source = FileSource::new("design.json");
//! let doc = source.fetch_document()?;
//! let result = run_pipeline(&doc, &Config::default())?;
//! for component in &result.components {
//!     println!("{}: {:?}", component.name, component.eds_component_type);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod organize;
pub mod output;
pub mod pipeline;
pub mod recognize;
pub mod source;
pub mod styles;
pub mod types;

pub use config::Config;
pub use document::{parse_document, DesignDocument, DesignNode, NodeType};
pub use error::{EdsmapError, ErrorCategory, ErrorPayload, Result};
pub use organize::organize;
pub use output::{
    ClassifyOutput, EdsmapOutput, ErrorOutput, MapOutput, TokensOutput, EDSMAP_OUTPUT_VERSION,
};
pub use pipeline::{run_pipeline, PipelineResult};
pub use recognize::{classify_document, ClassifiedTree};
pub use source::{DesignSource, FileSource};
pub use styles::extract_styles;
pub use types::{
    DesignToken, EdsComponentType, OrganizedLayout, RecognizedComponent, StyleTokens,
};
