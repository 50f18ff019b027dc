//! Staged pipeline orchestration.
//!
//! Execution order is fixed: classification must fully complete before style
//! aggregation and layout organization, both of which read the whole
//! recognized tree (they are independent of each other).

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::document::DesignDocument;
use crate::error::Result;
use crate::organize::organize;
use crate::recognize::classify_document;
use crate::styles::extract_styles;
use crate::types::{OrganizedLayout, RecognizedComponent, StyleTokens};

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    pub components: Vec<RecognizedComponent>,
    pub tokens: StyleTokens,
    #[serde(flatten)]
    pub layout: OrganizedLayout,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Run the full pipeline on one immutable document snapshot.
pub fn run_pipeline(doc: &DesignDocument, config: &Config) -> Result<PipelineResult> {
    let tree = classify_document(doc, config)?;
    let mut components = tree.components;

    let tokens = extract_styles(&components, doc, config)?;
    let layout = organize(doc, &mut components, config)?;

    Ok(PipelineResult {
        components,
        tokens,
        layout,
        warnings: tree.warnings,
    })
}
