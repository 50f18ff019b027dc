use serde::{Deserialize, Serialize};

use crate::error::ErrorPayload;
use crate::pipeline::PipelineResult;
use crate::types::{RecognizedComponent, StyleTokens};

/// Schema version for output payloads.
pub const EDSMAP_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum EdsmapOutput {
    Map(MapOutput),
    Classify(ClassifyOutput),
    Tokens(TokensOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOutput {
    pub version: String,
    pub document: String,
    #[serde(flatten)]
    pub result: PipelineResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyOutput {
    pub version: String,
    pub document: String,
    pub components: Vec<RecognizedComponent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensOutput {
    pub version: String,
    pub document: String,
    pub tokens: StyleTokens,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    pub error: ErrorPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdsmapError;
    use crate::types::OrganizedLayout;

    #[test]
    fn map_output_serializes_with_mode_tag() {
        let output = EdsmapOutput::Map(MapOutput {
            version: EDSMAP_OUTPUT_VERSION.to_string(),
            document: "Homepage".to_string(),
            result: PipelineResult {
                components: vec![],
                tokens: StyleTokens {
                    colors: vec![],
                    typography: vec![],
                    spacing: vec![],
                    shadows: vec![],
                    breakpoints: vec![],
                },
                layout: OrganizedLayout {
                    pages: vec![],
                    layouts: vec![],
                    patterns: vec![],
                },
                warnings: vec![],
            },
        });

        let json = serde_json::to_string(&output).expect("serialize map output");
        assert!(json.contains("\"mode\":\"map\""));
        assert!(json.contains("\"document\":\"Homepage\""));
        assert!(json.contains("\"version\":\"0.1.0\""));
    }

    #[test]
    fn error_output_carries_stage_label() {
        let err = EdsmapError::StyleExtraction("bad paint".to_string());
        let output = EdsmapOutput::Error(ErrorOutput {
            version: EDSMAP_OUTPUT_VERSION.to_string(),
            error: err.to_payload(),
            stage: err.stage().map(str::to_string),
        });

        let json = serde_json::to_string(&output).expect("serialize error output");
        assert!(json.contains("\"mode\":\"error\""));
        assert!(json.contains("\"stage\":\"style extraction\""));
    }
}
