//! Style aggregation: deduplicated, named design tokens.
//!
//! Colors and typography merge two sources: named style definitions from the
//! raw document and ad hoc values observed across the recognized tree, the
//! latter promoted to tokens only past a frequency threshold. Spacing always
//! emits a fixed canonical ladder, shadows a fixed elevation scale, and
//! breakpoints are a constant table independent of the input.

mod breakpoints;
mod colors;
mod shadows;
mod spacing;
mod typography;


pub use breakpoints::breakpoint_tokens;
pub use colors::extract_color_tokens;
pub use shadows::extract_shadow_tokens;
pub use spacing::extract_spacing_tokens;
pub use typography::extract_typography_tokens;

use crate::config::Config;
use crate::document::DesignDocument;
use crate::error::Result;
use crate::types::{RecognizedComponent, StyleTokens};

/// Aggregate all token collections from the recognized tree and the raw
/// document's named styles.
///
/// Malformed observations are skipped, never fatal; only the recognized tree
/// contributes to frequency counts (dropped nodes do not).
pub fn extract_styles(
    components: &[RecognizedComponent],
    doc: &DesignDocument,
    config: &Config,
) -> Result<StyleTokens> {
    Ok(StyleTokens {
        colors: extract_color_tokens(components, doc, config),
        typography: extract_typography_tokens(components, doc, config),
        spacing: extract_spacing_tokens(components, config),
        shadows: extract_shadow_tokens(components, doc, config),
        breakpoints: breakpoint_tokens(),
    })
}
