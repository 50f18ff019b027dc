//! Layout organization: pages, layout units, and form patterns.
//!
//! Runs after classification over the completed recognized tree. The pattern
//! pass is the one stage that mutates recognized components in place, as a
//! final annotation with no further readers upstream.

mod layouts;
mod pages;
mod patterns;


pub use layouts::extract_layouts;
pub use pages::extract_pages;
pub use patterns::extract_patterns;

use crate::config::Config;
use crate::document::DesignDocument;
use crate::error::Result;
use crate::types::{OrganizedLayout, RecognizedComponent};

/// Partition recognized components into pages, layout units and patterns.
pub fn organize(
    doc: &DesignDocument,
    components: &mut [RecognizedComponent],
    config: &Config,
) -> Result<OrganizedLayout> {
    let pages = extract_pages(doc, components);
    let layouts = extract_layouts(doc);
    let patterns = extract_patterns(components, config.pattern_max_gap);

    Ok(OrganizedLayout {
        pages,
        layouts,
        patterns,
    })
}
