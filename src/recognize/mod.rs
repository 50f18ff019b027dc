//! Component recognition: classify design nodes into EDS archetypes.
//!
//! The cascade is order-sensitive and data-driven:
//! 1. Invisible nodes are pruned with their whole subtree.
//! 2. Whole-word name rules per source node type ([`rules::name_rules`]).
//! 3. Geometry/structural fallbacks ([`rules::geometry_fallback`]).
//! 4. Text nodes classify by font-size thresholds.
//! 5. Unmatched childless nodes are dropped; unmatched nodes with classified
//!    descendants become synthetic containers.

mod classifier;
mod properties;
pub mod rules;


pub use classifier::{classify_document, classify_node, ClassifiedTree};
pub use properties::extract_properties;
pub use rules::{classify_single, NameRule};
