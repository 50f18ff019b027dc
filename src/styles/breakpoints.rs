//! Breakpoint tokens.
//!
//! Breakpoints are never derived from the design: the output is this fixed
//! table for any input document, a deliberate simplification kept for output
//! stability.

use crate::types::DesignToken;

const BREAKPOINTS: &[(&str, u32)] = &[
    ("xs", 0),
    ("sm", 576),
    ("md", 768),
    ("lg", 992),
    ("xl", 1200),
    ("xxl", 1400),
];

pub fn breakpoint_tokens() -> Vec<DesignToken> {
    BREAKPOINTS
        .iter()
        .map(|(name, px)| {
            DesignToken::new(
                name.to_string(),
                format!("{px}px"),
                format!("--breakpoint-{name}"),
            )
        })
        .collect()
}
