//! Spacing token extraction.

use std::collections::BTreeMap;

use log::debug;

use crate::config::Config;
use crate::types::{DesignToken, RecognizedComponent};

/// The canonical spacing ladder, always emitted regardless of observed usage.
pub const SPACING_LADDER: [i64; 13] = [0, 4, 8, 12, 16, 24, 32, 40, 48, 64, 80, 96, 128];

fn spacing_token(value: i64) -> DesignToken {
    DesignToken::new(
        format!("Space-{value}"),
        format!("{value}px"),
        format!("--space-{value}"),
    )
}

/// Parse a CSS px literal back to a whole pixel value; malformed or
/// fractional observations are skipped.
fn parse_px(raw: &str) -> Option<i64> {
    let number: f32 = raw.trim().strip_suffix("px")?.parse().ok()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }
    if (number - number.round()).abs() > 0.001 {
        return None;
    }
    Some(number.round() as i64)
}

pub fn extract_spacing_tokens(
    components: &[RecognizedComponent],
    config: &Config,
) -> Vec<DesignToken> {
    let mut observed: BTreeMap<i64, usize> = BTreeMap::new();
    for root in components {
        root.walk(&mut |component| {
            let mut values = Vec::new();
            if let Some(gap) = &component.layout.gap {
                values.push(gap.as_str());
            }
            if let Some(padding) = &component.layout.padding {
                values.extend(padding.split_whitespace());
            }
            for raw in values {
                match parse_px(raw) {
                    Some(v) => *observed.entry(v).or_insert(0) += 1,
                    None => debug!(
                        "skipping malformed spacing value {:?} on {}",
                        raw, component.id
                    ),
                }
            }
        });
    }

    let mut tokens: Vec<DesignToken> = SPACING_LADDER.iter().copied().map(spacing_token).collect();

    // Observed values outside the ladder join it once they clear the bar.
    for (value, count) in observed {
        if count >= config.min_token_frequency && !SPACING_LADDER.contains(&value) {
            tokens.push(spacing_token(value));
        }
    }

    tokens
}
