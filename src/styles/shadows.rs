//! Shadow token extraction.
//!
//! Shadows are read from the raw design nodes (effects are not carried on
//! the recognized tree), matched back by recognized component id.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::Config;
use crate::document::{DesignDocument, Effect};
use crate::types::{DesignToken, RecognizedComponent};

/// Canonical elevation scale, always emitted.
const ELEVATIONS: &[(&str, &str)] = &[
    ("shadow-sm", "0px 1px 2px 0px rgba(0, 0, 0, 0.05)"),
    ("shadow-md", "0px 4px 6px -1px rgba(0, 0, 0, 0.10)"),
    ("shadow-lg", "0px 10px 15px -3px rgba(0, 0, 0, 0.10)"),
    ("shadow-xl", "0px 20px 25px -5px rgba(0, 0, 0, 0.10)"),
    ("shadow-xxl", "0px 25px 50px -12px rgba(0, 0, 0, 0.25)"),
];

/// Render a shadow effect as a CSS box-shadow expression.
fn box_shadow_value(effect: &Effect) -> Option<String> {
    if !effect.visible || !(effect.is_drop_shadow() || effect.is_inner_shadow()) {
        return None;
    }
    let color = effect.color.filter(|c| c.is_valid())?;
    let offset = effect.offset.unwrap_or_default();
    let blur = effect.radius.unwrap_or(0.0);
    let spread = effect.spread.unwrap_or(0.0);

    let inset = if effect.is_inner_shadow() { "inset " } else { "" };
    Some(format!(
        "{inset}{}px {}px {}px {}px {}",
        offset.x,
        offset.y,
        blur,
        spread,
        color.to_rgba_css(1.0)
    ))
}

pub fn extract_shadow_tokens(
    components: &[RecognizedComponent],
    doc: &DesignDocument,
    config: &Config,
) -> Vec<DesignToken> {
    let mut recognized_ids = BTreeSet::new();
    for root in components {
        root.walk(&mut |c| {
            recognized_ids.insert(c.id.clone());
        });
    }

    // Tally custom shadows by exact CSS value, in first-seen order.
    let mut usage: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    let mut seen = 0usize;
    for root in doc.roots() {
        root.walk(&mut |node| {
            if !recognized_ids.contains(&node.id) {
                return;
            }
            for effect in &node.effects {
                if let Some(value) = box_shadow_value(effect) {
                    let entry = usage.entry(value).or_insert_with(|| {
                        seen += 1;
                        (0, seen)
                    });
                    entry.0 += 1;
                }
            }
        });
    }

    let mut tokens: Vec<DesignToken> = ELEVATIONS
        .iter()
        .map(|(name, value)| {
            DesignToken::new(name.to_string(), value.to_string(), format!("--{name}"))
        })
        .collect();

    let canonical_values: Vec<&str> = ELEVATIONS.iter().map(|(_, v)| *v).collect();
    let mut custom: Vec<(&String, &(usize, usize))> = usage
        .iter()
        .filter(|(value, (count, _))| {
            *count >= config.min_shadow_frequency && !canonical_values.contains(&value.as_str())
        })
        .collect();
    custom.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

    for (index, (value, _)) in custom.into_iter().enumerate() {
        let name = format!("shadow-custom-{index}");
        let variable = format!("--{name}");
        tokens.push(DesignToken::new(name, value.clone(), variable));
    }

    tokens
}
