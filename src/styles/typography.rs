//! Typography token extraction.

use std::collections::BTreeMap;

use log::debug;

use crate::config::Config;
use crate::document::DesignDocument;
use crate::types::{DesignToken, RecognizedComponent, TypographyInfo};

/// Keyword bindings for named text styles, checked in order.
const TYPOGRAPHY_VARIABLES: &[(&str, &str)] = &[
    ("h1", "--font-h1"),
    ("h2", "--font-h2"),
    ("h3", "--font-h3"),
    ("h4", "--font-h4"),
    ("h5", "--font-h5"),
    ("h6", "--font-h6"),
    ("caption", "--font-caption"),
    ("label", "--font-label"),
    ("button", "--font-button"),
    ("small", "--font-body-small"),
    ("large", "--font-body-large"),
    ("body", "--font-body"),
];

/// Bind a typography name to an EDS variable, `--font-<kebab>` as fallback.
pub fn bind_typography_variable(name: &str) -> String {
    let lower = name.to_lowercase();
    for (keyword, variable) in TYPOGRAPHY_VARIABLES {
        if lower.contains(keyword) {
            return (*variable).to_string();
        }
    }
    let kebab = lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("--font-{kebab}")
}

/// CSS font shorthand for a typography tuple, e.g. "600 16px/24px Inter".
fn font_value(info: &TypographyInfo) -> String {
    let weight = info.font_weight.as_deref().unwrap_or("400");
    let size = info.font_size.unwrap_or(16.0);
    let family = info.font_family.as_deref().unwrap_or("sans-serif");
    match info.line_height {
        Some(lh) => format!("{weight} {size}px/{lh}px {family}"),
        None => format!("{weight} {size}px {family}"),
    }
}

/// Tuple key for exact-equality aggregation of ad hoc observations.
fn tuple_key(info: &TypographyInfo) -> String {
    format!(
        "{}|{}|{}|{}",
        info.font_family.as_deref().unwrap_or(""),
        info.font_size.unwrap_or(0.0),
        info.font_weight.as_deref().unwrap_or(""),
        info.line_height.unwrap_or(0.0)
    )
}

/// Name an unlabeled typography tuple from its font size.
fn size_based_name(size: f32) -> &'static str {
    if size >= 32.0 {
        "Heading-1"
    } else if size >= 28.0 {
        "Heading-2"
    } else if size >= 24.0 {
        "Heading-3"
    } else if size >= 20.0 {
        "Heading-4"
    } else if size >= 18.0 {
        "Heading-5"
    } else if size > 16.0 {
        "Body-Large"
    } else if size >= 14.0 {
        "Body"
    } else {
        "Body-Small"
    }
}

pub fn extract_typography_tokens(
    components: &[RecognizedComponent],
    doc: &DesignDocument,
    config: &Config,
) -> Vec<DesignToken> {
    let mut tokens = Vec::new();
    let mut named_values: Vec<String> = Vec::new();

    // Named text styles resolved through the first node that uses them.
    for (style_id, style) in &doc.styles {
        if !style.style_type.eq_ignore_ascii_case("text") || style.name.trim().is_empty() {
            continue;
        }
        let resolved = doc
            .find_node(|n| n.styles.values().any(|id| id == style_id))
            .and_then(|n| n.style.as_ref());
        let Some(type_style) = resolved else {
            debug!("text style {} is unused; skipping", style_id);
            continue;
        };
        let info = TypographyInfo {
            font_family: type_style.font_family.clone(),
            font_size: type_style.font_size,
            font_weight: type_style.font_weight.map(|w| (w as i64).to_string()),
            line_height: type_style.line_height_px,
        };
        let value = font_value(&info);
        named_values.push(tuple_key(&info));
        tokens.push(DesignToken::new(
            style.name.clone(),
            value,
            bind_typography_variable(&style.name),
        ));
    }

    // Ad hoc tuples across the recognized tree, promoted at the threshold.
    let mut usage: BTreeMap<String, (usize, usize, TypographyInfo)> = BTreeMap::new();
    let mut seen = 0usize;
    for root in components {
        root.walk(&mut |component| {
            let Some(info) = component.styles.as_ref().and_then(|s| s.typography.as_ref())
            else {
                return;
            };
            let key = tuple_key(info);
            let entry = usage.entry(key).or_insert_with(|| {
                seen += 1;
                (0, seen, info.clone())
            });
            entry.0 += 1;
        });
    }

    let mut promoted: Vec<&(usize, usize, TypographyInfo)> = usage
        .values()
        .filter(|(count, _, info)| {
            *count >= config.min_token_frequency && !named_values.contains(&tuple_key(info))
        })
        .collect();
    promoted.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    let mut used_names: Vec<String> = tokens.iter().map(|t| t.name.clone()).collect();
    for (_, _, info) in promoted {
        let base = size_based_name(info.font_size.unwrap_or(16.0));
        let mut name = base.to_string();
        let mut suffix = 2;
        while used_names.contains(&name) {
            name = format!("{base}-{suffix}");
            suffix += 1;
        }
        used_names.push(name.clone());
        let variable = bind_typography_variable(&name);
        tokens.push(DesignToken::new(name, font_value(info), variable));
    }

    tokens
}
