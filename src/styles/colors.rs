//! Color token extraction and EDS variable binding.

use std::collections::BTreeMap;

use log::debug;

use crate::config::Config;
use crate::document::DesignDocument;
use crate::types::{DesignToken, RecognizedComponent};

/// Keyword-to-variable lookup, checked in order against token names and
/// observation contexts. The first matching keyword wins.
const COLOR_VARIABLES: &[(&str, &str)] = &[
    ("primary", "--primary"),
    ("secondary", "--secondary"),
    ("accent", "--accent"),
    ("success", "--success"),
    ("warning", "--warning"),
    ("danger", "--danger"),
    ("error", "--danger"),
    ("info", "--info"),
    ("background", "--background"),
    ("foreground", "--foreground"),
    ("border", "--border"),
    ("text", "--text"),
    ("muted", "--muted"),
];

/// Bind a color name to an EDS variable, falling back to `--color-<kebab>`.
pub fn bind_color_variable(name: &str) -> String {
    let lower = name.to_lowercase();
    for (keyword, variable) in COLOR_VARIABLES {
        if lower.contains(keyword) {
            return (*variable).to_string();
        }
    }
    format!("--color-{}", kebab(name))
}

fn kebab(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// One ad hoc color observation tally: occurrence count plus the component
/// names it appeared in, in first-seen order.
#[derive(Debug, Default)]
struct ColorUsage {
    count: usize,
    contexts: Vec<String>,
    first_seen: usize,
}

/// Extract the merged color token list: named document styles first, then ad
/// hoc colors promoted past the frequency threshold.
pub fn extract_color_tokens(
    components: &[RecognizedComponent],
    doc: &DesignDocument,
    config: &Config,
) -> Vec<DesignToken> {
    let mut tokens = Vec::new();
    let mut named_values: Vec<String> = Vec::new();

    // (a) Named fill styles, resolved through the first node that uses them.
    for (style_id, style) in &doc.styles {
        if !style.style_type.eq_ignore_ascii_case("fill") || style.name.trim().is_empty() {
            continue;
        }
        let Some(node) = doc.find_node(|n| n.styles.values().any(|id| id == style_id)) else {
            debug!("named style {} is unused; skipping", style_id);
            continue;
        };
        let Some(color) = node.first_solid_color() else {
            debug!("named style {} resolves to no solid paint; skipping", style_id);
            continue;
        };
        let value = color.to_hex();
        named_values.push(value.clone());
        tokens.push(DesignToken::new(
            style.name.clone(),
            value,
            bind_color_variable(&style.name),
        ));
    }

    // (b) Ad hoc colors observed across the recognized tree.
    let mut usage: BTreeMap<String, ColorUsage> = BTreeMap::new();
    let mut seen = 0usize;
    for root in components {
        root.walk(&mut |component| {
            let Some(styles) = &component.styles else {
                return;
            };
            for hex in &styles.colors {
                let entry = usage.entry(hex.clone()).or_insert_with(|| {
                    seen += 1;
                    ColorUsage {
                        first_seen: seen,
                        ..ColorUsage::default()
                    }
                });
                entry.count += 1;
                entry.contexts.push(component.name.to_lowercase());
            }
        });
    }

    // Promote by frequency, then first observation, so output order is stable.
    let mut promoted: Vec<(&String, &ColorUsage)> = usage
        .iter()
        .filter(|(value, u)| {
            u.count >= config.min_token_frequency && !named_values.contains(value)
        })
        .collect();
    promoted.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.1.first_seen.cmp(&b.1.first_seen)));

    let mut used_names: Vec<String> = tokens.iter().map(|t| t.name.clone()).collect();
    let mut fallback_index = 0usize;
    for (value, u) in promoted {
        let name = match infer_color_name(&u.contexts) {
            Some(name) if !used_names.contains(&name) => name,
            _ => {
                let name = format!("Color-{fallback_index}");
                fallback_index += 1;
                name
            }
        };
        used_names.push(name.clone());
        let variable = bind_color_variable(&name);
        tokens.push(DesignToken::new(name, value.clone(), variable));
    }

    tokens
}

/// Infer a semantic name from the component names a color appeared in.
fn infer_color_name(contexts: &[String]) -> Option<String> {
    for (keyword, _) in COLOR_VARIABLES {
        if contexts.iter().any(|c| c.contains(keyword)) {
            let mut name = keyword.to_string();
            name[..1].make_ascii_uppercase();
            return Some(name);
        }
    }
    None
}
