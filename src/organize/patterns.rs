//! Proximity-based form pattern grouping.

use std::collections::BTreeMap;

use crate::types::{PatternRecord, RecognizedComponent};

#[derive(Debug, Clone)]
struct Candidate {
    id: String,
    top: f32,
    bottom: f32,
}

/// Group form controls by vertical proximity and write the shared pattern
/// tag back onto each member.
///
/// Controls are sorted by vertical position and greedily chunked wherever
/// the gap to the previous control stays within `max_gap`; only groups of
/// two or more become patterns.
pub fn extract_patterns(
    components: &mut [RecognizedComponent],
    max_gap: f32,
) -> Vec<PatternRecord> {
    let mut candidates = Vec::new();
    for root in components.iter() {
        root.walk(&mut |component| {
            if !component.eds_component_type.is_form_control() {
                return;
            }
            let Some(bounds) = component.bounds else {
                return;
            };
            candidates.push(Candidate {
                id: component.id.clone(),
                top: bounds.y,
                bottom: bounds.y + bounds.height,
            });
        });
    }

    candidates.sort_by(|a, b| a.top.total_cmp(&b.top).then(a.id.cmp(&b.id)));

    let mut groups: Vec<Vec<Candidate>> = Vec::new();
    for candidate in candidates {
        match groups.last_mut() {
            Some(group) => {
                let prev = group.last().expect("group is never empty");
                let gap = candidate.top - prev.bottom;
                if gap <= max_gap {
                    group.push(candidate);
                } else {
                    groups.push(vec![candidate]);
                }
            }
            None => groups.push(vec![candidate]),
        }
    }

    let mut records = Vec::new();
    let mut tags: BTreeMap<String, String> = BTreeMap::new();
    for group in groups.into_iter().filter(|g| g.len() >= 2) {
        let tag = format!("form-{}", records.len());
        let component_ids: Vec<String> = group.iter().map(|c| c.id.clone()).collect();
        for id in &component_ids {
            tags.insert(id.clone(), tag.clone());
        }
        records.push(PatternRecord {
            id: tag,
            kind: "form".to_string(),
            component_ids,
        });
    }

    // Annotation pass: the only place recognized components are mutated.
    for root in components.iter_mut() {
        root.walk_mut(&mut |component| {
            if let Some(tag) = tags.get(&component.id) {
                component.pattern = Some(tag.clone());
            }
        });
    }

    records
}
