use serde_json::json;

use edsmap_lib::types::LayoutKind;
use edsmap_lib::{parse_document, run_pipeline, Config, EdsComponentType, EdsmapError};

/// One canvas holding a sign-up form and a separate row of action buttons.
fn signup_export() -> String {
    json!({
        "name": "Signup Flow",
        "nodes": {
            "0:1": {
                "document": {
                    "id": "0:1", "name": "Page 1", "type": "CANVAS",
                    "children": [
                        {
                            "id": "1:1", "name": "Sign Up Form", "type": "FRAME",
                            "layoutMode": "VERTICAL", "itemSpacing": 16.0,
                            "absoluteBoundingBox": { "x": 0.0, "y": 0.0, "width": 360.0, "height": 200.0 },
                            "children": [
                                { "id": "1:2", "name": "Name Input", "type": "FRAME",
                                  "absoluteBoundingBox": { "x": 0.0, "y": 0.0, "width": 320.0, "height": 48.0 } },
                                { "id": "1:4", "name": "Email Input", "type": "FRAME",
                                  "absoluteBoundingBox": { "x": 0.0, "y": 64.0, "width": 320.0, "height": 48.0 } },
                                { "id": "1:5", "name": "Submit Button", "type": "FRAME",
                                  "absoluteBoundingBox": { "x": 0.0, "y": 128.0, "width": 320.0, "height": 40.0 },
                                  "children": [
                                      { "id": "1:6", "name": "Submit", "type": "TEXT", "characters": "Submit" }
                                  ] }
                            ]
                        },
                        {
                            "id": "9:1", "name": "Actions", "type": "FRAME",
                            "layoutMode": "HORIZONTAL", "itemSpacing": 20.0,
                            "absoluteBoundingBox": { "x": 0.0, "y": 700.0, "width": 440.0, "height": 48.0 },
                            "children": [
                                { "id": "2:1", "name": "Primary Button", "type": "FRAME",
                                  "absoluteBoundingBox": { "x": 0.0, "y": 700.0, "width": 120.0, "height": 40.0 },
                                  "fills": [ { "type": "SOLID", "color": { "r": 0.0, "g": 0.38823530077934265, "b": 0.6627451181411743, "a": 1.0 } } ],
                                  "children": [ { "id": "2:2", "name": "Save", "type": "TEXT", "characters": "Save" } ] },
                                { "id": "2:3", "name": "Primary Button", "type": "FRAME",
                                  "absoluteBoundingBox": { "x": 140.0, "y": 700.0, "width": 120.0, "height": 40.0 },
                                  "fills": [ { "type": "SOLID", "color": { "r": 0.0, "g": 0.38823530077934265, "b": 0.6627451181411743, "a": 1.0 } } ],
                                  "children": [ { "id": "2:4", "name": "Share", "type": "TEXT", "characters": "Share" } ] },
                                { "id": "2:5", "name": "Primary Button", "type": "FRAME",
                                  "absoluteBoundingBox": { "x": 280.0, "y": 700.0, "width": 120.0, "height": 40.0 },
                                  "fills": [ { "type": "SOLID", "color": { "r": 0.0, "g": 0.38823530077934265, "b": 0.6627451181411743, "a": 1.0 } } ],
                                  "children": [ { "id": "2:6", "name": "Delete", "type": "TEXT", "characters": "Delete" } ] }
                            ]
                        }
                    ]
                }
            }
        }
    })
    .to_string()
}

#[test]
fn signup_export_maps_to_components_tokens_and_structure() {
    let doc = parse_document(&signup_export()).expect("parse fixture");
    let result = run_pipeline(&doc, &Config::default()).expect("pipeline");

    // One recognized root: the canvas wrapped as a container.
    assert_eq!(result.components.len(), 1);
    let canvas = &result.components[0];
    assert_eq!(canvas.eds_component_type, EdsComponentType::Container);

    let form = &canvas.children[0];
    assert_eq!(form.eds_component_type, EdsComponentType::FormContainer);
    let child_types: Vec<_> = form
        .children
        .iter()
        .map(|c| c.eds_component_type)
        .collect();
    assert_eq!(
        child_types,
        vec![
            EdsComponentType::Input,
            EdsComponentType::Input,
            EdsComponentType::Button
        ]
    );

    let actions = &canvas.children[1];
    assert_eq!(actions.eds_component_type, EdsComponentType::Container);
    assert_eq!(actions.children.len(), 3);
    assert!(actions
        .children
        .iter()
        .all(|c| c.eds_component_type == EdsComponentType::Button));
    assert_eq!(
        actions.children[0].properties.get("variant").map(String::as_str),
        Some("primary")
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn repeated_button_fill_is_promoted_to_a_primary_color_token() {
    let doc = parse_document(&signup_export()).expect("parse fixture");
    let result = run_pipeline(&doc, &Config::default()).expect("pipeline");

    let primary = result
        .tokens
        .colors
        .iter()
        .find(|t| t.value == "#0063a9")
        .expect("promoted color token");
    assert_eq!(primary.name, "Primary");
    assert_eq!(primary.eds_variable, "--primary");

    // Fixed collections are emitted regardless of observations.
    assert_eq!(result.tokens.spacing.len(), 13);
    assert_eq!(result.tokens.shadows.len(), 5);
    assert_eq!(result.tokens.breakpoints.len(), 6);
}

#[test]
fn structure_covers_pages_layouts_and_form_patterns() {
    let doc = parse_document(&signup_export()).expect("parse fixture");
    let result = run_pipeline(&doc, &Config::default()).expect("pipeline");

    assert_eq!(result.layout.pages.len(), 1);
    let page = &result.layout.pages[0];
    assert_eq!(page.name, "Page 1");
    assert!(page.component_ids.contains(&"1:1".to_string()));
    assert!(page.component_ids.contains(&"2:5".to_string()));
    assert!(!page.component_ids.contains(&"0:1".to_string()));

    let kinds: Vec<_> = result.layout.layouts.iter().map(|l| l.kind).collect();
    assert!(kinds.contains(&LayoutKind::Column));
    assert!(kinds.contains(&LayoutKind::Row));
    let column = result
        .layout
        .layouts
        .iter()
        .find(|l| l.kind == LayoutKind::Column)
        .unwrap();
    assert_eq!(column.gap, Some(16.0));

    // Two vertical clusters of form controls, far enough apart to split.
    assert_eq!(result.layout.patterns.len(), 2);
    assert_eq!(result.layout.patterns[0].component_ids, vec!["1:2", "1:4", "1:5"]);
    assert_eq!(result.layout.patterns[1].component_ids, vec!["2:1", "2:3", "2:5"]);
}

#[test]
fn depth_limit_aborts_classification_with_complexity_error() {
    let doc = parse_document(&signup_export()).expect("parse fixture");
    let config = Config {
        max_depth: 1,
        ..Config::default()
    };
    let err = run_pipeline(&doc, &config).unwrap_err();
    assert!(matches!(err, EdsmapError::TooComplex(_)));
    assert_eq!(err.stage(), Some("classification"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let doc = parse_document(&signup_export()).expect("parse fixture");
    let config = Config::default();
    let a = serde_json::to_string(&run_pipeline(&doc, &config).unwrap()).unwrap();
    let b = serde_json::to_string(&run_pipeline(&doc, &config).unwrap()).unwrap();
    assert_eq!(a, b);
}
