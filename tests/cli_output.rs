use std::process::Command;

use serde_json::json;
use tempfile::TempDir;

fn write_export(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("design.json");
    let body = json!({
        "name": "Checkout",
        "nodes": {
            "0:1": {
                "document": {
                    "id": "0:1", "name": "Page 1", "type": "CANVAS",
                    "children": [
                        {
                            "id": "1:1", "name": "Login Form", "type": "FRAME",
                            "layoutMode": "VERTICAL", "itemSpacing": 16.0,
                            "children": [
                                { "id": "1:2", "name": "Email Input", "type": "FRAME",
                                  "absoluteBoundingBox": { "x": 0.0, "y": 0.0, "width": 320.0, "height": 48.0 } },
                                { "id": "1:3", "name": "Submit Button", "type": "FRAME",
                                  "absoluteBoundingBox": { "x": 0.0, "y": 64.0, "width": 320.0, "height": 40.0 },
                                  "children": [
                                      { "id": "1:4", "name": "Submit", "type": "TEXT", "characters": "Submit" }
                                  ] }
                            ]
                        }
                    ]
                }
            }
        }
    });
    std::fs::write(&path, body.to_string()).expect("write fixture");
    path
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_edsmap"))
        .args(args)
        .output()
        .expect("run edsmap")
}

fn parse_stdout(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout should be JSON")
}

#[test]
fn map_emits_versioned_json_and_exits_zero() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_export(&dir);

    let output = run(&["map", input.to_str().unwrap(), "--format", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let body = parse_stdout(&output.stdout);
    assert_eq!(body.get("mode").and_then(|v| v.as_str()), Some("map"));
    assert_eq!(body.get("version").and_then(|v| v.as_str()), Some("0.1.0"));
    assert_eq!(
        body.get("document").and_then(|v| v.as_str()),
        Some("Checkout")
    );
    let components = body
        .get("components")
        .and_then(|v| v.as_array())
        .expect("components array");
    assert!(!components.is_empty());
    assert_eq!(
        body["tokens"]["breakpoints"].as_array().map(|a| a.len()),
        Some(6),
        "tokens should carry the fixed breakpoint set, got {body}"
    );
    assert!(
        body.get("pages").and_then(|v| v.as_array()).is_some(),
        "structure should be flattened into the envelope, got {body}"
    );
}

#[test]
fn classify_emits_component_tree_only() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_export(&dir);

    let output = run(&["classify", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let body = parse_stdout(&output.stdout);
    assert_eq!(body.get("mode").and_then(|v| v.as_str()), Some("classify"));
    let form = &body["components"][0]["children"][0];
    assert_eq!(
        form.get("edsComponentType").and_then(|v| v.as_str()),
        Some("SignInForm"),
        "expected recognized form, got {form}"
    );
    assert!(body.get("tokens").is_none());
}

#[test]
fn tokens_emits_fixed_collections() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_export(&dir);

    let output = run(&["tokens", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let body = parse_stdout(&output.stdout);
    assert_eq!(body.get("mode").and_then(|v| v.as_str()), Some("tokens"));
    let tokens = body.get("tokens").expect("tokens object");
    assert_eq!(tokens["spacing"].as_array().map(|a| a.len()), Some(13));
    assert_eq!(tokens["shadows"].as_array().map(|a| a.len()), Some(5));
    assert_eq!(tokens["breakpoints"].as_array().map(|a| a.len()), Some(6));
    assert!(body.get("components").is_none());
}

#[test]
fn pretty_format_stays_json_when_piped() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_export(&dir);

    let output = run(&["map", input.to_str().unwrap(), "--format", "pretty"]);
    assert_eq!(output.status.code(), Some(0));

    let body = parse_stdout(&output.stdout);
    assert_eq!(body.get("mode").and_then(|v| v.as_str()), Some("map"));
}

#[test]
fn output_flag_writes_file_and_keeps_stdout_empty() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_export(&dir);
    let out_path = dir.path().join("mapped.json");

    let output = run(&[
        "map",
        input.to_str().unwrap(),
        "--output",
        out_path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty(), "stdout should stay empty");

    let content = std::fs::read_to_string(&out_path).expect("read output file");
    let body: serde_json::Value = serde_json::from_str(&content).expect("file should be JSON");
    assert_eq!(body.get("mode").and_then(|v| v.as_str()), Some("map"));
}

#[test]
fn missing_input_exits_fatal_with_error_payload() {
    let output = run(&["map", "/nonexistent/design.json", "--format", "json"]);
    assert_eq!(output.status.code(), Some(2));

    let body = parse_stdout(&output.stdout);
    assert_eq!(body.get("mode").and_then(|v| v.as_str()), Some("error"));
    let message = body["error"]["message"].as_str().unwrap_or_default();
    assert!(
        message.contains("not found"),
        "expected missing-file message, got: {message}"
    );
}

#[test]
fn invalid_json_reports_validation_category() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("broken.json");
    std::fs::write(&input, "not a design export").expect("write fixture");

    let output = run(&["map", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));

    let body = parse_stdout(&output.stdout);
    assert_eq!(body.get("mode").and_then(|v| v.as_str()), Some("error"));
    assert_eq!(
        body["error"]["category"].as_str(),
        Some("validation"),
        "got {body}"
    );
}

#[test]
fn config_file_lowers_depth_limit_and_labels_the_stage() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_export(&dir);
    let cfg_path = dir.path().join("edsmap.toml");
    std::fs::write(&cfg_path, "max_depth = 1\n").expect("write config");

    let output = run(&[
        "map",
        input.to_str().unwrap(),
        "--config",
        cfg_path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));

    let body = parse_stdout(&output.stdout);
    assert_eq!(body.get("mode").and_then(|v| v.as_str()), Some("error"));
    assert_eq!(
        body.get("stage").and_then(|v| v.as_str()),
        Some("classification")
    );
    let message = body["error"]["message"].as_str().unwrap_or_default();
    assert!(
        message.contains("max depth"),
        "expected depth message, got: {message}"
    );
}

#[test]
fn invalid_config_value_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_export(&dir);
    let cfg_path = dir.path().join("edsmap.toml");
    std::fs::write(&cfg_path, "max_depth = 0\n").expect("write config");

    let output = run(&[
        "map",
        input.to_str().unwrap(),
        "--config",
        cfg_path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));

    let body = parse_stdout(&output.stdout);
    assert_eq!(body["error"]["category"].as_str(), Some("config"));
}
