//! End-to-end tests for `scalekeys show`, `root`, `scale` and `scales`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_defaults_to_c_major() {
    let sandbox = Sandbox::new();
    let output = run_cli(&sandbox, &["show", "--json"]);

    assert_eq!(output.status.code(), Some(0), "show should succeed");
    let json = stdout_json(&output);
    assert_eq!(json["root"], 0);
    assert_eq!(json["root_name"], "C");
    assert_eq!(json["scale"], "Major");
    assert_eq!(
        json["notes"],
        serde_json::json!(["C", "D", "E", "F", "G", "A", "B"])
    );
    assert!(!sandbox.settings_path().exists(), "show must not write settings");
}

#[test]
fn test_no_subcommand_shows_text() {
    let sandbox = Sandbox::new();
    sandbox.write_settings(2, "Dorian");
    let output = run_cli(&sandbox, &[]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Root:  D"), "stdout: {stdout}");
    assert!(stdout.contains("Scale: Dorian"), "stdout: {stdout}");
    assert!(stdout.contains("Notes: D E F G A B C"), "stdout: {stdout}");
}

#[test]
fn test_show_recovers_from_bad_settings() {
    let sandbox = Sandbox::new();
    sandbox.write_settings(4, "Nonsense");
    let output = run_cli(&sandbox, &["show", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["root"], 4);
    assert_eq!(json["scale"], "Major");
}

// ============================================================================
// Root Command Tests
// ============================================================================

#[test]
fn test_root_by_index_persists() {
    let sandbox = Sandbox::new();
    let output = run_cli(&sandbox, &["root", "11", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["root"], 11);
    assert_eq!(
        json["highlight"],
        serde_json::json!([
            false, true, false, true, true, false, true, false, true, false, true, true
        ])
    );
    assert_eq!(
        sandbox.read_settings(),
        serde_json::json!({ "root": 11, "scale": "Major" })
    );
}

#[test]
fn test_root_by_name() {
    let sandbox = Sandbox::new();
    let output = run_cli(&sandbox, &["root", "Eb", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["root"], 3);
    assert_eq!(sandbox.read_settings()["root"], 3);
}

#[test]
fn test_root_out_of_range_fails_validation() {
    let sandbox = Sandbox::new();
    sandbox.write_settings(5, "Lydian");

    for arg in ["12", "-1"] {
        let output = run_cli(&sandbox, &["root", arg]);
        assert_eq!(output.status.code(), Some(1), "root {arg} should fail");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("invalid root"), "stderr: {stderr}");
    }

    assert_eq!(
        sandbox.read_settings(),
        serde_json::json!({ "root": 5, "scale": "Lydian" })
    );
}

#[test]
fn test_root_unknown_name_fails_validation() {
    let sandbox = Sandbox::new();
    let output = run_cli(&sandbox, &["root", "H"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!sandbox.settings_path().exists());
}

// ============================================================================
// Scale Command Tests
// ============================================================================

#[test]
fn test_scale_blues() {
    let sandbox = Sandbox::new();
    let output = run_cli(&sandbox, &["scale", "Blues", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["scale"], "Blues");
    assert_eq!(json["highlight"], serde_json::json!(C_BLUES));
    assert_eq!(
        sandbox.read_settings(),
        serde_json::json!({ "root": 0, "scale": "Blues" })
    );
}

#[test]
fn test_scale_name_is_case_insensitive_and_stored_canonically() {
    let sandbox = Sandbox::new();
    let output = run_cli(&sandbox, &["scale", "harmonic minor"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(sandbox.read_settings()["scale"], "Harmonic Minor");
}

#[test]
fn test_scale_unknown_fails_validation() {
    let sandbox = Sandbox::new();
    let output = run_cli(&sandbox, &["scale", "Nonsense"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Nonsense"), "stderr: {stderr}");
    assert!(!sandbox.settings_path().exists());
}

#[test]
fn test_root_then_scale_accumulate() {
    let sandbox = Sandbox::new();
    assert_eq!(run_cli(&sandbox, &["root", "2"]).status.code(), Some(0));
    assert_eq!(run_cli(&sandbox, &["scale", "Dorian"]).status.code(), Some(0));

    let json = stdout_json(&run_cli(&sandbox, &["show", "--json"]));
    assert_eq!(json["root_name"], "D");
    assert_eq!(json["scale"], "Dorian");
}

// ============================================================================
// Scales Command Tests
// ============================================================================

#[test]
fn test_scales_json_lists_catalog_in_order() {
    let sandbox = Sandbox::new();
    let output = run_cli(&sandbox, &["scales", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    let scales = json.as_array().expect("should be an array");
    assert_eq!(scales.len(), 12);
    assert_eq!(scales[0]["name"], "Major");
    assert_eq!(scales[0]["offsets"], serde_json::json!([0, 2, 4, 5, 7, 9, 11]));
    assert_eq!(scales[11]["name"], "Chromatic");
    assert_eq!(scales[11]["offsets"].as_array().unwrap().len(), 12);
}

#[test]
fn test_scales_text() {
    let sandbox = Sandbox::new();
    let output = run_cli(&sandbox, &["scales"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 12);
    assert!(stdout.contains("Pentatonic Minor"));
}
