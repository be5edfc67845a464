//! End-to-end tests for `joymap star-citizen` command.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the joymap binary
fn joymap_bin() -> &'static str {
    env!("CARGO_BIN_EXE_joymap")
}

/// Runs joymap with an empty config file so the user's config is never read.
fn joymap(args: &[&str]) -> std::process::Output {
    let config_dir = tempfile::TempDir::new().unwrap();
    let config = config_dir.path().join("config.toml");
    Command::new(joymap_bin())
        .args(args)
        .arg("--config")
        .arg(&config)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_star_citizen_json_output() {
    let (path, _temp_dir) = create_temp_file("actionmaps.xml", ACTION_MAPS_XML);

    let output = joymap(&["star-citizen", "--file", path.to_str().unwrap(), "--json"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
            .expect("Should parse JSON output");

    let profiles = result["profiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0]["name"], "Default");

    let throttle = &profiles[0]["devices"][0];
    assert_eq!(throttle["name"], "Throttle");
    assert_eq!(throttle["guid"], THROTTLE_GUID);
    let button = throttle["inputs"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"] == "BUTTON_12")
        .unwrap();
    assert_eq!(button["action"], "Fire 2");
    assert!(button.get("modifiers").is_none());

    let diagnostics = result["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["severity"], "warning");
    assert_eq!(diagnostics[0]["kind"], "unknown_hat_direction");
}

#[test]
fn test_star_citizen_human_output() {
    let (path, _temp_dir) = create_temp_file("actionmaps.xml", ACTION_MAPS_XML);

    let output = joymap(&["star-citizen", "--file", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Default"));
    assert!(stdout.contains("Vector decoupling"));
    assert!(stdout.contains("Issues:"));
}

#[test]
fn test_star_citizen_wrong_extension() {
    let (path, _temp_dir) = create_temp_file("actionmaps.txt", ACTION_MAPS_XML);

    let output = joymap(&["star-citizen", "--file", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("XML"));
}

#[test]
fn test_star_citizen_invalid_document() {
    let (path, _temp_dir) = create_temp_file("actionmaps.xml", "<Profile/>");

    let output = joymap(&["star-citizen", "--file", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a valid Star Citizen XML"));
}

#[test]
fn test_star_citizen_without_file_is_validation_error() {
    let output = joymap(&["star-citizen"]);
    assert_eq!(output.status.code(), Some(1));
}
