//! End-to-end tests for `rescode config` commands.

mod fixtures;

use fixtures::*;

#[test]
fn test_config_show_default() {
    let output = run(&["config", "show"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mode:       4-band"));
    assert!(stdout.contains("Bands:      brown black red gold"));
    assert!(stdout.contains("Theme:      auto"));
}

#[test]
fn test_config_show_json_schema() {
    let output = run(&["config", "show", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert!(result["path"].as_str().unwrap().ends_with("config.toml"));
    assert!(result["defaults"].is_object(), "Should have defaults object");
    assert!(result["ui"].is_object(), "Should have ui object");
    assert_eq!(result["defaults"]["formatted"], "1 kΩ");
    assert_eq!(result["defaults"]["tolerance"], "± 5%");
}

#[test]
fn test_config_show_reads_file() {
    let config_dir = temp_config_dir(
        r#"
[defaults]
mode = "five-band"
band1 = "red"
band2 = "violet"
band3 = "black"
multiplier = "black"
tolerance = "brown"

[ui]
theme_mode = "Light"
"#,
    );

    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["defaults"]["mode"], "5-band");
    assert_eq!(
        result["defaults"]["bands"],
        serde_json::json!(["red", "violet", "black", "black", "brown"])
    );
    assert_eq!(result["defaults"]["formatted"], "270 Ω");
    assert_eq!(result["defaults"]["tolerance"], "± 1%");
    assert_eq!(result["ui"]["theme"], "light");
}

#[test]
fn test_config_show_invalid_selection() {
    let config_dir = temp_config_dir("[defaults]\ntolerance = \"black\"\n");

    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a valid tolerance color"), "stderr: {stderr}");
}

#[test]
fn test_config_show_malformed_toml() {
    let config_dir = temp_config_dir("[defaults\nmode = ");

    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}
