//! End-to-end tests for `rescode calc`.

mod fixtures;

use fixtures::*;

#[test]
fn test_calc_four_band_plain() {
    let output = run(&["calc", "brown", "black", "red", "gold"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Should calculate successfully. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bands:      brown black red gold (4-band)"));
    assert!(stdout.contains("Resistance: 1 kΩ"));
    assert!(stdout.contains("Tolerance:  ± 5%"));
}

#[test]
fn test_calc_four_band_json() {
    let output = run(&["calc", "brown", "black", "red", "gold", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["mode"], "four-band");
    assert_eq!(result["significand"], 10);
    assert_eq!(result["resistance"], 1000.0);
    assert_eq!(result["formatted"], "1 kΩ");
    assert_eq!(result["tolerance"], 5.0);
    assert_eq!(result["tolerance_display"], "± 5%");

    let bands = result["bands"].as_array().expect("bands should be an array");
    assert_eq!(bands.len(), 4);
    assert_eq!(bands[0]["position"], 1);
    assert_eq!(bands[0]["role"], "digit");
    assert_eq!(bands[0]["color"], "brown");
    assert_eq!(bands[2]["role"], "multiplier");
    assert_eq!(bands[3]["role"], "tolerance");
}

#[test]
fn test_calc_five_band_json() {
    let output = run(&["calc", "brown", "black", "black", "red", "gold", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["mode"], "five-band");
    assert_eq!(result["significand"], 100);
    assert_eq!(result["formatted"], "10 kΩ");
    assert_eq!(result["tolerance_display"], "± 5%");
}

#[test]
fn test_calc_fractional_multiplier() {
    let output = run(&["calc", "red", "red", "gold", "silver", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["significand"], 22);
    assert_eq!(result["formatted"], "2.20 Ω");
    assert_eq!(result["tolerance_display"], "± 10%");
}

#[test]
fn test_calc_accepts_mixed_case_and_gray() {
    let output = run(&["calc", "Gray", "RED", "brown", "Brown", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["bands"][0]["color"], "grey");
    assert_eq!(result["formatted"], "820 Ω");
    assert_eq!(result["tolerance_display"], "± 1%");
}

#[test]
fn test_calc_gold_digit_rejected() {
    let output = run(&["calc", "gold", "black", "red", "gold"]);

    assert_eq!(output.status.code(), Some(1), "Gold digit should fail validation");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("band 1 (digit) cannot be gold"), "stderr: {stderr}");
    assert!(stderr.contains("valid digit colors: black, brown"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_calc_illegal_tolerance_rejected() {
    let output = run(&["calc", "brown", "black", "red", "orange"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("band 4 (tolerance) cannot be orange"));
}

#[test]
fn test_calc_unknown_color() {
    let output = run(&["calc", "brown", "teal", "red", "gold"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown color 'teal'"));
}

#[test]
fn test_calc_wrong_band_count() {
    let output = run(&["calc", "brown", "black", "red"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected 4 or 5 bands, got 3"));
}

#[test]
fn test_calc_requires_bands() {
    let output = run(&["calc"]);
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_calc_visual() {
    let output = run(&["calc", "yellow", "violet", "orange", "gold", "--visual"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("━━━"));
    assert!(stdout.contains("Resistance: 47 kΩ"));
}
