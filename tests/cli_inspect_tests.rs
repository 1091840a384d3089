//! End-to-end tests for `tokensmith inspect`.

use std::process::Command;

mod fixtures;

use fixtures::*;
use tokensmith::models::{ColorValue, VariableKind};

/// Path to the tokensmith binary
fn tokensmith_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tokensmith")
}

#[test]
fn test_inspect_lists_color_variables_in_order() {
    let snapshot = vec![
        color_variable(
            "colors/fg",
            "id:fg",
            ColorValue::opaque(0.0, 0.0, 0.0),
            ColorValue::opaque(1.0, 1.0, 1.0),
        ),
        color_variable(
            "colors/bg",
            "id:bg",
            ColorValue::opaque(1.0, 1.0, 1.0),
            ColorValue::opaque(0.0, 0.0, 0.0),
        ),
    ];
    let (snapshot_path, _snapshot_temp) = write_snapshot(&snapshot);

    let output = Command::new(tokensmith_bin())
        .args(["inspect", "--variables", snapshot_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 color variable(s)"));

    // Keys are listed sorted within the collection.
    let bg_at = stdout.find("colors/bg").unwrap();
    let fg_at = stdout.find("colors/fg").unwrap();
    assert!(bg_at < fg_at, "stdout: {stdout}");
    assert!(stdout.contains("Light: #ffffffff"));
}

#[test]
fn test_inspect_marks_aliases_and_skips_non_colors() {
    let mut snapshot = vec![
        color_variable(
            "colors/base",
            "id:base",
            ColorValue::opaque(0.5, 0.5, 0.5),
            ColorValue::opaque(0.5, 0.5, 0.5),
        ),
        alias_variable("colors/accent", "id:accent", "id:base"),
    ];
    let mut spacing = color_variable(
        "spacing/md",
        "id:spacing",
        ColorValue::opaque(0.0, 0.0, 0.0),
        ColorValue::opaque(0.0, 0.0, 0.0),
    );
    spacing.kind = VariableKind::Other;
    snapshot.push(spacing);

    let (snapshot_path, _snapshot_temp) = write_snapshot(&snapshot);

    let output = Command::new(tokensmith_bin())
        .args(["inspect", "--variables", snapshot_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("2 color variable(s)"));
    assert!(stdout.contains("alias -> id:base"));
    assert!(!stdout.contains("spacing/md"));
}
