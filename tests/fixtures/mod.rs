//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tokensmith::models::{
    ColorValue, Mode, RawValue, Settings, Variable, VariableAlias, VariableKind,
};

/// Mode id used for the light bucket in fixture variables.
pub const LIGHT_MODE_ID: &str = "mode:light";
/// Mode id used for the dark bucket in fixture variables.
pub const DARK_MODE_ID: &str = "mode:dark";

/// The standard Light/Dark mode pair.
#[must_use]
pub fn light_dark_modes() -> Vec<Mode> {
    vec![
        Mode {
            mode_id: LIGHT_MODE_ID.to_string(),
            name: "Light".to_string(),
        },
        Mode {
            mode_id: DARK_MODE_ID.to_string(),
            name: "Dark".to_string(),
        },
    ]
}

/// Creates a color variable with literal light and dark values.
#[must_use]
pub fn color_variable(key: &str, id: &str, light: ColorValue, dark: ColorValue) -> Variable {
    let mut values_by_mode = HashMap::new();
    values_by_mode.insert(LIGHT_MODE_ID.to_string(), RawValue::Color(light));
    values_by_mode.insert(DARK_MODE_ID.to_string(), RawValue::Color(dark));

    Variable {
        key: key.to_string(),
        variable_id: id.to_string(),
        kind: VariableKind::Color,
        collection_name: "Theme".to_string(),
        collection_id: "collection:theme".to_string(),
        values_by_mode,
        modes: light_dark_modes(),
    }
}

/// Creates a color variable that aliases `target_id` in both modes.
#[must_use]
pub fn alias_variable(key: &str, id: &str, target_id: &str) -> Variable {
    let mut values_by_mode = HashMap::new();
    values_by_mode.insert(
        LIGHT_MODE_ID.to_string(),
        RawValue::Alias(VariableAlias::new(target_id)),
    );
    values_by_mode.insert(
        DARK_MODE_ID.to_string(),
        RawValue::Alias(VariableAlias::new(target_id)),
    );

    Variable {
        key: key.to_string(),
        variable_id: id.to_string(),
        kind: VariableKind::Color,
        collection_name: "Theme".to_string(),
        collection_id: "collection:theme".to_string(),
        values_by_mode,
        modes: light_dark_modes(),
    }
}

/// Adds an extra mode with a literal value to an existing variable.
pub fn add_extra_mode(variable: &mut Variable, mode_id: &str, mode_name: &str, value: ColorValue) {
    variable.modes.push(Mode {
        mode_id: mode_id.to_string(),
        name: mode_name.to_string(),
    });
    variable
        .values_by_mode
        .insert(mode_id.to_string(), RawValue::Color(value));
}

/// Writes a snapshot to a JSON file inside a fresh temp directory.
///
/// Returns the file path and the temp dir guard (keep it alive for the
/// duration of the test).
#[must_use]
pub fn write_snapshot(variables: &[Variable]) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("variables.json");
    let content = serde_json::to_string_pretty(variables).expect("Failed to serialize snapshot");
    fs::write(&path, content).expect("Failed to write snapshot file");
    (path, temp_dir)
}

/// Writes a settings object to a JSON file inside a fresh temp directory.
#[must_use]
pub fn write_settings(settings: &Settings) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings.json");
    let content = serde_json::to_string_pretty(settings).expect("Failed to serialize settings");
    fs::write(&path, content).expect("Failed to write settings file");
    (path, temp_dir)
}
