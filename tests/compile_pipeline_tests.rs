//! Integration tests for the full compilation pipeline.

mod fixtures;

use fixtures::*;
use tokensmith::compiler::{self, crc32, CompileError};
use tokensmith::models::{ColorFormat, ColorValue, DarkModeMethod, Settings};

#[test]
fn test_pipeline_light_dark_output() {
    let variables = vec![
        color_variable(
            "colors/bg",
            "id:bg",
            ColorValue::opaque(1.0, 1.0, 1.0),
            ColorValue::opaque(0.0, 0.0, 0.0),
        ),
        color_variable(
            "colors/fg",
            "id:fg",
            ColorValue::opaque(0.0, 0.0, 0.0),
            ColorValue::opaque(1.0, 1.0, 1.0),
        ),
    ];

    let artifacts = compiler::compile(&variables, &Settings::default()).unwrap();

    let expected_body = ":root {\n\
                         \t--colors-bg: light-dark(#ffffffff, #000000ff);\n\
                         \t--colors-fg: light-dark(#000000ff, #ffffffff);\n\
                         }\n";
    let body = artifacts
        .generated_css
        .split_once('\n')
        .map(|(_, rest)| rest)
        .unwrap();
    assert_eq!(body, expected_body);
}

#[test]
fn test_pipeline_is_permutation_invariant() {
    let a = color_variable(
        "colors/bg",
        "id:bg",
        ColorValue::opaque(1.0, 1.0, 1.0),
        ColorValue::opaque(0.0, 0.0, 0.0),
    );
    let b = color_variable(
        "colors/fg",
        "id:fg",
        ColorValue::opaque(0.2, 0.2, 0.2),
        ColorValue::opaque(0.8, 0.8, 0.8),
    );

    let forward = compiler::compile(&[a.clone(), b.clone()], &Settings::default()).unwrap();
    let reversed = compiler::compile(&[b, a], &Settings::default()).unwrap();
    assert_eq!(forward, reversed);
}

#[test]
fn test_pipeline_orders_by_collection_then_key() {
    let mut zebra = color_variable(
        "zebra",
        "id:zebra",
        ColorValue::opaque(0.5, 0.5, 0.5),
        ColorValue::opaque(0.5, 0.5, 0.5),
    );
    zebra.collection_name = "Alpha".to_string();
    let apple = color_variable(
        "apple",
        "id:apple",
        ColorValue::opaque(0.5, 0.5, 0.5),
        ColorValue::opaque(0.5, 0.5, 0.5),
    );

    let artifacts = compiler::compile(&[apple, zebra], &Settings::default()).unwrap();

    // "Alpha" collection sorts before the fixtures' "Theme" collection.
    let zebra_at = artifacts.generated_css.find("--zebra").unwrap();
    let apple_at = artifacts.generated_css.find("--apple").unwrap();
    assert!(zebra_at < apple_at);
}

#[test]
fn test_pipeline_resolves_aliases_to_var_references() {
    let base = color_variable(
        "colors/base",
        "id:base",
        ColorValue::opaque(1.0, 0.0, 0.0),
        ColorValue::opaque(0.0, 1.0, 0.0),
    );
    let accent = alias_variable("colors/accent", "id:accent", "id:base");

    let artifacts = compiler::compile(&[base, accent], &Settings::default()).unwrap();
    assert!(artifacts
        .generated_css
        .contains("--colors-accent: light-dark(var(--colors-base), var(--colors-base));"));
}

#[test]
fn test_pipeline_dangling_alias_aborts() {
    let accent = alias_variable("colors/accent", "id:accent", "id:missing");

    let err = compiler::compile(&[accent], &Settings::default()).unwrap_err();
    match err {
        CompileError::AliasResolution { id, referenced_by } => {
            assert_eq!(id, "id:missing");
            assert_eq!(referenced_by, "colors/accent");
        }
        other => panic!("expected AliasResolution, got {other}"),
    }
}

#[test]
fn test_pipeline_selector_strategy() {
    let variables = vec![color_variable(
        "colors/bg",
        "id:bg",
        ColorValue::opaque(1.0, 1.0, 1.0),
        ColorValue::opaque(0.0, 0.0, 0.0),
    )];
    let settings = Settings {
        dark_mode_method: DarkModeMethod::Selector,
        dark_mode_css_selector: ".theme-dark".to_string(),
        ..Settings::default()
    };

    let artifacts = compiler::compile(&variables, &settings).unwrap();
    assert!(artifacts
        .generated_css
        .contains(".theme-dark {\n\t--colors-bg: #000000ff;\n}\n"));
    assert!(artifacts
        .generated_css
        .contains(":root {\n\t--colors-bg: #ffffffff;\n}\n"));
}

#[test]
fn test_pipeline_extra_modes_get_class_blocks() {
    let mut variable = color_variable(
        "colors/bg",
        "id:bg",
        ColorValue::opaque(1.0, 1.0, 1.0),
        ColorValue::opaque(0.0, 0.0, 0.0),
    );
    add_extra_mode(
        &mut variable,
        "mode:hc",
        "High Contrast",
        ColorValue::opaque(1.0, 1.0, 0.0),
    );

    let artifacts = compiler::compile(&[variable], &Settings::default()).unwrap();
    assert!(artifacts
        .generated_css
        .contains("html.high__contrast {\n\t--colors-bg: #ffff00ff;\n}\n"));
}

#[test]
fn test_pipeline_collection_prefix() {
    let variables = vec![color_variable(
        "colors/bg",
        "id:bg",
        ColorValue::opaque(1.0, 1.0, 1.0),
        ColorValue::opaque(0.0, 0.0, 0.0),
    )];
    let settings = Settings {
        prefix_with_collection_name: true,
        ..Settings::default()
    };

    let artifacts = compiler::compile(&variables, &settings).unwrap();
    assert!(artifacts.generated_css.contains("--Theme-colors-bg:"));
    assert!(artifacts
        .generated_tailwind
        .contains("bg: \"var(--Theme-colors-bg)\""));
}

#[test]
fn test_pipeline_rgb_color_format() {
    let variables = vec![color_variable(
        "colors/bg",
        "id:bg",
        ColorValue::opaque(1.0, 0.0, 0.0),
        ColorValue::opaque(0.0, 0.0, 1.0),
    )];
    let settings = Settings {
        color_format: ColorFormat::Rgb,
        ..Settings::default()
    };

    let artifacts = compiler::compile(&variables, &settings).unwrap();
    assert!(artifacts
        .generated_css
        .contains("--colors-bg: light-dark(rgb(255, 0, 0), rgb(0, 0, 255));"));
}

#[test]
fn test_pipeline_tailwind_module_shape() {
    let variables = vec![
        color_variable(
            "colors/bg",
            "id:bg",
            ColorValue::opaque(1.0, 1.0, 1.0),
            ColorValue::opaque(0.0, 0.0, 0.0),
        ),
        color_variable(
            "colors/brand-primary",
            "id:brand",
            ColorValue::opaque(0.5, 0.0, 0.5),
            ColorValue::opaque(0.5, 0.0, 0.5),
        ),
    ];

    let artifacts = compiler::compile(&variables, &Settings::default()).unwrap();
    let module = &artifacts.generated_tailwind;

    assert!(module.contains("export default {"));
    assert!(module.contains("bg: \"var(--colors-bg)\""));
    assert!(module.contains("\"brand-primary\": \"var(--colors-brand-primary)\""));
}

#[test]
fn test_pipeline_checksum_recomputes_from_body() {
    let variables = vec![color_variable(
        "colors/bg",
        "id:bg",
        ColorValue::opaque(1.0, 1.0, 1.0),
        ColorValue::opaque(0.0, 0.0, 0.0),
    )];
    let artifacts = compiler::compile(&variables, &Settings::default()).unwrap();

    for artifact in [&artifacts.generated_css, &artifacts.generated_tailwind] {
        let (comment, body) = artifact.split_once('\n').unwrap();
        let embedded: u32 = comment
            .trim_start_matches("/* crc32: ")
            .trim_end_matches(" */")
            .parse()
            .unwrap();
        assert_eq!(embedded, crc32(body.as_bytes()));
    }
}

#[test]
fn test_pipeline_non_color_variables_are_ignored() {
    let mut variable = color_variable(
        "spacing/md",
        "id:spacing",
        ColorValue::opaque(0.0, 0.0, 0.0),
        ColorValue::opaque(0.0, 0.0, 0.0),
    );
    variable.kind = tokensmith::models::VariableKind::Other;

    let artifacts = compiler::compile(&[variable], &Settings::default()).unwrap();
    assert_eq!(artifacts.generated_css, "/* crc32: 0 */\n");
    assert_eq!(artifacts.generated_tailwind, "/* crc32: 0 */\n");
}
