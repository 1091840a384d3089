//! Alias resolution and custom-property name derivation.
//!
//! Turns each variable's per-mode raw values into CSS text: direct colors go
//! through the configured notation, aliases become `var(--...)` references to
//! the target's derived name. An alias whose target is missing from the
//! ingested color set aborts the compilation; it never degrades into a
//! literal "undefined".

use crate::compiler::error::CompileError;
use crate::compiler::ordering::ColorSet;
use crate::models::{RawValue, Settings, Variable};

/// A resolved value for one mode of one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeValue {
    /// Display name of the mode the value belongs to
    pub mode_name: String,
    /// CSS text: a color literal or a `var(--...)` reference
    pub value: String,
}

/// Derives the CSS custom-property name for a token path.
///
/// Pure in `(key, collection_name, prefix)`: the result never depends on
/// computed values, so it is stable under value changes.
///
/// # Examples
///
/// ```
/// use tokensmith::compiler::css_var_name;
///
/// assert_eq!(css_var_name("colors/bg", "Theme", false), "--colors-bg");
/// assert_eq!(css_var_name("colors/bg", "Theme", true), "--Theme-colors-bg");
/// ```
#[must_use]
pub fn css_var_name(key: &str, collection_name: &str, prefix_with_collection_name: bool) -> String {
    let path = key.replace('/', "-");
    if prefix_with_collection_name {
        format!("--{collection_name}-{path}")
    } else {
        format!("--{path}")
    }
}

/// Resolves every mode value of `variable` against the ordered color set.
///
/// Modes are walked in collection order; a mode listed without a recorded
/// value is skipped. Both union variants are handled explicitly.
///
/// # Errors
///
/// Returns [`CompileError::AliasResolution`] when an alias target is not in
/// the color set.
pub fn resolve_variable(
    variable: &Variable,
    set: &ColorSet,
    settings: &Settings,
) -> Result<Vec<ModeValue>, CompileError> {
    let mut resolved = Vec::with_capacity(variable.modes.len());

    for mode in &variable.modes {
        let Some(raw) = variable.values_by_mode.get(&mode.mode_id) else {
            continue;
        };

        let value = match raw {
            RawValue::Alias(alias) => {
                let target =
                    set.get_by_id(&alias.id)
                        .ok_or_else(|| CompileError::AliasResolution {
                            id: alias.id.clone(),
                            referenced_by: variable.key.clone(),
                        })?;
                format!(
                    "var({})",
                    css_var_name(
                        &target.key,
                        &target.collection_name,
                        settings.prefix_with_collection_name
                    )
                )
            }
            RawValue::Color(color) => color.to_css(settings.color_format),
        };

        resolved.push(ModeValue {
            mode_name: mode.name.clone(),
            value,
        });
    }

    Ok(resolved)
}
