//! CSS stylesheet emission.
//!
//! Renders the classified color entries with one of three mutually exclusive
//! strategies, keyed by the configured dark-mode method:
//!
//! - `light-dark`: a single `:root` scope where every declaration uses the
//!   two-argument `light-dark()` value function.
//! - `media`: a `:root` scope with light values, then a
//!   `@media (prefers-color-scheme: dark)` block overriding with dark values.
//! - `selector`: like `media`, but the override block is scoped under the
//!   configured selector instead of a media condition.
//!
//! After the light/dark pass, variables with extra modes contribute to one
//! class-scoped block per distinct other-mode name, grouped across variables
//! in first-encountered order.

use crate::compiler::ResolvedColorEntry;
use crate::models::{DarkModeMethod, Settings};

/// Renders the stylesheet for the given entries.
#[must_use]
pub fn emit_stylesheet(entries: &[ResolvedColorEntry], settings: &Settings) -> String {
    let mut output = String::new();

    match settings.dark_mode_method {
        DarkModeMethod::LightDark => {
            let declarations: Vec<String> = entries
                .iter()
                .map(|entry| {
                    format!(
                        "{}: light-dark({}, {});",
                        entry.var_key, entry.light_value, entry.dark_value
                    )
                })
                .collect();
            output.push_str(&block(":root", &declarations, 1));
        }
        DarkModeMethod::Media | DarkModeMethod::Selector => {
            let light: Vec<String> = entries
                .iter()
                .map(|entry| format!("{}: {};", entry.var_key, entry.light_value))
                .collect();
            let dark: Vec<String> = entries
                .iter()
                .map(|entry| format!("{}: {};", entry.var_key, entry.dark_value))
                .collect();

            output.push_str(&block(":root", &light, 1));
            output.push('\n');

            if settings.dark_mode_method == DarkModeMethod::Selector {
                output.push_str(&block(&settings.dark_mode_css_selector, &dark, 1));
            } else {
                let inner = block_indented(":root", &dark, 1);
                output.push_str("@media (prefers-color-scheme: dark) {\n");
                output.push_str(&inner);
                output.push_str("}\n");
            }
        }
    }

    for (mode_name, declarations) in group_other_modes(entries) {
        output.push('\n');
        let selector = format!("html.{}", sanitize_class_name(&mode_name));
        output.push_str(&block(&selector, &declarations, 1));
    }

    output
}

/// Groups `(var_key, value)` declarations of every "other" bucket by mode
/// name, preserving the order mode names are first encountered in.
fn group_other_modes(entries: &[ResolvedColorEntry]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for entry in entries {
        for mode_value in &entry.other_values_by_mode {
            let declaration = format!("{}: {};", entry.var_key, mode_value.value);
            match groups
                .iter_mut()
                .find(|(name, _)| *name == mode_value.mode_name)
            {
                Some((_, declarations)) => declarations.push(declaration),
                None => groups.push((mode_value.mode_name.clone(), vec![declaration])),
            }
        }
    }

    groups
}

/// Renders `selector { ...declarations... }` with declarations at the given
/// tab depth.
fn block(selector: &str, declarations: &[String], depth: usize) -> String {
    let indent = "\t".repeat(depth);
    format!(
        "{selector} {{\n{indent}{}\n}}\n",
        declarations.join(&format!("\n{indent}"))
    )
}

/// Like [`block`], but the whole rule sits one tab deep (for nesting inside
/// a media block).
fn block_indented(selector: &str, declarations: &[String], depth: usize) -> String {
    let outer = "\t".repeat(depth);
    let inner = "\t".repeat(depth + 1);
    format!(
        "{outer}{selector} {{\n{inner}{}\n{outer}}}\n",
        declarations.join(&format!("\n{inner}"))
    )
}

/// Converts an arbitrary mode name into a syntactically valid CSS class-name
/// fragment, injectable into an `html.<name>` selector.
///
/// The name is lower-cased, spaces become `__`, literal dots become an
/// escaped dot, and every other character outside the URI-component
/// unreserved set is backslash-escaped. Multi-byte characters are escaped
/// whole, so the result is round-trip safe for non-ASCII names.
///
/// # Examples
///
/// ```
/// use tokensmith::compiler::sanitize_class_name;
///
/// assert_eq!(sanitize_class_name("High Contrast"), "high__contrast");
/// assert_eq!(sanitize_class_name("v2.0"), "v2\\.0");
/// ```
#[must_use]
pub fn sanitize_class_name(name: &str) -> String {
    let mut output = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        match ch {
            '.' => output.push_str("\\."),
            ' ' => output.push_str("__"),
            c if is_unreserved(c) => output.push(c),
            c => {
                output.push('\\');
                output.push(c);
            }
        }
    }
    output
}

/// The URI-component unreserved set, minus the dot handled above.
const fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '!' | '~' | '*' | '\'' | '(' | ')')
}
