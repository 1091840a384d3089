//! The compilation pipeline.
//!
//! Pure, synchronous, single-threaded: a snapshot of variables plus settings
//! in, two stamped artifacts out. The stages run in dependency order —
//! ingestion/ordering, alias resolution, mode classification, then CSS and
//! theme-module emission independently, and finally checksum stamping. The
//! engine holds no state between invocations, so concurrent callers just
//! supply their own snapshots.
//!
//! Artifacts are all-or-nothing: any stage error aborts the pair.

pub mod checksum;
pub mod css;
pub mod error;
pub mod modes;
pub mod ordering;
pub mod resolver;
pub mod theme;

pub use checksum::{crc32, stamp};
pub use css::{emit_stylesheet, sanitize_class_name};
pub use error::CompileError;
pub use modes::{classify, ModeBuckets};
pub use ordering::ColorSet;
pub use resolver::{css_var_name, resolve_variable, ModeValue};
pub use theme::{build_theme_tree, emit_theme_module, is_valid_js_identifier, ThemeNode};

use crate::models::{Settings, Variable};

/// One color variable after resolution and classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColorEntry {
    /// Original slash-delimited token path
    pub key: String,
    /// Derived CSS custom-property name
    pub var_key: String,
    /// Resolved value for the light bucket
    pub light_value: String,
    /// Resolved value for the dark bucket
    pub dark_value: String,
    /// Remaining `(mode name, value)` pairs, in mode order
    pub other_values_by_mode: Vec<ModeValue>,
}

/// The compiled artifact pair. Both strings are UTF-8 and begin with a
/// checksum comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledArtifacts {
    /// The CSS stylesheet
    pub generated_css: String,
    /// The Tailwind theme-extension module
    pub generated_tailwind: String,
}

/// Compiles a variable snapshot into the stamped artifact pair.
///
/// The input is not mutated and may arrive in any order; ingestion
/// normalizes it. An empty snapshot (or one with no color variables) yields
/// empty artifacts carrying the zero checksum.
///
/// # Errors
///
/// Returns the first [`CompileError`] any stage raises; no partial output is
/// produced.
pub fn compile(
    variables: &[Variable],
    settings: &Settings,
) -> Result<CompiledArtifacts, CompileError> {
    let set = ColorSet::from_snapshot(variables);

    let mut entries = Vec::with_capacity(set.len());
    for variable in &set {
        let values = resolver::resolve_variable(variable, &set, settings)?;
        let buckets = modes::classify(&variable.key, &values)?;
        entries.push(ResolvedColorEntry {
            key: variable.key.clone(),
            var_key: resolver::css_var_name(
                &variable.key,
                &variable.collection_name,
                settings.prefix_with_collection_name,
            ),
            light_value: buckets.light,
            dark_value: buckets.dark,
            other_values_by_mode: buckets.others,
        });
    }

    let generated_css = if entries.is_empty() {
        String::new()
    } else {
        css::emit_stylesheet(&entries, settings)
    };
    let generated_tailwind = if entries.is_empty() {
        String::new()
    } else {
        theme::emit_theme_module(&entries)?
    };

    Ok(CompiledArtifacts {
        generated_css: checksum::stamp(&generated_css),
        generated_tailwind: checksum::stamp(&generated_tailwind),
    })
}
