//! Light/dark/other mode classification.
//!
//! Partitions a variable's resolved per-mode values into exactly one light
//! bucket, exactly one dark bucket, and zero or more "other" buckets. The
//! heuristic is a substring match on mode names; when several modes match,
//! the first wins (documented, order-preserving tie-break). A variable whose
//! modes cannot produce both required buckets fails classification eagerly
//! instead of deferring to a crash at access time.

use crate::compiler::error::CompileError;
use crate::compiler::resolver::ModeValue;

/// The classified buckets for one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeBuckets {
    /// Value for the light bucket
    pub light: String,
    /// Value for the dark bucket
    pub dark: String,
    /// Remaining `(mode name, value)` pairs, in original mode order
    pub others: Vec<ModeValue>,
}

/// Classifies resolved mode values for the variable named by `key`.
///
/// Light bucket: first entry whose name case-insensitively contains
/// "light"; if none, first entry whose name does NOT contain "dark".
/// Dark bucket: first entry whose name contains "dark". Entries chosen for
/// either bucket are excluded from "other" buckets by identity (index), not
/// by name, so a mode matching both heuristics is consumed once.
///
/// # Errors
///
/// Returns [`CompileError::ModeClassification`] when no entry can serve as
/// the light or the dark bucket.
pub fn classify(key: &str, values: &[ModeValue]) -> Result<ModeBuckets, CompileError> {
    let contains = |name: &str, needle: &str| name.to_lowercase().contains(needle);

    let light_index = values
        .iter()
        .position(|entry| contains(&entry.mode_name, "light"))
        .or_else(|| {
            values
                .iter()
                .position(|entry| !contains(&entry.mode_name, "dark"))
        })
        .ok_or_else(|| CompileError::ModeClassification {
            key: key.to_string(),
            reason: "no mode can serve as the light bucket (every mode name contains \"dark\")"
                .to_string(),
        })?;

    let dark_index = values
        .iter()
        .position(|entry| contains(&entry.mode_name, "dark"))
        .ok_or_else(|| CompileError::ModeClassification {
            key: key.to_string(),
            reason: "no mode name contains \"dark\"".to_string(),
        })?;

    let others = values
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != light_index && *index != dark_index)
        .map(|(_, entry)| entry.clone())
        .collect();

    Ok(ModeBuckets {
        light: values[light_index].value.clone(),
        dark: values[dark_index].value.clone(),
        others,
    })
}
