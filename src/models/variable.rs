//! Design-token variable snapshot model.
//!
//! Mirrors the flattened shape the host design tool exports: one record per
//! variable, carrying its collection, its modes, and one raw value per mode.

use crate::models::ColorValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named variant axis within a collection (e.g. "Light", "Dark").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    /// Opaque host-side mode identifier
    pub mode_id: String,
    /// Display name; drives light/dark classification
    pub name: String,
}

/// Resolved type of a variable. Only color variables are compiled; all other
/// kinds are discarded during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableKind {
    /// A color token
    #[serde(rename = "COLOR")]
    Color,
    /// Any non-color kind (float, string, boolean, ...)
    #[serde(other)]
    Other,
}

/// Marker tag carried by alias values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliasMarker {
    /// The only tag the host emits for aliases
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}

/// An indirection to another variable rather than a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    /// Wire tag (`"VARIABLE_ALIAS"`)
    #[serde(rename = "type")]
    pub marker: AliasMarker,
    /// Target variable id
    pub id: String,
}

impl VariableAlias {
    /// Creates an alias pointing at the given variable id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            marker: AliasMarker::VariableAlias,
            id: id.into(),
        }
    }
}

/// A per-mode raw value: either a direct color or an alias to another
/// variable. Deserialization distinguishes the variants by shape (aliases
/// carry the `VARIABLE_ALIAS` tag and an `id`), and all consumers match the
/// union exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Reference to another variable
    Alias(VariableAlias),
    /// Direct color literal
    Color(ColorValue),
}

/// A design-token variable as exported by the host, flattened across
/// collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Slash-delimited token path (e.g. `colors/bg`)
    pub key: String,
    /// Opaque host-side variable id; alias targets resolve against this
    pub variable_id: String,
    /// Resolved variable type
    #[serde(rename = "type")]
    pub kind: VariableKind,
    /// Name of the owning collection
    pub collection_name: String,
    /// Opaque id of the owning collection
    pub collection_id: String,
    /// Raw value per mode id
    pub values_by_mode: HashMap<String, RawValue>,
    /// Modes of the owning collection, in collection order
    pub modes: Vec<Mode>,
}
