//! Ingestion and ordering of the variable snapshot.
//!
//! Keeps only color-typed variables and establishes the deterministic total
//! order every later stage depends on: `(collection_name, key)`
//! lexicographically. The order affects alias-target lookup and byte-for-byte
//! output stability, so it must be identical across runs for the same input
//! set regardless of input permutation.

use crate::models::{Variable, VariableKind};
use std::collections::HashMap;

/// The ordered set of color variables a compilation works over, with an
/// id index for alias resolution.
#[derive(Debug, Clone)]
pub struct ColorSet {
    variables: Vec<Variable>,
    by_id: HashMap<String, usize>,
}

impl ColorSet {
    /// Builds the set from a raw snapshot: filters to color variables and
    /// sorts them. The input is not mutated; an empty snapshot is valid.
    #[must_use]
    pub fn from_snapshot(variables: &[Variable]) -> Self {
        let mut colors: Vec<Variable> = variables
            .iter()
            .filter(|v| v.kind == VariableKind::Color)
            .cloned()
            .collect();

        // Stable sort: pathological duplicate (collection, key) pairs keep
        // their relative input order.
        colors.sort_by(|a, b| {
            a.collection_name
                .cmp(&b.collection_name)
                .then_with(|| a.key.cmp(&b.key))
        });

        let mut by_id = HashMap::with_capacity(colors.len());
        for (index, variable) in colors.iter().enumerate() {
            // First entry wins for duplicate ids.
            by_id.entry(variable.variable_id.clone()).or_insert(index);
        }

        Self {
            variables: colors,
            by_id,
        }
    }

    /// Looks up a variable by its host-side id. Lookup is defined on
    /// `variable_id`, not sort position.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Variable> {
        self.by_id.get(id).map(|&index| &self.variables[index])
    }

    /// Iterates variables in compiled order.
    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }

    /// Number of color variables in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the set holds no color variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<'a> IntoIterator for &'a ColorSet {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
