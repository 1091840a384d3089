//! Theme-extension module generation.
//!
//! Folds slash-delimited token paths into a nested object and serializes it
//! as a Tailwind config module. Keys are emitted bare when they pass a
//! static JavaScript identifier check and JSON-quoted otherwise; the check
//! is purely syntactic, never executed against untrusted input.

use crate::compiler::error::CompileError;
use crate::compiler::ResolvedColorEntry;

/// A node in the nested theme object. Branches preserve insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeNode {
    /// A CSS variable reference string
    Leaf(String),
    /// An intermediate mapping, ordered by first use
    Branch(Vec<(String, ThemeNode)>),
}

/// Renders the full theme-extension module for the given entries.
///
/// # Errors
///
/// Returns [`CompileError::Serialization`] when a token path uses the same
/// segment both as a group and as a leaf (e.g. `colors/bg` next to
/// `colors/bg/muted`).
pub fn emit_theme_module(entries: &[ResolvedColorEntry]) -> Result<String, CompileError> {
    let tree = build_theme_tree(entries)?;
    let colors = stringify(&tree, 3);

    Ok(format!(
        "export default {{\n\
         \t// ...\n\
         \ttheme: {{\n\
         \t\t// ...\n\
         \t\textend: {{\n\
         \t\t\t// ...\n\
         \t\t\tcolors: {colors},\n\
         \t\t\t// ...\n\
         \t\t}},\n\
         \t\t// ...\n\
         \t}},\n\
         \t// ...\n\
         }}\n"
    ))
}

/// Folds every entry's token path into the nested theme tree. Intermediate
/// nodes are created on first use and reused on collision; each leaf holds a
/// `var(...)` reference to the entry's custom property.
pub fn build_theme_tree(entries: &[ResolvedColorEntry]) -> Result<ThemeNode, CompileError> {
    let mut root: Vec<(String, ThemeNode)> = Vec::new();

    for entry in entries {
        let segments: Vec<&str> = entry.key.split('/').collect();
        let leaf = format!("var({})", entry.var_key);
        insert(&mut root, &segments, leaf, &entry.key)?;
    }

    Ok(ThemeNode::Branch(root))
}

fn insert(
    children: &mut Vec<(String, ThemeNode)>,
    segments: &[&str],
    leaf: String,
    full_key: &str,
) -> Result<(), CompileError> {
    let (head, rest) = segments
        .split_first()
        .ok_or_else(|| CompileError::Serialization(format!("empty token path '{full_key}'")))?;

    let position = children.iter().position(|(name, _)| name == head);

    if rest.is_empty() {
        match position {
            Some(index) => match children[index].1 {
                // Same path emitted twice: last write wins.
                ThemeNode::Leaf(_) => children[index].1 = ThemeNode::Leaf(leaf),
                ThemeNode::Branch(_) => {
                    return Err(CompileError::Serialization(format!(
                        "token path '{full_key}' conflicts with a group at segment '{head}'"
                    )));
                }
            },
            None => children.push(((*head).to_string(), ThemeNode::Leaf(leaf))),
        }
        return Ok(());
    }

    let index = match position {
        Some(index) => {
            if let ThemeNode::Leaf(_) = children[index].1 {
                return Err(CompileError::Serialization(format!(
                    "token path '{full_key}' descends through leaf segment '{head}'"
                )));
            }
            index
        }
        None => {
            children.push(((*head).to_string(), ThemeNode::Branch(Vec::new())));
            children.len() - 1
        }
    };

    match &mut children[index].1 {
        ThemeNode::Branch(nested) => insert(nested, rest, leaf, full_key),
        ThemeNode::Leaf(_) => unreachable!("leaf conflict handled above"),
    }
}

/// Serializes a theme node as JavaScript source at the given tab depth.
/// String leaves are JSON-quoted; branch keys stay bare when they are valid
/// identifiers.
#[must_use]
pub fn stringify(node: &ThemeNode, level: usize) -> String {
    match node {
        ThemeNode::Leaf(value) => quote(value),
        ThemeNode::Branch(children) => {
            let indent = "\t".repeat(level);
            let indent_plus_one = "\t".repeat(level + 1);
            let body = children
                .iter()
                .map(|(key, child)| {
                    let rendered_key = if is_valid_js_identifier(key) {
                        key.clone()
                    } else {
                        quote(key)
                    };
                    format!("{rendered_key}: {}", stringify(child, level + 1))
                })
                .collect::<Vec<_>>()
                .join(&format!(",\n{indent_plus_one}"));
            format!("{{\n{indent_plus_one}{body}\n{indent}}}")
        }
    }
}

/// Static bare-identifier check for JavaScript object keys.
///
/// Deliberately conservative (ASCII only): anything outside
/// `[A-Za-z_$][A-Za-z0-9_$]*` gets quoted. Reserved words are legal object
/// keys in JavaScript, so they are not excluded.
#[must_use]
pub fn is_valid_js_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// JSON-style double quoting, matching the original serializer's escaping.
fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
}
