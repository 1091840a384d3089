//! Compilation error taxonomy.
//!
//! All variants are structural input-data errors: none are transient and
//! none are retried. A compilation surfaces a single terminal error instead
//! of partial artifacts.

/// Terminal error raised by the compilation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// An alias value references a variable id absent from the ingested
    /// color set (missing entirely, or not a color variable).
    #[error("variable '{referenced_by}' aliases '{id}', which is not a color variable in this snapshot")]
    AliasResolution {
        /// The unresolvable target id
        id: String,
        /// Key of the variable whose value carried the alias
        referenced_by: String,
    },

    /// A variable's modes cannot produce a required light or dark bucket.
    #[error("variable '{key}' cannot be classified: {reason}")]
    ModeClassification {
        /// Key of the offending variable
        key: String,
        /// Which bucket was missing and why
        reason: String,
    },

    /// A configured color format has no registered converter. Raised at
    /// settings-acceptance time, never per value.
    #[error("unsupported color format '{0}'")]
    UnsupportedColorFormat(String),

    /// A theme-object key or value cannot be represented.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
