//! Data models for the token compiler.
//!
//! This module contains the snapshot shapes the host design tool exports and
//! the read-only settings a compilation runs with. Models are independent of
//! the CLI and the compilation pipeline.

pub mod color;
pub mod settings;
pub mod variable;

// Re-export all model types
pub use color::ColorValue;
pub use settings::{ColorFormat, DarkModeMethod, Settings};
pub use variable::{AliasMarker, Mode, RawValue, Variable, VariableAlias, VariableKind};
