//! Tokensmith Library
//!
//! Compiles design-token variable snapshots into CSS custom-property
//! stylesheets and Tailwind theme-extension modules. The [`compiler`] module
//! holds the pure pipeline; [`bridge`] carries the host messaging protocol;
//! [`cli`] exposes both to scripts.

// Module declarations
pub mod bridge;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod constants;
pub mod models;
