//! CLI command handlers for Tokensmith.
//!
//! Headless, scriptable access to the compiler for automation, testing, and
//! CI integration.

pub mod common;
pub mod generate;
pub mod inspect;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use generate::GenerateArgs;
pub use inspect::InspectArgs;
