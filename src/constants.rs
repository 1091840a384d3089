//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Tokensmith";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "tokensmith";

/// File name of the emitted CSS custom-property stylesheet.
pub const CSS_ARTIFACT_FILENAME: &str = "theme.css";

/// File name of the emitted Tailwind theme-extension module.
pub const TAILWIND_ARTIFACT_FILENAME: &str = "tailwind.config.js";
