//! Compilation settings.
//!
//! Settings are read-only input to the compiler: how custom-property names
//! are derived, which dark-mode emission strategy is used, and which CSS
//! color notation literals are rendered in. Unknown method or format names
//! fail at acceptance time, never per value.

use crate::compiler::CompileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy used to render the light/dark buckets into CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DarkModeMethod {
    /// One declaration per variable using the `light-dark()` value function
    #[default]
    LightDark,
    /// Light values at `:root`, dark overrides under a configurable selector
    Selector,
    /// Light values at `:root`, dark overrides in a `prefers-color-scheme` media block
    Media,
}

impl DarkModeMethod {
    /// The wire/CLI name of this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LightDark => "light-dark",
            Self::Selector => "selector",
            Self::Media => "media",
        }
    }
}

impl fmt::Display for DarkModeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DarkModeMethod {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light-dark" => Ok(Self::LightDark),
            "selector" => Ok(Self::Selector),
            "media" => Ok(Self::Media),
            other => Err(CompileError::Serialization(format!(
                "unknown dark mode method '{other}' (expected light-dark, selector, or media)"
            ))),
        }
    }
}

/// CSS color notation used for direct color literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbbaa`
    #[default]
    Hex,
    /// `rgb()` / `rgba()` legacy comma syntax
    Rgb,
    /// `hsl()`
    Hsl,
    /// `hwb()`
    Hwb,
    /// `lab()` (CIELAB, D50)
    Lab,
    /// `lch()`
    Lch,
    /// `oklab()`
    Oklab,
    /// `oklch()`
    Oklch,
}

impl ColorFormat {
    /// All supported notations, in UI presentation order.
    pub const ALL: [Self; 8] = [
        Self::Hex,
        Self::Rgb,
        Self::Hsl,
        Self::Hwb,
        Self::Lab,
        Self::Lch,
        Self::Oklab,
        Self::Oklch,
    ];

    /// The wire/CLI name of this notation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hwb => "hwb",
            Self::Lab => "lab",
            Self::Lch => "lch",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| CompileError::UnsupportedColorFormat(s.to_string()))
    }
}

/// Read-only settings a compilation runs with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Prepend the collection name to each derived custom-property name
    pub prefix_with_collection_name: bool,
    /// Dark-mode emission strategy
    pub dark_mode_method: DarkModeMethod,
    /// Notation for direct color literals
    pub color_format: ColorFormat,
    /// Scope selector for the `selector` strategy's dark override block
    pub dark_mode_css_selector: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix_with_collection_name: false,
            dark_mode_method: DarkModeMethod::default(),
            color_format: ColorFormat::default(),
            dark_mode_css_selector: ".dark".to_string(),
        }
    }
}
