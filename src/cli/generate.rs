//! Generate command for theme artifacts.

use crate::cli::common::{CliError, CliResult};
use crate::compiler;
use crate::constants::{CSS_ARTIFACT_FILENAME, TAILWIND_ARTIFACT_FILENAME};
use crate::models::{ColorFormat, DarkModeMethod, Settings, Variable};
use clap::Args;
use std::path::{Path, PathBuf};

/// Generate CSS and Tailwind theme files from a variable snapshot
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the variable snapshot JSON file
    #[arg(short, long, value_name = "FILE")]
    pub variables: PathBuf,

    /// Path to a settings JSON file (flags below override its values)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Output directory for generated files
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Prefix every custom property with its collection name
    #[arg(long)]
    pub prefix_with_collection_name: bool,

    /// Dark mode strategy: light-dark, selector, or media
    #[arg(long, value_name = "METHOD")]
    pub dark_mode_method: Option<String>,

    /// Output color format (hex, rgb, hsl, hwb, lab, lch, oklab, oklch)
    #[arg(long, value_name = "FORMAT")]
    pub color_format: Option<String>,

    /// Selector for dark overrides when using the selector strategy
    #[arg(long, value_name = "SELECTOR")]
    pub dark_mode_css_selector: Option<String>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let variables = load_snapshot(&self.variables)?;
        let settings = self.resolve_settings()?;

        let artifacts = compiler::compile(&variables, &settings)
            .map_err(|e| CliError::data(format!("Compilation failed: {e}")))?;

        std::fs::create_dir_all(&self.out_dir)
            .map_err(|e| CliError::io(format!("Failed to create output directory: {e}")))?;

        let css_path = self.out_dir.join(CSS_ARTIFACT_FILENAME);
        std::fs::write(&css_path, &artifacts.generated_css).map_err(|e| {
            CliError::io(format!("Failed to write {CSS_ARTIFACT_FILENAME}: {e}"))
        })?;

        let tailwind_path = self.out_dir.join(TAILWIND_ARTIFACT_FILENAME);
        std::fs::write(&tailwind_path, &artifacts.generated_tailwind).map_err(|e| {
            CliError::io(format!("Failed to write {TAILWIND_ARTIFACT_FILENAME}: {e}"))
        })?;

        println!("✓ Generated {CSS_ARTIFACT_FILENAME} and {TAILWIND_ARTIFACT_FILENAME}");
        println!("  Output: {}", self.out_dir.display());

        Ok(())
    }

    /// Builds the effective settings: file values first, then flag overrides.
    fn resolve_settings(&self) -> CliResult<Settings> {
        let mut settings = match &self.settings {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| CliError::io(format!("Failed to read settings file: {e}")))?;
                serde_json::from_str(&content)
                    .map_err(|e| CliError::validation(format!("Invalid settings file: {e}")))?
            }
            None => Settings::default(),
        };

        if self.prefix_with_collection_name {
            settings.prefix_with_collection_name = true;
        }
        if let Some(method) = &self.dark_mode_method {
            settings.dark_mode_method = method.parse::<DarkModeMethod>().map_err(|_| {
                CliError::validation(format!(
                    "Invalid dark mode method '{method}'. Must be 'light-dark', 'selector', or 'media'"
                ))
            })?;
        }
        if let Some(format) = &self.color_format {
            settings.color_format = format.parse::<ColorFormat>().map_err(|e| {
                CliError::validation(format!("Invalid color format '{format}': {e}"))
            })?;
        }
        if let Some(selector) = &self.dark_mode_css_selector {
            if selector.trim().is_empty() {
                return Err(CliError::validation(
                    "Dark mode CSS selector must not be empty",
                ));
            }
            settings.dark_mode_css_selector.clone_from(selector);
        }

        Ok(settings)
    }
}

/// Loads a variable snapshot from a JSON file.
pub(crate) fn load_snapshot(path: &Path) -> CliResult<Vec<Variable>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read snapshot file: {e}")))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::validation(format!("Invalid snapshot file: {e}")))
}
