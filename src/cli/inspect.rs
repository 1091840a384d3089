//! Inspect command for variable snapshots.

use crate::cli::common::CliResult;
use crate::cli::generate::load_snapshot;
use crate::compiler::ColorSet;
use crate::models::RawValue;
use clap::Args;
use std::path::PathBuf;

/// List the color variables of a snapshot in compilation order
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the variable snapshot JSON file
    #[arg(short, long, value_name = "FILE")]
    pub variables: PathBuf,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let variables = load_snapshot(&self.variables)?;
        let set = ColorSet::from_snapshot(&variables);

        println!("{} color variable(s)", set.len());
        for variable in &set {
            let modes: Vec<&str> = variable.modes.iter().map(|m| m.name.as_str()).collect();
            println!(
                "  {} [{}]  modes: {}",
                variable.key,
                variable.collection_name,
                modes.join(", ")
            );
            for mode in &variable.modes {
                let Some(raw) = variable.values_by_mode.get(&mode.mode_id) else {
                    continue;
                };
                match raw {
                    RawValue::Alias(alias) => {
                        println!("    {}: alias -> {}", mode.name, alias.id);
                    }
                    RawValue::Color(color) => {
                        println!("    {}: {}", mode.name, color.to_hex8());
                    }
                }
            }
        }

        Ok(())
    }
}
