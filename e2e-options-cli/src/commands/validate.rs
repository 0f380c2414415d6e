//! Command to validate an options file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use e2e_options::{OptionsStore, OptionsValidator};
use std::path::PathBuf;

/// Validate an options file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Options file to validate (defaults to the file the other commands load)
    #[arg(value_name = "OPTIONS_PATH")]
    pub options_path: Option<PathBuf>,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = self
            .options_path
            .unwrap_or_else(|| global.options_path());

        // Parsing already rejects unknown keys and missing required fields
        let store = OptionsStore::load(&path)?;

        match OptionsValidator::validate(store.options()?) {
            Ok(()) => {
                if !global.quiet {
                    println!("Options file is valid: {}", path.display());
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Options validation failed".to_string(),
                ))
            }
        }
    }
}
