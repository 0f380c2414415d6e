//! Utility functions for CLI operations.
//!
//! This module turns the global flags into library inputs and builds the
//! [`TestContext`] every command works against.

use crate::error::CliError;
use e2e_options::options::OptionsLoader;
use e2e_options::resolve::ProcessEnv;
use e2e_options::{CommandLineOverrides, TestContext};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Skip loading the options file.
    pub skip_options: bool,

    /// Values supplied on the command line.
    pub overrides: CommandLineOverrides,
}

impl GlobalOptions {
    /// The options file that would be loaded: `--options`, `$OPTIONS`, then
    /// the default location.
    pub fn options_path(&self) -> PathBuf {
        OptionsLoader::resolve_path(self.overrides.options_file.as_deref(), &ProcessEnv)
    }
}

/// Build the context for a command.
///
/// The options file is loaded unless `--skip-options` was given.
pub fn build_context(global: &GlobalOptions) -> Result<TestContext, CliError> {
    let builder = TestContext::builder().with_overrides(global.overrides.clone());
    let builder = if global.skip_options {
        builder.skip_load()
    } else {
        builder
    };
    builder.build().map_err(CliError::from)
}

/// Reject an empty positional cloud argument before it reaches the library.
pub fn require_cloud(cloud: &str) -> Result<&str, CliError> {
    if cloud.trim().is_empty() {
        return Err(CliError::InvalidArguments("cloud cannot be empty".into()));
    }
    Ok(cloud)
}
