//! Render an installer configuration.

use crate::error::CliError;
use crate::utils::{build_context, require_cloud, GlobalOptions};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Render the installer configuration for a new cluster.
#[derive(Args)]
pub struct InstallConfigCommand {
    /// Cloud to render for (aws, gcp or azure)
    #[arg(value_name = "CLOUD")]
    pub cloud: String,

    /// Write to this file instead of stdout
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl InstallConfigCommand {
    /// Execute the install-config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cloud = require_cloud(&self.cloud)?;
        let ctx = build_context(global)?;
        let yaml = ctx.installer_config(cloud)?;

        match self.output {
            Some(path) => {
                fs::write(&path, yaml)?;
                if !global.quiet {
                    eprintln!("Wrote {}", path.display());
                }
            }
            None => print!("{yaml}"),
        }
        Ok(())
    }
}
