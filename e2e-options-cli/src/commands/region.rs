//! Print the region of a cloud.

use crate::error::CliError;
use crate::utils::{build_context, require_cloud, GlobalOptions};
use clap::Args;

/// Print the region configured for a cloud.
#[derive(Args)]
pub struct RegionCommand {
    /// Cloud to look up (aws, gcp or azure)
    #[arg(value_name = "CLOUD")]
    pub cloud: String,
}

impl RegionCommand {
    /// Execute the region command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cloud = require_cloud(&self.cloud)?;
        let ctx = build_context(global)?;
        println!("{}", ctx.region(cloud)?);
        Ok(())
    }
}
