//! Print the base DNS domain of a cloud.

use crate::error::CliError;
use crate::utils::{build_context, require_cloud, GlobalOptions};
use clap::Args;

/// Print the base DNS domain configured for a cloud.
#[derive(Args)]
pub struct BaseDomainCommand {
    /// Cloud to look up (aws, gcp, azure or baremetal)
    #[arg(value_name = "CLOUD")]
    pub cloud: String,
}

impl BaseDomainCommand {
    /// Execute the base-domain command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cloud = require_cloud(&self.cloud)?;
        let ctx = build_context(global)?;
        println!("{}", ctx.base_domain(cloud)?);
        Ok(())
    }
}
