//! Generate a cluster name.

use crate::error::CliError;
use crate::utils::{build_context, require_cloud, GlobalOptions};
use clap::Args;

/// Generate a cluster name for a cloud.
#[derive(Args)]
pub struct ClusterNameCommand {
    /// Cloud the cluster runs on (aws, gcp or azure)
    #[arg(value_name = "CLOUD")]
    pub cloud: String,

    /// Print only `{owner}-{cloud}`, without the uid
    #[arg(long)]
    pub prefix: bool,
}

impl ClusterNameCommand {
    /// Execute the cluster-name command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cloud = require_cloud(&self.cloud)?;
        let ctx = build_context(global)?;
        let name = ctx.new_cluster_name(cloud)?;

        if self.prefix {
            println!("{}", name.prefix());
        } else {
            println!("{name}");
        }
        Ok(())
    }
}
