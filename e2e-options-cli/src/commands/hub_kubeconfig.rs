//! Locate the hub kubeconfig.

use crate::error::CliError;
use crate::utils::{build_context, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Locate the hub kubeconfig.
///
/// Prints `options.hub.kubeconfig` when set, otherwise
/// `{config-dir}/{scenario}/kubeconfig.yaml` if that file exists.
#[derive(Args)]
pub struct HubKubeconfigCommand {
    /// Directory holding one subdirectory per scenario
    #[arg(long, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// Scenario subdirectory to look in
    #[arg(long, value_name = "NAME")]
    pub scenario: Option<String>,
}

impl HubKubeconfigCommand {
    /// Execute the hub-kubeconfig command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = build_context(global)?;

        let config_dir = self.config_dir.unwrap_or_default();
        let scenario = self.scenario.unwrap_or_default();

        match ctx.hub_kubeconfig(&config_dir, &scenario) {
            Some(path) => {
                println!("{}", path.display());
                Ok(())
            }
            None => Err(CliError::SemanticFailure(
                "No hub kubeconfig found".to_string(),
            )),
        }
    }
}
