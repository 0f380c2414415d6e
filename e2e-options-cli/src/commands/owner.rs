//! Print the resolved owner.

use crate::error::CliError;
use crate::utils::{build_context, GlobalOptions};
use clap::Args;

/// Print the resolved owner.
#[derive(Args)]
pub struct OwnerCommand {
    /// Also print where the value came from
    #[arg(long)]
    pub show_source: bool,
}

impl OwnerCommand {
    /// Execute the owner command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = build_context(global)?;
        let owner = ctx.owner();

        if self.show_source {
            println!("{}\t{}", owner.value, owner.source);
        } else {
            println!("{}", owner.value);
        }
        Ok(())
    }
}
