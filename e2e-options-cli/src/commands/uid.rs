//! Print the resolved uid.

use crate::error::CliError;
use crate::utils::{build_context, GlobalOptions};
use clap::Args;

/// Print the resolved uid.
///
/// Without `--uid` or `options.uid` a fresh value is generated on every run.
#[derive(Args)]
pub struct UidCommand {
    /// Also print where the value came from
    #[arg(long)]
    pub show_source: bool,
}

impl UidCommand {
    /// Execute the uid command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = build_context(global)?;
        let uid = ctx.uid()?;

        if self.show_source {
            println!("{}\t{}", uid.value, uid.source);
        } else {
            println!("{}", uid.value);
        }
        Ok(())
    }
}
