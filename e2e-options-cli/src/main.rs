//! Main entry point for the e2e-options CLI.
//!
//! Registers the flags of the end-to-end harness and prints the values the
//! library resolves from them:
//! - `owner`, `uid`: resolved name segments
//! - `cluster-name`: a fresh cluster name for a cloud
//! - `region`, `base-domain`: per-cloud fields from the options file
//! - `install-config`: installer configuration for a cloud
//! - `resolve`: everything at once, as text, JSON or YAML

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use e2e_options::CommandLineOverrides;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library logging through the CLI verbosity
    if e2e_options::init_logger(cli.verbose, cli.quiet)
        .install()
        .is_err()
    {
        eprintln!("warning: a logger was already installed");
    }

    let global = GlobalOptions {
        quiet: cli.quiet,
        skip_options: cli.skip_options,
        overrides: CommandLineOverrides {
            options_file: cli.options_file,
            kubeadmin_user: cli.kubeadmin_user,
            kubeadmin_credential: cli.kubeadmin_credential,
            report_file: cli.report_file,
            owner: cli.owner,
            uid: cli.uid,
        },
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Owner(cmd) => cmd.execute(&global),
        cli::Command::Uid(cmd) => cmd.execute(&global),
        cli::Command::ClusterName(cmd) => cmd.execute(&global),
        cli::Command::Region(cmd) => cmd.execute(&global),
        cli::Command::BaseDomain(cmd) => cmd.execute(&global),
        cli::Command::InstallConfig(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::HubKubeconfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
