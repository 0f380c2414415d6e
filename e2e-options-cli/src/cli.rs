//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including the harness flags shared by every subcommand.

use crate::commands::{
    BaseDomainCommand, ClusterNameCommand, CompletionsCommand, HubKubeconfigCommand,
    InstallConfigCommand, OwnerCommand, RegionCommand, ResolveCommand, UidCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use e2e_options::overrides::{DEFAULT_KUBEADMIN_USER, DEFAULT_REPORT_FILE};
use std::path::PathBuf;

/// Inspect the options resolved for an end-to-end test run.
#[derive(Parser)]
#[command(name = "e2e-options")]
#[command(version, about = "Resolve end-to-end test options", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Location of the options file (falls back to $OPTIONS, then resources/options.yaml)
    #[arg(long = "options", value_name = "PATH", global = true)]
    pub options_file: Option<PathBuf>,

    /// Do not load any options file
    #[arg(long, global = true, conflicts_with = "options_file")]
    pub skip_options: bool,

    /// Prefix for created resources
    #[arg(long, value_name = "OWNER", global = true)]
    pub owner: Option<String>,

    /// Unique postfix for created resources
    #[arg(long, value_name = "UID", global = true)]
    pub uid: Option<String>,

    /// User for the cluster under test
    #[arg(long, value_name = "USER", global = true, default_value = DEFAULT_KUBEADMIN_USER)]
    pub kubeadmin_user: String,

    /// Credential for the cluster under test
    #[arg(long, value_name = "CREDENTIAL", global = true)]
    pub kubeadmin_credential: Option<String>,

    /// Location of the junit results
    #[arg(long, value_name = "PATH", global = true, default_value = DEFAULT_REPORT_FILE)]
    pub report_file: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved owner
    Owner(OwnerCommand),

    /// Print the resolved uid
    Uid(UidCommand),

    /// Generate a cluster name for a cloud
    ClusterName(ClusterNameCommand),

    /// Print the region configured for a cloud
    Region(RegionCommand),

    /// Print the base DNS domain configured for a cloud
    BaseDomain(BaseDomainCommand),

    /// Render the installer configuration for a cloud
    InstallConfig(InstallConfigCommand),

    /// Print every value resolved for a cloud
    Resolve(ResolveCommand),

    /// Validate an options file
    Validate(ValidateCommand),

    /// Locate the hub kubeconfig
    HubKubeconfig(HubKubeconfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
