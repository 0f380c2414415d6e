//! Build script for e2e-options-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    let cloud = || Arg::new("cloud").value_name("CLOUD").required(true);

    Command::new("e2e-options")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve end-to-end test options")
        .long_about(
            "Inspect the owner, uid, cluster names and per-cloud settings resolved \
             from command-line flags, the options file and the environment",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("options")
                .long("options")
                .help("Location of the options file")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("skip-options")
                .long("skip-options")
                .help("Do not load any options file")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("owner")
                .long("owner")
                .help("Prefix for created resources")
                .value_name("OWNER")
                .global(true),
        )
        .arg(
            Arg::new("uid")
                .long("uid")
                .help("Unique postfix for created resources")
                .value_name("UID")
                .global(true),
        )
        .arg(
            Arg::new("kubeadmin-user")
                .long("kubeadmin-user")
                .help("User for the cluster under test")
                .value_name("USER")
                .default_value("kubeadmin")
                .global(true),
        )
        .arg(
            Arg::new("kubeadmin-credential")
                .long("kubeadmin-credential")
                .help("Credential for the cluster under test")
                .value_name("CREDENTIAL")
                .global(true),
        )
        .arg(
            Arg::new("report-file")
                .long("report-file")
                .help("Location of the junit results")
                .value_name("PATH")
                .default_value("results")
                .global(true),
        )
        .subcommands(vec![
            Command::new("owner").about("Print the resolved owner"),
            Command::new("uid").about("Print the resolved uid"),
            Command::new("cluster-name")
                .about("Generate a cluster name for a cloud")
                .arg(cloud()),
            Command::new("region")
                .about("Print the region configured for a cloud")
                .arg(cloud()),
            Command::new("base-domain")
                .about("Print the base DNS domain configured for a cloud")
                .arg(cloud()),
            Command::new("install-config")
                .about("Render the installer configuration for a cloud")
                .arg(cloud()),
            Command::new("resolve")
                .about("Print every value resolved for a cloud")
                .arg(cloud()),
            Command::new("validate").about("Validate an options file"),
            Command::new("hub-kubeconfig").about("Locate the hub kubeconfig"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("e2e-options.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
