//! Integration tests for error handling and exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: Semantic failure (validation failed, nothing found)
//! - Exit code 2: Unsupported or unconfigured cloud
//! - Exit code 3: Options file could not be loaded
//! - Exit code 4: Invalid arguments

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    env.command().arg("owner").assert().code(0);
}

#[test]
fn test_validation_failure_exit_code() {
    let env = TestEnv::new();
    let path = env.write_file("bad.yaml", "options:\n  hub: {}\n  owner: Not_Valid\n");

    env.command_bare()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("owner"));
}

#[test]
fn test_missing_hub_kubeconfig_exit_code() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["--skip-options", "hub-kubeconfig"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No hub kubeconfig found"));
}

#[test]
fn test_hub_kubeconfig_scenario_without_config_dir_exit_code() {
    let env = TestEnv::new();
    env.write_file("scenario1/kubeconfig.yaml", "apiVersion: v1\n");

    env.command_bare()
        .args(["--skip-options", "hub-kubeconfig", "--scenario", "scenario1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No hub kubeconfig found"));
}

#[test]
fn test_unsupported_cloud_exit_code() {
    let env = TestEnv::new();
    for args in [
        ["cluster-name", "mycloud"],
        ["region", "mycloud"],
        ["region", "baremetal"],
        ["cluster-name", "baremetal"],
        ["install-config", "baremetal"],
    ] {
        env.command()
            .args(args)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("is unsupported"));
    }
}

#[test]
fn test_unconfigured_cloud_exit_code() {
    let env = TestEnv::new();
    let path = env.write_file("aws-only.yaml", "options:\n  hub: {}\n");

    env.command_bare()
        .arg("--options")
        .arg(&path)
        .args(["region", "gcp"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_options_file_exit_code() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["--options", "does-not-exist.yaml", "owner"])
        .assert()
        .code(3);

    // The default location is relative to the working directory
    env.command_bare().arg("owner").assert().code(3);
}

#[test]
fn test_malformed_options_file_exit_code() {
    let env = TestEnv::new();
    let path = env.write_file("broken.yaml", "options: [unclosed");

    env.command_bare()
        .arg("--options")
        .arg(&path)
        .args(["region", "aws"])
        .assert()
        .code(3);
}

#[test]
fn test_empty_cloud_argument_exit_code() {
    let env = TestEnv::new();
    env.command().args(["region", ""]).assert().code(4);
}
