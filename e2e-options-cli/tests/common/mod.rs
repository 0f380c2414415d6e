//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary options file
//! - Command builder helpers that isolate the process environment
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Options document used by most tests.
pub const OPTIONS: &str = r#"
options:
  hub:
    name: hub1
    kubeconfig: /hubs/hub1/kubeconfig
  owner: my
  cloudConnection:
    sshPublickey: ssh-rsa AAAA test@example.com
    apiKeys:
      aws:
        baseDnsDomain: my_aws_baseDnsDomain
        region: my_aws_region
      gcp:
        gcpProjectID: my_gcp_project
        baseDnsDomain: my_gcp_baseDnsDomain
        region: my_gcp_region
      azure:
        azureBaseDomainRGN: my_azure_rgn
        baseDnsDomain: my_azure_baseDnsDomain
        region: my_azure_region
      baremetal:
        baseDnsDomain: my_baremetal_baseDnsDomain
"#;

/// Test environment with an isolated options file.
///
/// This struct provides:
/// - A temporary directory for test files
/// - `options.yaml` inside it, written from [`OPTIONS`]
/// - Helper methods for common CLI invocations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the default options file
    pub options_file: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with the default options file.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let options_file = temp_path.join("options.yaml");
        std::fs::write(&options_file, OPTIONS).expect("Failed to write options file");

        Self {
            temp_dir,
            temp_path,
            options_file,
        }
    }

    /// Get a command builder without pre-configured flags.
    ///
    /// Variables the binary reads are cleared so the host environment
    /// cannot leak into the test, and the working directory is the temp dir.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("e2e-options").expect("Failed to find e2e-options binary");
        cmd.env_remove("OPTIONS")
            .env_remove("USER")
            .env_remove("E2E_OPTIONS_LOG_MODE")
            .current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with `--options` pointing at the default file.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--options").arg(&self.options_file);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temp dir and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create test directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run e2e-options");

        assert!(
            output.status.success(),
            "{args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
