//! Values supplied on the command line.

use std::path::PathBuf;

/// Default user for the cluster under test.
pub const DEFAULT_KUBEADMIN_USER: &str = "kubeadmin";

/// Default location for junit results.
pub const DEFAULT_REPORT_FILE: &str = "results";

/// Command-line overrides consumed by option resolution.
///
/// Populated once by the CLI layer and treated as read-only input afterwards.
/// Empty strings are treated the same as absent values during resolution.
///
/// # Examples
///
/// ```
/// use e2e_options::CommandLineOverrides;
///
/// let overrides = CommandLineOverrides {
///     owner: Some("alice".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(overrides.kubeadmin_user, "kubeadmin");
/// assert_eq!(overrides.report_file, "results");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLineOverrides {
    /// Location of the options file.
    pub options_file: Option<PathBuf>,
    /// User for the cluster under test.
    pub kubeadmin_user: String,
    /// Credential for the cluster under test.
    pub kubeadmin_credential: Option<String>,
    /// Where junit results are written.
    pub report_file: String,
    /// Prefix for created resources.
    pub owner: Option<String>,
    /// Unique postfix for created resources.
    pub uid: Option<String>,
}

impl Default for CommandLineOverrides {
    fn default() -> Self {
        Self {
            options_file: None,
            kubeadmin_user: DEFAULT_KUBEADMIN_USER.to_string(),
            kubeadmin_credential: None,
            report_file: DEFAULT_REPORT_FILE.to_string(),
            owner: None,
            uid: None,
        }
    }
}
