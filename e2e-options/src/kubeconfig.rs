//! Hub kubeconfig lookup.

use std::path::{Path, PathBuf};

use crate::context::TestContext;

/// File name looked up inside a scenario directory.
pub const KUBECONFIG_FILE: &str = "kubeconfig.yaml";

/// Locate the hub kubeconfig.
///
/// A non-empty `explicit` path is returned as is. Otherwise the file
/// `{config_dir}/{scenario}/kubeconfig.yaml` is returned if both parts are
/// non-empty and the file exists. Nothing is read or validated.
///
/// # Examples
///
/// ```
/// use e2e_options::kubeconfig::hub_kubeconfig;
/// use std::path::{Path, PathBuf};
///
/// let found = hub_kubeconfig(Some("/etc/hub/kubeconfig"), Path::new(""), "");
/// assert_eq!(found, Some(PathBuf::from("/etc/hub/kubeconfig")));
///
/// assert_eq!(hub_kubeconfig(None, Path::new("/nonexistent"), "scenario1"), None);
/// ```
#[must_use]
pub fn hub_kubeconfig(explicit: Option<&str>, config_dir: &Path, scenario: &str) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    if config_dir.as_os_str().is_empty() || scenario.is_empty() {
        return None;
    }

    let candidate = config_dir.join(scenario).join(KUBECONFIG_FILE);
    if candidate.is_file() {
        Some(candidate)
    } else {
        log::debug!("no hub kubeconfig at {}", candidate.display());
        None
    }
}

impl TestContext {
    /// Hub kubeconfig: `options.hub.kubeconfig` when set, otherwise the
    /// scenario file under `config_dir`.
    #[must_use]
    pub fn hub_kubeconfig(&self, config_dir: &Path, scenario: &str) -> Option<PathBuf> {
        let explicit = self
            .store()
            .options()
            .ok()
            .map(|o| o.hub.kube_config.as_str());
        hub_kubeconfig(explicit, config_dir, scenario)
    }
}
