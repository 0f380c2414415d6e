//! Options file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::options::schema::OptionsFile;
use crate::resolve::{EnvSource, OPTIONS_ENV};

/// Path used when neither the caller nor `$OPTIONS` names an options file.
pub const DEFAULT_OPTIONS_PATH: &str = "resources/options.yaml";

/// Loads options files.
///
/// # Examples
///
/// ```
/// use e2e_options::options::OptionsLoader;
/// use std::collections::HashMap;
/// use std::path::{Path, PathBuf};
///
/// let env = HashMap::from([("OPTIONS".to_string(), "/etc/e2e/options.yaml".to_string())]);
///
/// // An explicit path wins over the environment
/// let path = OptionsLoader::resolve_path(Some(Path::new("mine.yaml")), &env);
/// assert_eq!(path, PathBuf::from("mine.yaml"));
///
/// // Then $OPTIONS, then the default
/// assert_eq!(OptionsLoader::resolve_path(None, &env), PathBuf::from("/etc/e2e/options.yaml"));
/// assert_eq!(
///     OptionsLoader::resolve_path(None, &HashMap::<String, String>::new()),
///     PathBuf::from("resources/options.yaml"),
/// );
/// ```
pub struct OptionsLoader;

impl OptionsLoader {
    /// Pick the options file: explicit path, `$OPTIONS`, then
    /// [`DEFAULT_OPTIONS_PATH`]. Empty values are skipped and a leading `~/`
    /// is expanded to the home directory.
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>, env: &dyn EnvSource) -> PathBuf {
        let chosen = explicit
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .or_else(|| {
                env.var(OPTIONS_ENV)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OPTIONS_PATH));

        expand_home(chosen)
    }

    /// Read and parse an options file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptionsRead`] if the file cannot be read and
    /// [`Error::OptionsParse`] if it is not a valid options document.
    pub fn load_file(path: &Path) -> Result<OptionsFile> {
        log::debug!("options filename={}", path.display());

        let result = fs::read_to_string(path)
            .map_err(|source| Error::OptionsRead {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|contents| {
                serde_yaml::from_str(&contents).map_err(|source| Error::OptionsParse {
                    path: path.to_path_buf(),
                    source,
                })
            });

        if let Err(ref e) = result {
            log::error!("--options error: {e}");
        }
        result
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    if let (Ok(rest), Some(home)) = (path.strip_prefix("~"), home::home_dir()) {
        return home.join(rest);
    }
    path
}
