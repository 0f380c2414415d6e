//! The loaded options document.

use std::path::{Path, PathBuf};

use crate::cloud::Cloud;
use crate::error::{Error, Result};
use crate::options::loader::OptionsLoader;
use crate::options::schema::{OptionsFile, TestOptions};

/// Holds the options document for one test run.
///
/// A store is either empty or holds exactly one parsed document. It is built
/// once before tests start and only read afterwards; share it by reference
/// or `Arc` across threads.
///
/// # Examples
///
/// ```
/// use e2e_options::options::{OptionsFile, OptionsStore};
/// use e2e_options::Error;
///
/// let empty = OptionsStore::empty();
/// assert!(matches!(empty.region("aws"), Err(Error::OptionsNotLoaded)));
///
/// let yaml = r"
/// options:
///   hub: {}
///   cloudConnection:
///     apiKeys:
///       aws:
///         baseDnsDomain: example.com
///         region: us-east-1
/// ";
/// let file: OptionsFile = serde_yaml::from_str(yaml).unwrap();
/// let store = OptionsStore::from_document(file);
/// assert_eq!(store.region("aws").unwrap(), "us-east-1");
/// assert!(store.region("mycloud").unwrap_err().is_unsupported_cloud());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsStore {
    document: Option<OptionsFile>,
    source: Option<PathBuf>,
}

impl OptionsStore {
    /// A store with no document.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store holding an already parsed document.
    #[must_use]
    pub fn from_document(document: OptionsFile) -> Self {
        Self {
            document: Some(document),
            source: None,
        }
    }

    /// Load the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptionsRead`] or [`Error::OptionsParse`].
    pub fn load(path: &Path) -> Result<Self> {
        let document = OptionsLoader::load_file(path)?;
        Ok(Self {
            document: Some(document),
            source: Some(path.to_path_buf()),
        })
    }

    /// Replace the document with the one at `path`.
    ///
    /// On failure the previously loaded document is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptionsRead`] or [`Error::OptionsParse`].
    pub fn reload(&mut self, path: &Path) -> Result<()> {
        *self = Self::load(path)?;
        Ok(())
    }

    /// Returns `true` once a document has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// The file the document was loaded from, if it came from disk.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The whole document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OptionsNotLoaded`] for an empty store.
    pub fn options(&self) -> Result<&TestOptions> {
        self.document
            .as_ref()
            .map(|d| &d.options)
            .ok_or(Error::OptionsNotLoaded)
    }

    /// `options.owner`, if a document is loaded and sets it.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.options().ok()?.owner.as_deref()
    }

    /// `options.uid`, if a document is loaded and sets it.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.options().ok()?.uid.as_deref()
    }

    /// Region of `cloud`.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedCloud`] for unknown identifiers and bare metal,
    /// [`Error::OptionsNotLoaded`] for an empty store, and
    /// [`Error::CloudNotConfigured`] if the cloud has no credentials block.
    pub fn region(&self, cloud: &str) -> Result<&str> {
        let cloud: Cloud = cloud.parse()?;
        if !cloud.has_region() {
            return Err(Error::unsupported_cloud(cloud));
        }
        self.options()?.cloud_connection.api_keys.region(cloud)
    }

    /// Base DNS domain of `cloud`.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedCloud`] for unknown identifiers,
    /// [`Error::OptionsNotLoaded`] for an empty store, and
    /// [`Error::CloudNotConfigured`] if the cloud has no credentials block.
    pub fn base_domain(&self, cloud: &str) -> Result<&str> {
        let cloud: Cloud = cloud.parse()?;
        self.options()?.cloud_connection.api_keys.base_domain(cloud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DOC: &str = r"
options:
  hub:
    name: hub1
  owner: my
  cloudConnection:
    apiKeys:
      gcp:
        gcpProjectID: proj
        baseDnsDomain: gcp.example.com
        region: us-central1
";

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_records_source() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "options.yaml", DOC);

        let store = OptionsStore::load(&path).unwrap();
        assert!(store.is_loaded());
        assert_eq!(store.source_path(), Some(path.as_path()));
        assert_eq!(store.owner(), Some("my"));
        assert_eq!(store.uid(), None);
    }

    #[test]
    fn test_lookups_before_load() {
        let store = OptionsStore::empty();
        assert!(!store.is_loaded());
        assert!(matches!(store.region("gcp"), Err(Error::OptionsNotLoaded)));
        assert!(matches!(store.base_domain("gcp"), Err(Error::OptionsNotLoaded)));
        assert_eq!(store.owner(), None);
    }

    #[test]
    fn test_unsupported_cloud_checked_before_load_state() {
        let err = OptionsStore::empty().region("mycloud").unwrap_err();
        assert!(err.is_unsupported_cloud());
    }

    #[test]
    fn test_baremetal_region_unsupported_regardless_of_document() {
        let err = OptionsStore::empty().region("baremetal").unwrap_err();
        assert!(matches!(err, Error::UnsupportedCloud { .. }));

        let file: OptionsFile = serde_yaml::from_str("options:\n  hub: {}\n").unwrap();
        let err = OptionsStore::from_document(file).region("baremetal").unwrap_err();
        assert!(matches!(err, Error::UnsupportedCloud { .. }));
    }

    #[test]
    fn test_failed_reload_keeps_previous_document() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.yaml", DOC);
        let bad = write(&dir, "bad.yaml", "options: [");

        let mut store = OptionsStore::load(&good).unwrap();
        assert!(store.reload(&bad).unwrap_err().is_load_error());
        assert!(store.reload(&dir.path().join("missing.yaml")).is_err());

        assert_eq!(store.source_path(), Some(good.as_path()));
        assert_eq!(store.region("gcp").unwrap(), "us-central1");
    }

    #[test]
    fn test_reload_replaces_document() {
        let dir = TempDir::new().unwrap();
        let first = write(&dir, "first.yaml", DOC);
        let second = write(&dir, "second.yaml", "options:\n  hub: {}\n  owner: other\n");

        let mut store = OptionsStore::load(&first).unwrap();
        store.reload(&second).unwrap();
        assert_eq!(store.owner(), Some("other"));
        assert!(matches!(
            store.region("gcp"),
            Err(Error::CloudNotConfigured { cloud: Cloud::Gcp })
        ));
    }

    #[test]
    fn test_lookups_are_idempotent() {
        let file: OptionsFile = serde_yaml::from_str(DOC).unwrap();
        let store = OptionsStore::from_document(file);
        for _ in 0..3 {
            assert_eq!(store.base_domain("gcp").unwrap(), "gcp.example.com");
        }
    }
}
