//! Generated cluster names.

use std::fmt;

use crate::cloud::Cloud;
use crate::context::TestContext;
use crate::error::Result;

/// The name of a cluster created by a test run: `{owner}-{cloud}-{uid}`.
///
/// The owner and uid are resolved independently, so two names built for the
/// same owner and cloud share a [`prefix`](Self::prefix) and differ only in
/// the uid unless the uid is overridden.
///
/// # Examples
///
/// ```
/// use e2e_options::{Cloud, ClusterName};
///
/// let name = ClusterName::new("alice", Cloud::Aws, "x7k2");
/// assert_eq!(name.to_string(), "alice-aws-x7k2");
/// assert_eq!(name.prefix(), "alice-aws");
/// assert_eq!(name.uid(), "x7k2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterName {
    owner: String,
    cloud: Cloud,
    uid: String,
}

impl ClusterName {
    /// Compose a name from already resolved parts.
    pub fn new(owner: impl Into<String>, cloud: Cloud, uid: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            cloud,
            uid: uid.into(),
        }
    }

    /// The owner segment.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The cloud the cluster runs on.
    #[must_use]
    pub const fn cloud(&self) -> Cloud {
        self.cloud
    }

    /// The uid segment.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Everything but the uid: `{owner}-{cloud}`.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("{}-{}", self.owner, self.cloud)
    }
}

impl fmt::Display for ClusterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.owner, self.cloud, self.uid)
    }
}

impl TestContext {
    /// Build a fresh cluster name for `cloud`.
    ///
    /// The cloud is checked before anything is resolved, so an unsupported
    /// cloud never consumes randomness.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedCloud`] unless `cloud` is `aws`,
    /// `gcp` or `azure`, and [`crate::Error::Entropy`] if a uid has to be
    /// generated and the random source fails.
    pub fn new_cluster_name(&self, cloud: &str) -> Result<ClusterName> {
        let cloud = Cloud::parse_provisioned(cloud)?;
        let owner = self.owner();
        let uid = self.uid()?;
        log::debug!(
            "cluster name for {cloud}: owner from {}, uid from {}",
            owner.source,
            uid.source
        );
        Ok(ClusterName::new(owner.value, cloud, uid.value))
    }

    /// Like [`new_cluster_name`](Self::new_cluster_name), rendered as a string.
    ///
    /// # Errors
    ///
    /// See [`new_cluster_name`](Self::new_cluster_name).
    pub fn cluster_name(&self, cloud: &str) -> Result<String> {
        Ok(self.new_cluster_name(cloud)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::overrides::CommandLineOverrides;
    use crate::random::{MockEntropySource, DEFAULT_CHARSET};
    use crate::resolve::USER_ENV;
    use std::collections::HashMap;

    fn context(owner: Option<&str>, uid: Option<&str>) -> TestContext {
        TestContext::builder()
            .with_overrides(CommandLineOverrides {
                owner: owner.map(str::to_string),
                uid: uid.map(str::to_string),
                ..Default::default()
            })
            .with_env(HashMap::<String, String>::new())
            .skip_load()
            .build()
            .unwrap()
    }

    #[test]
    fn test_name_composition() {
        let ctx = context(Some("my"), Some("1234"));
        let name = ctx.new_cluster_name("azure").unwrap();
        assert_eq!(name.to_string(), "my-azure-1234");
        assert_eq!(name.owner(), "my");
        assert_eq!(name.cloud(), Cloud::Azure);
        assert_eq!(name.uid(), "1234");
    }

    #[test]
    fn test_generated_uid_segment() {
        let ctx = context(Some("my"), None);
        let name = ctx.new_cluster_name("gcp").unwrap();
        let rendered = name.to_string();

        let uid = rendered.strip_prefix("my-gcp-").unwrap();
        assert_eq!(uid, name.uid());
        assert_eq!(uid.len(), 4);
        assert!(uid.chars().all(|c| DEFAULT_CHARSET.contains(c)));
    }

    #[test]
    fn test_prefix_stable_across_calls() {
        let ctx = context(None, None);
        let a = ctx.new_cluster_name("aws").unwrap();
        let b = ctx.new_cluster_name("aws").unwrap();
        assert_eq!(a.prefix(), b.prefix());
        assert_eq!(a.prefix(), "ginkgo-aws");
    }

    #[test]
    fn test_unsupported_cloud_rejected() {
        let ctx = context(None, None);
        for cloud in ["mycloud", "baremetal", ""] {
            let err = ctx.new_cluster_name(cloud).unwrap_err();
            assert!(err.is_unsupported_cloud(), "{cloud:?}");
        }
    }

    #[test]
    fn test_unsupported_cloud_checked_before_randomness() {
        let mut entropy = MockEntropySource::new();
        entropy.expect_next_u32().never();

        let ctx = TestContext::builder()
            .with_env(HashMap::<String, String>::new())
            .with_entropy(entropy)
            .skip_load()
            .build()
            .unwrap();
        assert!(ctx.new_cluster_name("mycloud").is_err());
    }

    #[test]
    fn test_entropy_failure_fails_name() {
        let mut entropy = MockEntropySource::new();
        entropy.expect_next_u32().returning(|| {
            Err(Error::Entropy {
                reason: "broken".into(),
            })
        });

        let ctx = TestContext::builder()
            .with_env(HashMap::from([(USER_ENV.to_string(), "bob".to_string())]))
            .with_entropy(entropy)
            .skip_load()
            .build()
            .unwrap();
        assert!(matches!(
            ctx.cluster_name("aws").unwrap_err(),
            Error::Entropy { .. }
        ));
    }

    #[test]
    fn test_cluster_name_string() {
        let ctx = context(Some("team"), Some("zz99"));
        assert_eq!(ctx.cluster_name("gcp").unwrap(), "team-gcp-zz99");
    }
}
