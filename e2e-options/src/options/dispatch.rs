//! Per-cloud field lookup on the credential blocks.

use crate::cloud::Cloud;
use crate::error::{Error, Result};
use crate::options::schema::{ApiKeys, AwsApiKey, AzureApiKey, BareMetalApiKey, GcpApiKey};

/// A borrowed view of one provider's credential block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudCredentials<'a> {
    /// AWS credentials.
    Aws(&'a AwsApiKey),
    /// GCP credentials.
    Gcp(&'a GcpApiKey),
    /// Azure credentials.
    Azure(&'a AzureApiKey),
    /// Bare metal settings.
    BareMetal(&'a BareMetalApiKey),
}

impl<'a> CloudCredentials<'a> {
    /// The cloud this block belongs to.
    #[must_use]
    pub const fn cloud(&self) -> Cloud {
        match self {
            Self::Aws(_) => Cloud::Aws,
            Self::Gcp(_) => Cloud::Gcp,
            Self::Azure(_) => Cloud::Azure,
            Self::BareMetal(_) => Cloud::BareMetal,
        }
    }

    /// Base DNS domain configured for the cloud.
    #[must_use]
    pub fn base_dns_domain(&self) -> &'a str {
        match self {
            Self::Aws(k) => &k.base_dns_domain,
            Self::Gcp(k) => &k.base_dns_domain,
            Self::Azure(k) => &k.base_dns_domain,
            Self::BareMetal(k) => &k.base_dns_domain,
        }
    }

    /// Region configured for the cloud, if the cloud has regions.
    #[must_use]
    pub fn region(&self) -> Option<&'a str> {
        match self {
            Self::Aws(k) => Some(&k.region),
            Self::Gcp(k) => Some(&k.region),
            Self::Azure(k) => Some(&k.region),
            Self::BareMetal(_) => None,
        }
    }
}

impl ApiKeys {
    /// Returns the credential block for `cloud`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CloudNotConfigured`] if the options file has no block
    /// for the cloud.
    pub fn credentials(&self, cloud: Cloud) -> Result<CloudCredentials<'_>> {
        let creds = match cloud {
            Cloud::Aws => self.aws.as_ref().map(CloudCredentials::Aws),
            Cloud::Gcp => self.gcp.as_ref().map(CloudCredentials::Gcp),
            Cloud::Azure => self.azure.as_ref().map(CloudCredentials::Azure),
            Cloud::BareMetal => self.baremetal.as_ref().map(CloudCredentials::BareMetal),
        };
        creds.ok_or(Error::CloudNotConfigured { cloud })
    }

    /// Returns `apiKeys.{cloud}.region`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCloud`] for bare metal, which has no
    /// region, and [`Error::CloudNotConfigured`] if the block is missing.
    pub fn region(&self, cloud: Cloud) -> Result<&str> {
        if !cloud.has_region() {
            return Err(Error::unsupported_cloud(cloud));
        }
        self.credentials(cloud)?
            .region()
            .ok_or_else(|| Error::unsupported_cloud(cloud))
    }

    /// Returns `apiKeys.{cloud}.baseDnsDomain`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CloudNotConfigured`] if the block is missing.
    pub fn base_domain(&self, cloud: Cloud) -> Result<&str> {
        Ok(self.credentials(cloud)?.base_dns_domain())
    }
}
