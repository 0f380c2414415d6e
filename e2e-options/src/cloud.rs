//! Cloud provider identifiers.
//!
//! The set of providers is closed: every lookup that depends on the cloud
//! matches on [`Cloud`] exhaustively, so adding a provider is a compile error
//! until each call site handles it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A cloud provider supported by the test harness.
///
/// # Examples
///
/// ```
/// use e2e_options::Cloud;
///
/// let cloud: Cloud = "azure".parse().unwrap();
/// assert_eq!(cloud, Cloud::Azure);
/// assert_eq!(cloud.to_string(), "azure");
///
/// assert!("mycloud".parse::<Cloud>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cloud {
    /// Amazon Web Services.
    Aws,
    /// Google Cloud Platform.
    Gcp,
    /// Microsoft Azure.
    Azure,
    /// Bare metal hosts provisioned through libvirt/BMC.
    #[serde(rename = "baremetal")]
    BareMetal,
}

impl Cloud {
    /// All providers, in declaration order.
    pub const ALL: [Self; 4] = [Self::Aws, Self::Gcp, Self::Azure, Self::BareMetal];

    /// Returns the identifier used in options files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Gcp => "gcp",
            Self::Azure => "azure",
            Self::BareMetal => "baremetal",
        }
    }

    /// Returns `true` if clusters on this cloud are created by the installer
    /// and therefore get a generated name.
    ///
    /// Bare metal clusters are named in the options file instead.
    #[must_use]
    pub const fn is_installer_provisioned(self) -> bool {
        match self {
            Self::Aws | Self::Gcp | Self::Azure => true,
            Self::BareMetal => false,
        }
    }

    /// Returns `true` if the cloud has a region setting.
    #[must_use]
    pub const fn has_region(self) -> bool {
        !matches!(self, Self::BareMetal)
    }

    /// Parse an identifier, accepting only clouds that get generated names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCloud`] for unknown identifiers and for
    /// clouds that are not installer-provisioned.
    pub fn parse_provisioned(s: &str) -> Result<Self> {
        let cloud: Self = s.parse()?;
        if cloud.is_installer_provisioned() {
            Ok(cloud)
        } else {
            Err(Error::unsupported_cloud(s))
        }
    }
}

impl fmt::Display for Cloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cloud {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "aws" => Ok(Self::Aws),
            "gcp" => Ok(Self::Gcp),
            "azure" => Ok(Self::Azure),
            "baremetal" => Ok(Self::BareMetal),
            _ => Err(Error::unsupported_cloud(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_clouds() {
        assert_eq!("aws".parse::<Cloud>().unwrap(), Cloud::Aws);
        assert_eq!("gcp".parse::<Cloud>().unwrap(), Cloud::Gcp);
        assert_eq!("azure".parse::<Cloud>().unwrap(), Cloud::Azure);
        assert_eq!("baremetal".parse::<Cloud>().unwrap(), Cloud::BareMetal);
    }

    #[test]
    fn test_parse_is_exact() {
        for bad in ["AWS", " aws", "Azure", "bare-metal", "", "mycloud"] {
            let err = bad.parse::<Cloud>().unwrap_err();
            assert!(err.is_unsupported_cloud(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_display_round_trips_identifier() {
        for cloud in Cloud::ALL {
            assert_eq!(cloud.to_string().parse::<Cloud>().unwrap(), cloud);
        }
    }

    #[test]
    fn test_parse_provisioned() {
        assert_eq!(Cloud::parse_provisioned("gcp").unwrap(), Cloud::Gcp);

        let err = Cloud::parse_provisioned("baremetal").unwrap_err();
        assert!(err.is_unsupported_cloud());
        assert!(format!("{err}").contains("baremetal"));

        assert!(Cloud::parse_provisioned("mycloud").is_err());
    }

    #[test]
    fn test_only_baremetal_lacks_region() {
        for cloud in Cloud::ALL {
            assert_eq!(cloud.has_region(), cloud != Cloud::BareMetal);
        }
    }

    #[test]
    fn test_serde_identifiers() {
        let cloud: Cloud = serde_yaml::from_str("baremetal").unwrap();
        assert_eq!(cloud, Cloud::BareMetal);
        assert_eq!(serde_yaml::to_string(&Cloud::Aws).unwrap().trim(), "aws");
    }
}
