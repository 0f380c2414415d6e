//! Semantic validation of a parsed options document.
//!
//! Parsing already rejects unknown keys and missing required fields; this
//! covers what the schema cannot express, such as empty strings in required
//! fields and name segments that would not survive in a DNS label.

use std::collections::HashSet;

use crate::cloud::Cloud;
use crate::error::{Error, Result};
use crate::options::schema::{BareMetalApiKey, TestOptions};

/// Validates options documents.
///
/// # Examples
///
/// ```
/// use e2e_options::options::{OptionsFile, OptionsValidator};
///
/// let file: OptionsFile = serde_yaml::from_str("options:\n  hub: {}\n  owner: Alice\n").unwrap();
/// assert!(OptionsValidator::validate(&file.options).is_err());
/// ```
pub struct OptionsValidator;

impl OptionsValidator {
    /// Validate a complete document.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::Validation`] found.
    pub fn validate(options: &TestOptions) -> Result<()> {
        if let Some(ref owner) = options.owner {
            Self::validate_name_segment("owner", owner)?;
        }
        if let Some(ref uid) = options.uid {
            Self::validate_name_segment("uid", uid)?;
        }

        let mut seen = HashSet::new();
        for (i, cluster) in options.managed_clusters.iter().enumerate() {
            if cluster.name.trim().is_empty() {
                return Err(Error::Validation {
                    field: format!("clusters[{i}].name"),
                    message: "Cannot be empty".into(),
                });
            }
            if !seen.insert(cluster.name.as_str()) {
                return Err(Error::Validation {
                    field: format!("clusters[{i}].name"),
                    message: format!("Duplicate cluster name '{}'", cluster.name),
                });
            }
        }

        let keys = &options.cloud_connection.api_keys;
        for cloud in Cloud::ALL {
            let Ok(creds) = keys.credentials(cloud) else {
                continue;
            };
            Self::require_non_empty(cloud, "baseDnsDomain", creds.base_dns_domain())?;
            if let Some(region) = creds.region() {
                Self::require_non_empty(cloud, "region", region)?;
            }
        }

        if let Some(ref baremetal) = keys.baremetal {
            Self::validate_baremetal(baremetal)?;
        }

        Ok(())
    }

    /// Owner and uid end up inside cluster names, which are DNS labels.
    fn validate_name_segment(field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }

        if let Some(bad) = value
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid character '{bad}' (only lowercase letters, digits and '-' are allowed)"
                ),
            });
        }

        if value.starts_with('-') || value.ends_with('-') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot start or end with '-'".into(),
            });
        }

        Ok(())
    }

    fn require_non_empty(cloud: Cloud, key: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: format!("cloudConnection.apiKeys.{cloud}.{key}"),
                message: "Cannot be empty".into(),
            });
        }
        Ok(())
    }

    fn validate_baremetal(baremetal: &BareMetalApiKey) -> Result<()> {
        for (i, host) in baremetal.hosts.iter().enumerate() {
            if host.name.trim().is_empty() {
                return Err(Error::Validation {
                    field: format!("cloudConnection.apiKeys.baremetal.hosts[{i}].name"),
                    message: "Cannot be empty".into(),
                });
            }
        }
        Ok(())
    }
}
