//! AWS installer configuration.

use serde::Serialize;

use crate::error::Result;
use crate::providers::InstallConfig;

const MASTER_TYPE: &str = "m4.xlarge";
const WORKER_TYPE: &str = "m4.large";
const VOLUME_TYPE: &str = "io1";
const VOLUME_SIZE: u32 = 500;

/// Fields of an AWS `install-config.yaml`.
///
/// # Examples
///
/// ```
/// use e2e_options::providers::InstallerConfigAws;
///
/// let yaml = InstallerConfigAws {
///     name: "alice-aws-x7k2".into(),
///     base_dns_domain: "example.com".into(),
///     region: "us-east-1".into(),
///     ssh_key: "ssh-rsa AAAA".into(),
/// }
/// .render()
/// .unwrap();
///
/// assert!(yaml.contains("name: alice-aws-x7k2"));
/// assert!(yaml.contains("region: us-east-1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallerConfigAws {
    /// Cluster name.
    pub name: String,
    /// Base DNS domain.
    pub base_dns_domain: String,
    /// Region.
    pub region: String,
    /// SSH public key for the nodes.
    pub ssh_key: String,
}

#[derive(Debug, Serialize)]
struct MachinePlatform {
    aws: Machine,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Machine {
    root_volume: RootVolume,
    #[serde(rename = "type")]
    instance_type: &'static str,
}

#[derive(Debug, Serialize)]
struct RootVolume {
    iops: u32,
    size: u32,
    #[serde(rename = "type")]
    volume_type: &'static str,
}

#[derive(Debug, Serialize)]
struct Platform {
    aws: Region,
}

#[derive(Debug, Serialize)]
struct Region {
    region: String,
}

fn machine(instance_type: &'static str, iops: u32) -> MachinePlatform {
    MachinePlatform {
        aws: Machine {
            root_volume: RootVolume {
                iops,
                size: VOLUME_SIZE,
                volume_type: VOLUME_TYPE,
            },
            instance_type,
        },
    }
}

impl InstallerConfigAws {
    /// Render the document as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if YAML encoding fails.
    pub fn render(&self) -> Result<String> {
        InstallConfig::new(
            &self.name,
            &self.base_dns_domain,
            &self.ssh_key,
            machine(MASTER_TYPE, 4000),
            machine(WORKER_TYPE, 2000),
            Platform {
                aws: Region {
                    region: self.region.clone(),
                },
            },
        )
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn test_render_aws() {
        let cfg = InstallerConfigAws {
            name: "name".into(),
            base_dns_domain: "basednsdomain".into(),
            region: "region".into(),
            ssh_key: "sshkey".into(),
        };
        let doc: Value = serde_yaml::from_str(&cfg.render().unwrap()).unwrap();

        assert_eq!(doc["metadata"]["name"], "name");
        assert_eq!(doc["baseDomain"], "basednsdomain");
        assert_eq!(doc["platform"]["aws"]["region"], "region");
        assert_eq!(doc["sshKey"], "sshkey");

        let master = &doc["controlPlane"]["platform"]["aws"];
        assert_eq!(master["type"], "m4.xlarge");
        assert_eq!(master["rootVolume"]["iops"], 4000);
        assert_eq!(master["rootVolume"]["size"], 500);
        assert_eq!(master["rootVolume"]["type"], "io1");

        let worker = &doc["compute"][0]["platform"]["aws"];
        assert_eq!(worker["type"], "m4.large");
        assert_eq!(worker["rootVolume"]["iops"], 2000);
    }
}
