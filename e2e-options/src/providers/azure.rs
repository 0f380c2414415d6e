//! Azure installer configuration.

use serde::Serialize;

use crate::error::Result;
use crate::providers::InstallConfig;

const MASTER_TYPE: &str = "Standard_D4s_v3";
const WORKER_TYPE: &str = "Standard_D2s_v3";
const DISK_SIZE_GB: u32 = 128;
const ZONES: [&str; 3] = ["1", "2", "3"];

/// Fields of an Azure `install-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallerConfigAzure {
    /// Cluster name.
    pub name: String,
    /// Base DNS domain.
    pub base_dns_domain: String,
    /// Region.
    pub region: String,
    /// SSH public key for the nodes.
    pub ssh_key: String,
    /// Resource group holding the base domain zone.
    pub base_domain_rgn: String,
}

#[derive(Debug, Serialize)]
struct MachinePlatform {
    azure: Machine,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Machine {
    #[serde(rename = "type")]
    vm_type: &'static str,
    os_disk: OsDisk,
    #[serde(skip_serializing_if = "Option::is_none")]
    zones: Option<[&'static str; 3]>,
}

#[derive(Debug, Serialize)]
struct OsDisk {
    #[serde(rename = "diskSizeGB")]
    disk_size_gb: u32,
}

#[derive(Debug, Serialize)]
struct Platform {
    azure: ResourceGroup,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceGroup {
    base_domain_resource_group_name: String,
    region: String,
}

const fn machine(vm_type: &'static str, zones: Option<[&'static str; 3]>) -> MachinePlatform {
    MachinePlatform {
        azure: Machine {
            vm_type,
            os_disk: OsDisk {
                disk_size_gb: DISK_SIZE_GB,
            },
            zones,
        },
    }
}

impl InstallerConfigAzure {
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
            machine(MASTER_TYPE, None),
            machine(WORKER_TYPE, Some(ZONES)),
            Platform {
                azure: ResourceGroup {
                    base_domain_resource_group_name: self.base_domain_rgn.clone(),
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
    fn test_render_azure() {
        let cfg = InstallerConfigAzure {
            name: "name".into(),
            base_dns_domain: "basednsdomain".into(),
            region: "region".into(),
            ssh_key: "sshkey".into(),
            base_domain_rgn: "basedomainrgn".into(),
        };
        let doc: Value = serde_yaml::from_str(&cfg.render().unwrap()).unwrap();

        let platform = &doc["platform"]["azure"];
        assert_eq!(platform["baseDomainResourceGroupName"], "basedomainrgn");
        assert_eq!(platform["region"], "region");

        let master = &doc["controlPlane"]["platform"]["azure"];
        assert_eq!(master["type"], "Standard_D4s_v3");
        assert_eq!(master["osDisk"]["diskSizeGB"], 128);
        assert!(master.get("zones").is_none());

        let worker = &doc["compute"][0]["platform"]["azure"];
        assert_eq!(worker["type"], "Standard_D2s_v3");
        assert_eq!(worker["zones"][2], "3");
    }
}
