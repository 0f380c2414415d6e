//! GCP installer configuration.

use serde::Serialize;

use crate::error::Result;
use crate::providers::InstallConfig;

const MACHINE_TYPE: &str = "n1-standard-4";

/// Fields of a GCP `install-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallerConfigGcp {
    /// Cluster name.
    pub name: String,
    /// Base DNS domain.
    pub base_dns_domain: String,
    /// Region.
    pub region: String,
    /// SSH public key for the nodes.
    pub ssh_key: String,
    /// Project the cluster is created in.
    pub project_id: String,
}

#[derive(Debug, Serialize)]
struct MachinePlatform {
    gcp: Machine,
}

#[derive(Debug, Serialize)]
struct Machine {
    #[serde(rename = "type")]
    machine_type: &'static str,
}

#[derive(Debug, Serialize)]
struct Platform {
    gcp: Project,
}

#[derive(Debug, Serialize)]
struct Project {
    #[serde(rename = "projectID")]
    project_id: String,
    region: String,
}

const fn machine() -> MachinePlatform {
    MachinePlatform {
        gcp: Machine {
            machine_type: MACHINE_TYPE,
        },
    }
}

impl InstallerConfigGcp {
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
            machine(),
            machine(),
            Platform {
                gcp: Project {
                    project_id: self.project_id.clone(),
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
    fn test_render_gcp() {
        let cfg = InstallerConfigGcp {
            name: "name".into(),
            base_dns_domain: "basednsdomain".into(),
            region: "region".into(),
            ssh_key: "sshkey".into(),
            project_id: "projectid".into(),
        };
        let doc: Value = serde_yaml::from_str(&cfg.render().unwrap()).unwrap();

        assert_eq!(doc["platform"]["gcp"]["projectID"], "projectid");
        assert_eq!(doc["platform"]["gcp"]["region"], "region");
        assert_eq!(doc["controlPlane"]["platform"]["gcp"]["type"], "n1-standard-4");
        assert_eq!(doc["compute"][0]["platform"]["gcp"]["type"], "n1-standard-4");
        assert_eq!(doc["networking"]["networkType"], "OpenShiftSDN");
    }

    #[test]
    fn test_empty_fields_still_render() {
        let yaml = InstallerConfigGcp::default().render().unwrap();
        let doc: Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(doc["metadata"]["name"], "");
        assert_eq!(doc["platform"]["gcp"]["projectID"], "");
    }
}
