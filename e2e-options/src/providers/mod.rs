//! Installer configuration documents.
//!
//! Each supported cloud renders an `install-config.yaml` for the `OpenShift`
//! installer from a handful of fields. The document skeleton is shared; the
//! machine pool and platform sections differ per cloud.

use serde::Serialize;

use crate::cloud::Cloud;
use crate::context::TestContext;
use crate::error::{Error, Result};
use crate::options::CloudCredentials;

pub mod aws;
pub mod azure;
pub mod gcp;

pub use aws::InstallerConfigAws;
pub use azure::InstallerConfigAzure;
pub use gcp::InstallerConfigGcp;

const API_VERSION: &str = "v1";
const REPLICAS: u32 = 3;
const HYPERTHREADING: &str = "Enabled";

/// The document shared by all clouds. `M` is the per-pool machine platform,
/// `P` the cluster-wide platform section.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InstallConfig<M, P> {
    api_version: &'static str,
    metadata: Metadata,
    base_domain: String,
    control_plane: MachinePool<M>,
    compute: Vec<MachinePool<M>>,
    networking: Networking,
    platform: P,
    pull_secret: String,
    ssh_key: String,
}

impl<M: Serialize, P: Serialize> InstallConfig<M, P> {
    pub(crate) fn new(
        name: &str,
        base_domain: &str,
        ssh_key: &str,
        master: M,
        worker: M,
        platform: P,
    ) -> Self {
        Self {
            api_version: API_VERSION,
            metadata: Metadata {
                name: name.to_string(),
            },
            base_domain: base_domain.to_string(),
            control_plane: MachinePool::new("master", master),
            compute: vec![MachinePool::new("worker", worker)],
            networking: Networking::default(),
            platform,
            pull_secret: String::new(),
            ssh_key: ssh_key.to_string(),
        }
    }

    pub(crate) fn render(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[derive(Debug, Serialize)]
struct Metadata {
    name: String,
}

#[derive(Debug, Serialize)]
struct MachinePool<M> {
    hyperthreading: &'static str,
    name: &'static str,
    replicas: u32,
    platform: M,
}

impl<M> MachinePool<M> {
    const fn new(name: &'static str, platform: M) -> Self {
        Self {
            hyperthreading: HYPERTHREADING,
            name,
            replicas: REPLICAS,
            platform,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Networking {
    cluster_network: Vec<ClusterNetwork>,
    #[serde(rename = "machineCIDR")]
    machine_cidr: &'static str,
    network_type: &'static str,
    service_network: Vec<&'static str>,
}

impl Default for Networking {
    fn default() -> Self {
        Self {
            cluster_network: vec![ClusterNetwork {
                cidr: "10.128.0.0/14",
                host_prefix: 23,
            }],
            machine_cidr: "10.0.0.0/16",
            network_type: "OpenShiftSDN",
            service_network: vec!["172.30.0.0/16"],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClusterNetwork {
    cidr: &'static str,
    host_prefix: u8,
}

impl TestContext {
    /// Render the installer configuration for a new cluster on `cloud`.
    ///
    /// The cluster name is freshly generated; base domain, region and the
    /// provider specific fields come from the options file, and the SSH key
    /// from `cloudConnection.sshPublickey`.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedCloud`] unless `cloud` is `aws`, `gcp` or `azure`,
    /// [`Error::OptionsNotLoaded`] or [`Error::CloudNotConfigured`] if the
    /// fields cannot be looked up, and [`Error::Entropy`] if the uid cannot
    /// be generated.
    pub fn installer_config(&self, cloud: &str) -> Result<String> {
        let cloud = Cloud::parse_provisioned(cloud)?;
        let connection = &self.store().options()?.cloud_connection;
        let credentials = connection.api_keys.credentials(cloud)?;
        let name = self.new_cluster_name(cloud.as_str())?.to_string();
        let ssh_key = connection.ssh_public_key.clone();

        log::debug!("rendering {cloud} install-config for {name}");
        match credentials {
            CloudCredentials::Aws(key) => InstallerConfigAws {
                name,
                base_dns_domain: key.base_dns_domain.clone(),
                region: key.region.clone(),
                ssh_key,
            }
            .render(),
            CloudCredentials::Gcp(key) => InstallerConfigGcp {
                name,
                base_dns_domain: key.base_dns_domain.clone(),
                region: key.region.clone(),
                ssh_key,
                project_id: key.project_id.clone(),
            }
            .render(),
            CloudCredentials::Azure(key) => InstallerConfigAzure {
                name,
                base_dns_domain: key.base_dns_domain.clone(),
                region: key.region.clone(),
                ssh_key,
                base_domain_rgn: key.base_domain_rgn.clone(),
            }
            .render(),
            CloudCredentials::BareMetal(_) => Err(Error::unsupported_cloud(cloud)),
        }
    }
}
