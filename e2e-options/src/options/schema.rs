//! Options document schema.
//!
//! Mirrors the `options.yaml` consumed by the end-to-end suites. Every
//! struct rejects unknown keys, and the region and base DNS domain of a
//! configured cloud are required, so a typo fails the load instead of
//! silently leaving a field empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The top level of an options file.
///
/// # Examples
///
/// ```
/// use e2e_options::options::OptionsFile;
///
/// let yaml = "options:\n  hub:\n    name: hub1\n";
/// let file: OptionsFile = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(file.options.hub.name, "hub1");
/// assert!(file.options.managed_clusters.is_empty());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OptionsFile {
    /// The options for this test run.
    pub options: TestOptions,
}

/// Options available for tests to consume.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TestOptions {
    /// The hub cluster.
    pub hub: Cluster,

    /// Clusters placed under management.
    #[serde(rename = "clusters", default)]
    pub managed_clusters: Vec<Cluster>,

    /// Image registry used by the suites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_registry: Option<ImageRegistry>,

    /// `OpenShift` release the clusters are installed with.
    #[serde(rename = "ocpReleaseVersion", default, skip_serializing_if = "Option::is_none")]
    pub ocp_release_version: Option<String>,

    /// Identity provider configured on the hub.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_provider: Option<String>,

    /// Prefix for created resources, below the command line in precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Unique postfix for created resources, below the command line in precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Credentials for the cloud providers.
    #[serde(default)]
    pub cloud_connection: CloudConnection,
}

/// A cluster that may be added under management.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Cluster {
    /// Cluster name.
    #[serde(default)]
    pub name: String,
    /// Namespace of the cluster on the hub.
    #[serde(default)]
    pub namespace: String,
    /// Free-form tags used to select clusters in tests.
    #[serde(default)]
    pub tags: BTreeMap<String, bool>,
    /// Base domain of the cluster.
    #[serde(default)]
    pub base_domain: String,
    /// Login user.
    #[serde(default)]
    pub user: String,
    /// Login password.
    #[serde(default)]
    pub password: String,
    /// Kubeconfig context name.
    #[serde(rename = "kubecontext", default)]
    pub kube_context: String,
    /// API server URL.
    #[serde(rename = "masterURL", default)]
    pub master_url: String,
    /// Path to the kubeconfig.
    #[serde(rename = "kubeconfig", default)]
    pub kube_config: String,
}

/// Image repository information.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ImageRegistry {
    /// Registry host.
    #[serde(default)]
    pub server: String,
    /// Registry user.
    #[serde(default)]
    pub user: String,
    /// Registry password.
    #[serde(default)]
    pub password: String,
}

/// Connection material shared by all cloud providers.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CloudConnection {
    /// Pull secret injected into installs.
    #[serde(rename = "pullSecret", default)]
    pub pull_secret: String,
    /// SSH private key for node access.
    #[serde(rename = "sshPrivatekey", default)]
    pub ssh_private_key: String,
    /// SSH public key installed on nodes.
    #[serde(rename = "sshPublickey", default)]
    pub ssh_public_key: String,
    /// Per-provider credentials.
    #[serde(rename = "apiKeys", default)]
    pub api_keys: ApiKeys,
}

/// Per-provider credential blocks. A missing block means the cloud is not
/// configured for this run.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApiKeys {
    /// AWS credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsApiKey>,
    /// GCP credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp: Option<GcpApiKey>,
    /// Azure credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzureApiKey>,
    /// Bare metal provisioning settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baremetal: Option<BareMetalApiKey>,
}

/// AWS credentials.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AwsApiKey {
    /// Access key id.
    #[serde(rename = "awsAccessKeyID", default)]
    pub access_key_id: String,
    /// Secret access key.
    #[serde(rename = "awsSecretAccessKeyID", default)]
    pub secret_access_key: String,
    /// Base DNS domain for installed clusters.
    #[serde(rename = "baseDnsDomain")]
    pub base_dns_domain: String,
    /// Region clusters are installed in.
    pub region: String,
}

/// GCP credentials.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GcpApiKey {
    /// Project id.
    #[serde(rename = "gcpProjectID", default)]
    pub project_id: String,
    /// Service account key, as JSON.
    #[serde(rename = "gcpServiceAccountJsonKey", default)]
    pub service_account_json_key: String,
    /// Base DNS domain for installed clusters.
    #[serde(rename = "baseDnsDomain")]
    pub base_dns_domain: String,
    /// Region clusters are installed in.
    pub region: String,
}

/// Azure credentials.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AzureApiKey {
    /// Resource group holding the base domain zone.
    #[serde(rename = "azureBaseDomainRGN", default)]
    pub base_domain_rgn: String,
    /// Base DNS domain for installed clusters.
    #[serde(rename = "baseDnsDomain")]
    pub base_dns_domain: String,
    /// Subscription id.
    #[serde(rename = "subscriptionID", default)]
    pub subscription_id: String,
    /// Service principal client id.
    #[serde(rename = "clientID", default)]
    pub client_id: String,
    /// Service principal secret.
    #[serde(rename = "clientSecret", default)]
    pub client_secret: String,
    /// Tenant id.
    #[serde(rename = "tenantID", default)]
    pub tenant_id: String,
    /// Region clusters are installed in.
    pub region: String,
}

/// Bare metal provisioning settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct BareMetalApiKey {
    /// Name of the pre-provisioned cluster.
    #[serde(default)]
    pub cluster_name: String,
    /// Base DNS domain of the cluster.
    pub base_dns_domain: String,
    /// Libvirt connection URI.
    #[serde(rename = "libvirtURI", default)]
    pub libvirt_uri: String,
    /// Provisioning network CIDR.
    #[serde(rename = "provisioningNetworkCIDR", default)]
    pub provisioning_network_cidr: String,
    /// Interface attached to the provisioning network.
    #[serde(default)]
    pub provisioning_network_interface: String,
    /// Bridge for the provisioning network.
    #[serde(default)]
    pub provisioning_bridge: String,
    /// Bridge for the external network.
    #[serde(default)]
    pub external_bridge: String,
    /// Virtual IP of the API server.
    #[serde(rename = "apiVIP", default)]
    pub api_vip: String,
    /// Virtual IP of the ingress.
    #[serde(rename = "ingressVIP", default)]
    pub ingress_vip: String,
    /// Entries appended to `known_hosts`.
    #[serde(default)]
    pub ssh_known_hosts_list: Vec<String>,
    /// Mirror for release images.
    #[serde(default)]
    pub image_registry_mirror: String,
    /// Bootstrap VM image.
    #[serde(rename = "bootstrapOSImage", default)]
    pub bootstrap_os_image: String,
    /// Cluster node image.
    #[serde(rename = "clusterOSImage", default)]
    pub cluster_os_image: String,
    /// Additional CA bundle.
    #[serde(default)]
    pub trust_bundle: String,
    /// Hosts making up the cluster.
    #[serde(default)]
    pub hosts: Vec<Host>,
}

/// A bare metal host.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Host {
    /// Host name.
    #[serde(default)]
    pub name: String,
    /// Namespace of the host resource.
    #[serde(default)]
    pub namespace: String,
    /// `master` or `worker`.
    #[serde(default)]
    pub role: String,
    /// Baseboard management controller access.
    #[serde(default)]
    pub bmc: Bmc,
    /// MAC address the host boots from.
    #[serde(rename = "bootMACAddress", default)]
    pub boot_mac_address: String,
    /// Hardware profile name.
    #[serde(default)]
    pub hardware_profile: String,
}

/// Baseboard management controller access.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Bmc {
    /// BMC address.
    #[serde(default)]
    pub address: String,
    /// Skip TLS verification when talking to the BMC.
    #[serde(default)]
    pub disable_certificate_verification: bool,
    /// BMC user.
    #[serde(default)]
    pub username: String,
    /// BMC password.
    #[serde(default)]
    pub password: String,
}
