//! CLI command implementations.
//!
//! - `owner`, `uid`: print a resolved name segment
//! - `cluster_name`: generate a cluster name for a cloud
//! - `region`, `base_domain`: per-cloud lookups
//! - `install_config`: render an installer configuration
//! - `resolve`: every resolved value for a cloud
//! - `validate`: validate an options file
//! - `hub_kubeconfig`: locate the hub kubeconfig
//! - `completions`: shell completion scripts

pub mod base_domain;
pub mod cluster_name;
pub mod completions;
pub mod hub_kubeconfig;
pub mod install_config;
pub mod owner;
pub mod region;
pub mod resolve;
pub mod uid;
pub mod validate;

pub use base_domain::BaseDomainCommand;
pub use cluster_name::ClusterNameCommand;
pub use completions::CompletionsCommand;
pub use hub_kubeconfig::HubKubeconfigCommand;
pub use install_config::InstallConfigCommand;
pub use owner::OwnerCommand;
pub use region::RegionCommand;
pub use resolve::ResolveCommand;
pub use uid::UidCommand;
pub use validate::ValidateCommand;
