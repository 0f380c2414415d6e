//! The options file and everything read from it.
//!
//! An options file is a YAML document describing the hub, the managed
//! clusters and the cloud credentials for one test run:
//!
//! ```yaml
//! options:
//!   hub:
//!     name: hub1
//!     baseDomain: example.com
//!   owner: alice
//!   cloudConnection:
//!     sshPublickey: ssh-rsa AAAA...
//!     apiKeys:
//!       aws:
//!         awsAccessKeyID: AKIA...
//!         awsSecretAccessKeyID: ...
//!         baseDnsDomain: aws.example.com
//!         region: us-east-1
//! ```
//!
//! # Locating the file
//!
//! 1. An explicit path (the `--options` flag)
//! 2. The `OPTIONS` environment variable
//! 3. `resources/options.yaml`
//!
//! # Examples
//!
//! ```no_run
//! use e2e_options::options::{OptionsLoader, OptionsStore};
//! use e2e_options::resolve::ProcessEnv;
//!
//! let path = OptionsLoader::resolve_path(None, &ProcessEnv);
//! let store = OptionsStore::load(&path).unwrap();
//! println!("aws region: {}", store.region("aws").unwrap());
//! ```

pub mod dispatch;
pub mod loader;
pub mod schema;
pub mod store;
pub mod validator;

pub use dispatch::CloudCredentials;
pub use loader::{OptionsLoader, DEFAULT_OPTIONS_PATH};
pub use schema::{
    ApiKeys, AwsApiKey, AzureApiKey, BareMetalApiKey, Bmc, CloudConnection, Cluster, GcpApiKey,
    Host, ImageRegistry, OptionsFile, TestOptions,
};
pub use store::OptionsStore;
pub use validator::OptionsValidator;
