#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # e2e-options
//!
//! Option resolution for end-to-end test suites that provision clusters on
//! AWS, GCP, Azure and bare metal.
//!
//! Values come from three places: command-line flags, a YAML options file
//! and the environment. Each value is taken from the first source that
//! supplies it, falling back to a literal or generated default.
//!
//! ## Core Types
//!
//! - [`TestContext`] and [`ContextBuilder`]: the resolved options of one run
//! - [`OptionsStore`]: the loaded options document
//! - [`Cloud`] and [`ClusterName`]: cloud identifiers and generated names
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use e2e_options::{CommandLineOverrides, TestContext};
//! use std::collections::HashMap;
//!
//! let ctx = TestContext::builder()
//!     .with_overrides(CommandLineOverrides {
//!         owner: Some("alice".into()),
//!         uid: Some("1234".into()),
//!         ..Default::default()
//!     })
//!     .with_env(HashMap::<String, String>::new())
//!     .skip_load()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(ctx.cluster_name("aws").unwrap(), "alice-aws-1234");
//! assert!(ctx.cluster_name("mycloud").is_err());
//! ```

pub mod cloud;
pub mod cluster;
pub mod context;
pub mod error;
pub mod kubeconfig;
pub mod logging;
pub mod options;
pub mod overrides;
pub mod providers;
pub mod random;
pub mod resolve;

// Re-export key types at crate root for convenience
pub use cloud::Cloud;
pub use cluster::ClusterName;
pub use context::{ContextBuilder, TestContext};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use options::{OptionsStore, OptionsValidator};
pub use overrides::CommandLineOverrides;
pub use random::string_with_charset;
pub use resolve::{Resolved, ValueSource};
