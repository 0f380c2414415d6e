//! Error types for the e2e-options library.
//!
//! This module provides the error hierarchy for option loading, precedence
//! resolution and per-cloud lookups, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::cloud::Cloud;

/// Result type alias for operations that may fail with an e2e-options error.
///
/// # Examples
///
/// ```
/// use e2e_options::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("us-east-1".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the e2e-options library.
///
/// Nothing in the library retries or swallows these errors; they are always
/// returned to the immediate caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The options file could not be read.
    #[error("cannot read options file {}: {source}", path.display())]
    OptionsRead {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The options file is not a valid options document.
    #[error("cannot parse options file {}: {source}", path.display())]
    OptionsParse {
        /// The path that was parsed.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A lookup was attempted before any options document was loaded.
    #[error("no options document has been loaded")]
    OptionsNotLoaded,

    /// The cloud identifier is outside the supported set for the operation.
    #[error("cloud '{cloud}' is unsupported")]
    UnsupportedCloud {
        /// The rejected cloud identifier.
        cloud: String,
    },

    /// The cloud is supported but has no credentials block in the options file.
    #[error("cloud '{cloud}' is not configured under cloudConnection.apiKeys")]
    CloudNotConfigured {
        /// The cloud with no configuration.
        cloud: Cloud,
    },

    /// The random source failed while generating an identifier.
    #[error("entropy source failure: {reason}")]
    Entropy {
        /// Description of the failure reported by the source.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Serializing a rendered document failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::UnsupportedCloud`] for any displayable identifier.
    pub(crate) fn unsupported_cloud(cloud: impl ToString) -> Self {
        Self::UnsupportedCloud {
            cloud: cloud.to_string(),
        }
    }

    /// Check if the error came from loading the options file.
    ///
    /// # Examples
    ///
    /// ```
    /// use e2e_options::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::OptionsRead {
    ///     path: PathBuf::from("missing.yaml"),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    /// };
    /// assert!(err.is_load_error());
    /// ```
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::OptionsRead { .. } | Self::OptionsParse { .. })
    }

    /// Check if the error rejected a cloud identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use e2e_options::Error;
    ///
    /// let err = Error::UnsupportedCloud { cloud: "mycloud".to_string() };
    /// assert!(err.is_unsupported_cloud());
    /// ```
    #[must_use]
    pub fn is_unsupported_cloud(&self) -> bool {
        matches!(self, Self::UnsupportedCloud { .. })
    }
}
