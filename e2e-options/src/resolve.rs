//! Source precedence for individually resolved values.
//!
//! A value is taken from the first source that supplies a non-empty string,
//! in the order: command line, options file, environment, then a literal or
//! generated default.

use std::collections::HashMap;
use std::env;
use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::random::{random_suffix, EntropySource};

/// Environment variable naming the options file.
pub const OPTIONS_ENV: &str = "OPTIONS";

/// Environment variable used as the owner fallback.
pub const USER_ENV: &str = "USER";

/// Owner used when no other source supplies one.
pub const DEFAULT_OWNER: &str = "ginkgo";

/// Read access to environment variables.
///
/// Abstracted so that resolution can be exercised without touching the
/// process environment.
///
/// # Examples
///
/// ```
/// use e2e_options::resolve::EnvSource;
/// use std::collections::HashMap;
///
/// let env = HashMap::from([("USER".to_string(), "alice".to_string())]);
/// assert_eq!(env.var("USER").as_deref(), Some("alice"));
/// assert_eq!(env.var("HOME"), None);
/// ```
pub trait EnvSource: Send + Sync {
    /// Returns the value of `key`, or `None` if unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueSource {
    /// A command-line flag.
    CommandLine,
    /// The loaded options file.
    OptionsFile,
    /// An environment variable.
    Environment,
    /// A built-in literal.
    Default,
    /// Freshly generated at resolution time.
    Generated,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command-line"),
            Self::OptionsFile => write!(f, "options-file"),
            Self::Environment => write!(f, "environment"),
            Self::Default => write!(f, "default"),
            Self::Generated => write!(f, "generated"),
        }
    }
}

/// A value together with the source it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved<T> {
    /// The resolved value.
    pub value: T,
    /// The source that supplied it.
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    /// Pair a value with its source.
    pub const fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }

    /// Discard the provenance.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Returns the first candidate that is present and non-empty.
///
/// # Examples
///
/// ```
/// use e2e_options::resolve::{first_non_empty, ValueSource};
///
/// let picked = first_non_empty([
///     (Some(""), ValueSource::CommandLine),
///     (None, ValueSource::OptionsFile),
///     (Some("bob"), ValueSource::Environment),
/// ]);
/// let picked = picked.unwrap();
/// assert_eq!(picked.value, "bob");
/// assert_eq!(picked.source, ValueSource::Environment);
/// ```
pub fn first_non_empty<'a, I>(candidates: I) -> Option<Resolved<&'a str>>
where
    I: IntoIterator<Item = (Option<&'a str>, ValueSource)>,
{
    candidates
        .into_iter()
        .find_map(|(value, source)| match value {
            Some(v) if !v.is_empty() => Some(Resolved::new(v, source)),
            _ => None,
        })
}

/// Resolve the owner: command line, options file, `$USER`, then `"ginkgo"`.
///
/// Never fails and never returns an empty string.
pub fn resolve_owner(
    cli: Option<&str>,
    file: Option<&str>,
    env: &dyn EnvSource,
) -> Resolved<String> {
    let from_env = env.var(USER_ENV);
    first_non_empty([
        (cli, ValueSource::CommandLine),
        (file, ValueSource::OptionsFile),
        (from_env.as_deref(), ValueSource::Environment),
    ])
    .map_or_else(
        || Resolved::new(DEFAULT_OWNER.to_string(), ValueSource::Default),
        |r| Resolved::new(r.value.to_string(), r.source),
    )
}

/// Resolve the uid: command line, options file, then a fresh random suffix.
///
/// # Errors
///
/// Returns [`crate::Error::Entropy`] if a suffix has to be generated and the
/// random source fails. No non-random fallback is substituted.
pub fn resolve_uid(
    cli: Option<&str>,
    file: Option<&str>,
    entropy: &dyn EntropySource,
) -> Result<Resolved<String>> {
    if let Some(r) = first_non_empty([
        (cli, ValueSource::CommandLine),
        (file, ValueSource::OptionsFile),
    ]) {
        return Ok(Resolved::new(r.value.to_string(), r.source));
    }

    let uid = random_suffix(entropy)?;
    log::debug!("generated uid {uid}");
    Ok(Resolved::new(uid, ValueSource::Generated))
}


#[cfg(all(test, feature = "property-tests"))]
mod proptests;
