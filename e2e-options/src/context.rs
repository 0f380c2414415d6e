//! The resolved configuration of one test run.
//!
//! [`TestContext`] bundles the command-line overrides, the loaded options
//! document, the environment and the random source. Build it once with
//! [`ContextBuilder`] before any test work starts and pass it to everything
//! that needs option values; it is immutable afterwards.

use std::fmt;

use crate::error::Result;
use crate::options::{OptionsLoader, OptionsStore};
use crate::overrides::CommandLineOverrides;
use crate::random::{EntropySource, OsEntropy};
use crate::resolve::{resolve_owner, resolve_uid, EnvSource, ProcessEnv, Resolved};

/// Option values for one test run.
///
/// # Examples
///
/// ```
/// use e2e_options::{CommandLineOverrides, TestContext};
/// use e2e_options::resolve::ValueSource;
/// use std::collections::HashMap;
///
/// let ctx = TestContext::builder()
///     .with_overrides(CommandLineOverrides {
///         owner: Some("alice".to_string()),
///         ..Default::default()
///     })
///     .with_env(HashMap::<String, String>::new())
///     .skip_load()
///     .build()
///     .unwrap();
///
/// let owner = ctx.owner();
/// assert_eq!(owner.value, "alice");
/// assert_eq!(owner.source, ValueSource::CommandLine);
/// ```
pub struct TestContext {
    overrides: CommandLineOverrides,
    store: OptionsStore,
    env: Box<dyn EnvSource>,
    entropy: Box<dyn EntropySource>,
}

impl TestContext {
    /// Start building a context.
    #[must_use]
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// The command-line overrides.
    #[must_use]
    pub fn overrides(&self) -> &CommandLineOverrides {
        &self.overrides
    }

    /// The options document.
    #[must_use]
    pub fn store(&self) -> &OptionsStore {
        &self.store
    }

    pub(crate) fn entropy(&self) -> &dyn EntropySource {
        self.entropy.as_ref()
    }

    /// The owner: `--owner`, `options.owner`, `$USER`, then `"ginkgo"`.
    #[must_use]
    pub fn owner(&self) -> Resolved<String> {
        resolve_owner(
            self.overrides.owner.as_deref(),
            self.store.owner(),
            self.env.as_ref(),
        )
    }

    /// The uid: `--uid`, `options.uid`, then four fresh random characters.
    ///
    /// Each call without an override generates a new value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Entropy`] if the random source fails.
    pub fn uid(&self) -> Result<Resolved<String>> {
        resolve_uid(
            self.overrides.uid.as_deref(),
            self.store.uid(),
            self.entropy(),
        )
    }

    /// Region configured for `cloud`.
    ///
    /// # Errors
    ///
    /// See [`OptionsStore::region`].
    pub fn region(&self, cloud: &str) -> Result<&str> {
        self.store.region(cloud)
    }

    /// Base DNS domain configured for `cloud`.
    ///
    /// # Errors
    ///
    /// See [`OptionsStore::base_domain`].
    pub fn base_domain(&self, cloud: &str) -> Result<&str> {
        self.store.base_domain(cloud)
    }
}

impl fmt::Debug for TestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestContext")
            .field("overrides", &self.overrides)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TestContext`].
///
/// By default the builder reads the real environment, uses the OS random
/// source, and loads the options file from `--options`, `$OPTIONS` or
/// `resources/options.yaml`.
#[must_use]
pub struct ContextBuilder {
    overrides: CommandLineOverrides,
    store: Option<OptionsStore>,
    skip_load: bool,
    env: Option<Box<dyn EnvSource>>,
    entropy: Option<Box<dyn EntropySource>>,
}

impl ContextBuilder {
    /// A builder with default sources.
    pub fn new() -> Self {
        Self {
            overrides: CommandLineOverrides::default(),
            store: None,
            skip_load: false,
            env: None,
            entropy: None,
        }
    }

    /// Use these command-line overrides.
    pub fn with_overrides(mut self, overrides: CommandLineOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Use an already loaded store instead of reading a file.
    pub fn with_store(mut self, store: OptionsStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Do not read any options file; lookups see an empty store.
    pub fn skip_load(mut self) -> Self {
        self.skip_load = true;
        self
    }

    /// Read environment variables from `env`.
    pub fn with_env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Some(Box::new(env));
        self
    }

    /// Draw random suffixes from `entropy`.
    pub fn with_entropy(mut self, entropy: impl EntropySource + 'static) -> Self {
        self.entropy = Some(Box::new(entropy));
        self
    }

    /// Build the context, loading the options file unless a store was
    /// supplied or loading was skipped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OptionsRead`] or [`crate::Error::OptionsParse`]
    /// if the options file cannot be loaded.
    pub fn build(self) -> Result<TestContext> {
        let env = self.env.unwrap_or_else(|| Box::new(ProcessEnv));

        let store = match self.store {
            Some(store) => store,
            None if self.skip_load => OptionsStore::empty(),
            None => {
                let path =
                    OptionsLoader::resolve_path(self.overrides.options_file.as_deref(), env.as_ref());
                let store = OptionsStore::load(&path)?;
                log::info!("loaded options from {}", path.display());
                store
            }
        };

        Ok(TestContext {
            overrides: self.overrides,
            store,
            env,
            entropy: self.entropy.unwrap_or_else(|| Box::new(OsEntropy)),
        })
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
