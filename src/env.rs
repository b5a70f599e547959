//! Environment access behind a narrow trait so resolution can be tested
//! without touching the real process environment.

use indexmap::IndexMap;

/// Environment variable selecting the app mode for the rich variant.
pub const APP_MODE_VAR: &str = "APP_MODE";

/// Read-only view of environment variables.
#[cfg_attr(test, mockall::automock)]
pub trait EnvSource {
    /// Value of `name`, or `None` when unset or not valid UTF-8.
    fn get_env(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get_env(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: IndexMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn get_env(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get_env(&self, name: &str) -> Option<String> {
        (**self).get_env(name)
    }
}
