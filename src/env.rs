//! Read-only views over environment variables.
//!
//! The [`EnvSource`] trait is the seam between the resolver and the
//! process environment. [`ProcessEnv`] reads the live environment;
//! [`MapEnv`] holds a fixed in-memory map so tests never touch global
//! process state.

use std::collections::BTreeMap;

pub trait EnvSource: Send + Sync {
    /// Value for `key`, or `None` when unset or not valid Unicode.
    fn get(&self, key: &str) -> Option<String>;

    /// Every key currently visible, in no particular order.
    fn keys(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn keys(&self) -> Vec<String> {
        // vars() panics on non-Unicode entries; vars_os() lets us skip them
        std::env::vars_os()
            .filter_map(|(k, _)| k.into_string().ok())
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
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
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.vars.keys().cloned().collect()
    }
}
