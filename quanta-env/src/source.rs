//! Variable sources for pluggable lookups

use std::collections::HashMap;

/// Trait for places environment-style variables can be read from
///
/// This allows for different implementations:
/// - [`ProcessEnv`] - the real process environment
/// - [`MapSource`] - in-memory map for tests and embedding
///
/// # Thread Safety
/// All implementations must be `Send + Sync` so one [`Env`](crate::Env) can
/// be shared between threads.
pub trait VarSource: Send + Sync {
    /// Value of `key`, or `None` when it is not set
    ///
    /// A variable set to the empty string is `Some("")`.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// In-memory variable source
///
/// # Example
/// ```
/// use quanta_env::{Env, MapSource};
///
/// let env = Env::new(MapSource::new().with("MEMORY_LIMIT", "512Mi"));
/// assert_eq!(env.get_as_quantity("MEMORY_LIMIT", true, 0).unwrap(), 536_870_912);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    vars: HashMap<String, String>,
}

impl MapSource {
    /// Create an empty source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MapSource::set`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a variable, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Unset a variable
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Number of variables set
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl VarSource for MapSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_source_lookup() {
        let mut source = MapSource::new().with("A", "1").with("EMPTY", "");
        assert_eq!(source.lookup("A").as_deref(), Some("1"));
        assert_eq!(source.lookup("EMPTY").as_deref(), Some(""));
        assert_eq!(source.lookup("MISSING"), None);

        source.set("A", "2");
        assert_eq!(source.lookup("A").as_deref(), Some("2"));
        assert_eq!(source.remove("A").as_deref(), Some("2"));
        assert_eq!(source.lookup("A"), None);
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_map_source_from_iter() {
        let source: MapSource = [("X", "1"), ("Y", "2")].into_iter().collect();
        assert_eq!(source.len(), 2);
        assert_eq!(source.lookup("Y").as_deref(), Some("2"));
    }

    #[test]
    fn test_process_env_missing() {
        assert_eq!(ProcessEnv.lookup("QUANTA_SURELY_UNSET_VARIABLE_9F2C"), None);
    }
}
