//! Per-task override properties.
//!
//! Overrides are supplied through the host's key-value property surface
//! (command-line `-P` pairs, CI environment, property files). Each task has
//! exactly one recognized key, `toolchain.<taskName>.version`, holding either
//! a language version or the `env` sentinel.

use std::collections::HashMap;

/// Namespace prefix of all override properties.
pub const PROPERTY_PREFIX: &str = "toolchain";

/// Suffix of the version override property.
pub const PROPERTY_VERSION_SUFFIX: &str = "version";

/// Build the override property key for a task.
pub fn version_property_key(task_name: &str) -> String {
    format!("{}.{}.{}", PROPERTY_PREFIX, task_name, PROPERTY_VERSION_SUFFIX)
}

/// A read-only key-value property source.
///
/// Supplied by the host environment; lookups are pure at resolution time and
/// a missing value is a valid outcome, not an error.
pub trait PropertyStore: Send + Sync {
    /// Look up a property value by key.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Resolve the raw override value for a task, if any was supplied.
pub fn version_override(store: &dyn PropertyStore, task_name: &str) -> Option<String> {
    store.lookup(&version_property_key(task_name))
}

/// An in-memory property store.
///
/// Backs command-line `-P key=value` pairs and test fixtures.
#[derive(Debug, Clone, Default)]
pub struct MapPropertyStore {
    properties: HashMap<String, String>,
}

impl MapPropertyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MapPropertyStore::default()
    }

    /// Set a property value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Builder-style property insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl FromIterator<(String, String)> for MapPropertyStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        MapPropertyStore {
            properties: iter.into_iter().collect(),
        }
    }
}

impl PropertyStore for MapPropertyStore {
    fn lookup(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

/// A property store layering several sources; first match wins.
///
/// Lets a host stack command-line properties over a properties file over
/// environment defaults without flattening them eagerly.
#[derive(Default)]
pub struct LayeredPropertyStore {
    layers: Vec<Box<dyn PropertyStore>>,
}

impl LayeredPropertyStore {
    /// Create an empty layered store.
    pub fn new() -> Self {
        LayeredPropertyStore::default()
    }

    /// Add a layer. Earlier layers take precedence.
    pub fn push(&mut self, layer: Box<dyn PropertyStore>) {
        self.layers.push(layer);
    }

    /// Builder-style layer insertion.
    pub fn with_layer(mut self, layer: Box<dyn PropertyStore>) -> Self {
        self.push(layer);
        self
    }
}

impl PropertyStore for LayeredPropertyStore {
    fn lookup(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.lookup(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_property_key() {
        assert_eq!(version_property_key("test"), "toolchain.test.version");
        assert_eq!(
            version_property_key("compileJava"),
            "toolchain.compileJava.version"
        );
    }

    #[test]
    fn test_map_store_lookup() {
        let store = MapPropertyStore::new().with("toolchain.test.version", "17");
        assert_eq!(
            store.lookup("toolchain.test.version"),
            Some("17".to_string())
        );
        assert_eq!(store.lookup("toolchain.run.version"), None);
    }

    #[test]
    fn test_version_override_is_per_task() {
        let store = MapPropertyStore::new().with("toolchain.test.version", "17");
        assert_eq!(version_override(&store, "test"), Some("17".to_string()));
        assert_eq!(version_override(&store, "compileJava"), None);
    }

    #[test]
    fn test_layered_store_first_match_wins() {
        let cli = MapPropertyStore::new().with("toolchain.test.version", "21");
        let file = MapPropertyStore::new()
            .with("toolchain.test.version", "8")
            .with("toolchain.run.version", "11");

        let store = LayeredPropertyStore::new()
            .with_layer(Box::new(cli))
            .with_layer(Box::new(file));

        assert_eq!(
            store.lookup("toolchain.test.version"),
            Some("21".to_string())
        );
        assert_eq!(store.lookup("toolchain.run.version"), Some("11".to_string()));
        assert_eq!(store.lookup("toolchain.javadoc.version"), None);
    }

    #[test]
    fn test_empty_value_is_preserved() {
        // An empty string is a present value, distinct from an absent key.
        let store = MapPropertyStore::new().with("toolchain.test.version", "");
        assert_eq!(version_override(&store, "test"), Some(String::new()));
    }
}
