//! Named environment sets.
//!
//! A build can be parameterized by an environment (e.g. `staging`,
//! `production`) loaded from a YAML configuration file. The active
//! environment supplies the export-name prefix for templates built in the
//! session.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{BuilderError, BuilderResult};

#[derive(Debug, Deserialize)]
struct ConfigFile {
    environments: serde_yaml::Mapping,
}

/// An ordered set of named environments with one active.
#[derive(Debug, Clone)]
pub struct Environments {
    set: Vec<(String, serde_yaml::Value)>,
    current: String,
}

impl Environments {
    /// Configure from an in-memory set. Fails when `current` does not name a
    /// member of the set.
    pub fn configure(
        set: Vec<(String, serde_yaml::Value)>,
        current: impl Into<String>,
    ) -> BuilderResult<Self> {
        let current = current.into();
        if !set.iter().any(|(name, _)| *name == current) {
            return Err(BuilderError::InvalidEnvironment(current));
        }
        Ok(Self { set, current })
    }

    /// Load an environment set from a YAML configuration file of the form
    /// `environments: { <name>: { ...settings... } }`.
    pub fn from_file(path: &Path, current: &str) -> BuilderResult<Self> {
        debug!("Loading environment configuration from {:?}", path);
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = serde_yaml::from_str(&content)?;

        let set = config
            .environments
            .into_iter()
            .filter_map(|(key, value)| key.as_str().map(|name| (name.to_string(), value)))
            .collect();
        Self::configure(set, current)
    }

    /// Environment names in configuration order.
    pub fn names(&self) -> Vec<&str> {
        self.set.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_current(&self, name: &str) -> bool {
        self.current == name
    }

    /// Settings of the active environment.
    pub fn config(&self) -> &serde_yaml::Value {
        self.get(&self.current).unwrap_or(&serde_yaml::Value::Null)
    }

    pub fn get(&self, name: &str) -> Option<&serde_yaml::Value> {
        self.set
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn set(names: &[&str]) -> Vec<(String, serde_yaml::Value)> {
        names
            .iter()
            .map(|name| (name.to_string(), serde_yaml::Value::Null))
            .collect()
    }

    #[test]
    fn test_configure() {
        let environments = Environments::configure(set(&["qa", "testing", "production"]), "qa")
            .unwrap();

        assert_eq!(environments.names(), vec!["qa", "testing", "production"]);
        assert_eq!(environments.current(), "qa");
    }

    #[test]
    fn test_configure_rejects_unknown_current() {
        let result = Environments::configure(set(&["qa", "production"]), "something_else");

        assert!(matches!(result, Err(BuilderError::InvalidEnvironment(_))));
    }

    #[test]
    fn test_configure_rejects_empty_current() {
        let result = Environments::configure(set(&["qa", "production"]), "");

        assert!(matches!(result, Err(BuilderError::InvalidEnvironment(_))));
    }

    #[test]
    fn test_is_current() {
        let environments =
            Environments::configure(set(&["production", "staging"]), "staging").unwrap();

        assert!(environments.is_current("staging"));
        assert!(!environments.is_current("production"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("environments.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "environments:\n  staging:\n    region: eu-west-1\n  production:\n    region: us-east-1\n"
        )
        .unwrap();

        let environments = Environments::from_file(&path, "staging").unwrap();

        assert_eq!(environments.names(), vec!["staging", "production"]);
        assert_eq!(environments.current(), "staging");
        let region = environments
            .config()
            .get("region")
            .and_then(serde_yaml::Value::as_str);
        assert_eq!(region, Some("eu-west-1"));
    }

    #[test]
    fn test_from_file_rejects_unknown_current() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("environments.yaml");
        std::fs::write(&path, "environments:\n  staging: {}\n").unwrap();

        let result = Environments::from_file(&path, "production");
        assert!(matches!(result, Err(BuilderError::InvalidEnvironment(_))));
    }
}
