//! Per-build session state.

use std::collections::HashMap;

use tracing::debug;

use cumulus_template::{ExportNaming, PropertyTree, PropertyValue, Resource, Template};

use crate::environment::Environments;
use crate::error::{BuilderError, BuilderResult};

/// State scoped to a single template build.
///
/// The session indexes declared resources by `(kind, name)` so property
/// values can reference them, accumulates the templates built within it, and
/// carries the active environment set. Two sessions never share state, so
/// independent builds cannot interfere with each other.
#[derive(Debug, Default)]
pub struct BuildSession {
    resources: HashMap<String, Vec<String>>,
    templates: Vec<Template>,
    environments: Option<Environments>,
}

impl BuildSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environments(mut self, environments: Environments) -> Self {
        self.environments = Some(environments);
        self
    }

    pub fn environments(&self) -> Option<&Environments> {
        self.environments.as_ref()
    }

    /// The export naming templates built in this session should use: prefixed
    /// with the active environment when one is configured, the bare resource
    /// name otherwise.
    pub fn export_naming(&self) -> ExportNaming {
        match &self.environments {
            Some(environments) => ExportNaming::Prefixed(environments.current().to_string()),
            None => ExportNaming::ResourceName,
        }
    }

    /// Record a declared resource under its short kind.
    pub fn register(&mut self, kind: &str, resource: &Resource) {
        debug!("Registering resource '{}' of kind '{}'", resource.name(), kind);
        self.resources
            .entry(kind.to_string())
            .or_default()
            .push(resource.name().to_string());
    }

    /// Whether `(kind, name)` names a declared resource.
    pub fn contains(&self, kind: &str, name: &str) -> bool {
        self.resources
            .get(kind)
            .map(|names| names.iter().any(|entry| entry == name))
            .unwrap_or(false)
    }

    /// The `{ "Ref": <name> }` value for a declared resource, or an
    /// `UnknownReference` error when `(kind, name)` was never declared.
    pub fn resource_ref(&self, kind: &str, name: &str) -> BuilderResult<PropertyValue> {
        if !self.contains(kind, name) {
            return Err(BuilderError::UnknownReference {
                kind: kind.to_string(),
                name: name.to_string(),
            });
        }

        let mut reference = PropertyTree::new();
        reference.set("Ref", name);
        Ok(PropertyValue::Tree(reference))
    }

    /// Keep a built template with the session.
    pub fn add_template(&mut self, template: Template) {
        self.templates.push(template);
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
}
