//! Declarative template manifests.
//!
//! A manifest is the data-driven surface over the core model: a YAML document
//! declaring a template's resources by short kind, with properties, exports,
//! explicit dependencies and cross-resource references. Building a manifest
//! translates each kind, populates property trees in declaration order, and
//! resolves `ref` values through the session registry.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use cumulus_template::{PropertyTree, PropertyValue, Resource, Template};

use crate::error::{BuilderError, BuilderResult};
use crate::instance_types::is_known_instance_type;
use crate::naming::translate_resource_kind;
use crate::session::BuildSession;

/// One declared resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDecl {
    /// Short kind identifier, e.g. `ec2_instance`.
    pub kind: String,
    /// Logical resource name.
    pub name: String,
    #[serde(default)]
    pub export: bool,
    /// Names of resources this one explicitly depends on.
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Property mapping; nested mappings become subtrees, and a
    /// `ref: { kind, name }` mapping resolves to a reference value.
    #[serde(default)]
    pub properties: serde_yaml::Mapping,
}

/// A declarative template document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resources: Vec<ResourceDecl>,
}

impl TemplateManifest {
    /// Load a manifest from a YAML file.
    pub fn from_file(path: &Path) -> BuilderResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|err| BuilderError::InvalidManifest {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

/// Build a template from a manifest within a session.
///
/// All declared resources are registered before properties are converted, so
/// declaration order does not constrain references; referencing a resource
/// the manifest never declares still fails.
pub fn build_template(
    manifest: &TemplateManifest,
    session: &mut BuildSession,
) -> BuilderResult<Template> {
    info!(
        "Building template {:?} with {} resources",
        manifest.name.as_deref().unwrap_or("<unnamed>"),
        manifest.resources.len()
    );

    let mut resources = Vec::with_capacity(manifest.resources.len());
    for decl in &manifest.resources {
        let resource = Resource::new(translate_resource_kind(&decl.kind), &decl.name)?
            .with_export(decl.export);
        session.register(&decl.kind, &resource);
        resources.push(resource);
    }

    for (decl, resource) in manifest.resources.iter().zip(resources.iter_mut()) {
        *resource.properties_mut() = properties_from_mapping(session, &decl.properties)?;
        for name in &decl.depends_on {
            resource.depends_on_name(name);
        }
    }

    let mut template = Template::new().with_export_naming(session.export_naming());
    if let Some(description) = &manifest.description {
        template = template.with_description(description.clone());
    }
    if let Some(name) = &manifest.name {
        template.set_name(name.clone());
    }
    for resource in resources {
        template.add(resource);
    }
    Ok(template)
}

fn properties_from_mapping(
    session: &BuildSession,
    mapping: &serde_yaml::Mapping,
) -> BuilderResult<PropertyTree> {
    let mut tree = PropertyTree::new();
    for (key, value) in mapping {
        let key = key.as_str().ok_or_else(|| {
            BuilderError::InvalidProperty(format!("property keys must be strings, got {:?}", key))
        })?;
        let value = property_value(session, value)?;

        if key == "instance_type" {
            if let Some(candidate) = value.as_scalar().and_then(serde_json::Value::as_str) {
                if !is_known_instance_type(candidate) {
                    warn!("Unknown instance type: {}", candidate);
                }
            }
        }

        tree.set(key, value);
    }
    Ok(tree)
}

fn property_value(
    session: &BuildSession,
    value: &serde_yaml::Value,
) -> BuilderResult<PropertyValue> {
    match value {
        serde_yaml::Value::Mapping(mapping) => {
            if let Some(target) = reference_target(mapping)? {
                let (kind, name) = target;
                return session.resource_ref(kind, name);
            }
            properties_from_mapping(session, mapping).map(PropertyValue::Tree)
        }
        serde_yaml::Value::Sequence(items) => {
            // Lists pass through as plain values; element mappings keep their
            // keys as written (renaming does not descend into lists).
            let mut converted = Vec::with_capacity(items.len());
            for item in items {
                converted.push(match property_value(session, item)? {
                    PropertyValue::Scalar(scalar) => scalar,
                    PropertyValue::Tree(tree) => tree.to_value(),
                });
            }
            Ok(PropertyValue::Scalar(serde_json::Value::Array(converted)))
        }
        other => Ok(PropertyValue::Scalar(serde_json::to_value(other)?)),
    }
}

/// A `ref: { kind, name }` mapping designates a cross-resource reference.
/// Returns the target when the mapping is one, an error when it is shaped
/// like one but malformed, and `None` otherwise.
fn reference_target(mapping: &serde_yaml::Mapping) -> BuilderResult<Option<(&str, &str)>> {
    if mapping.len() != 1 {
        return Ok(None);
    }
    let (key, value) = match mapping.iter().next() {
        Some(entry) => entry,
        None => return Ok(None),
    };
    if key.as_str() != Some("ref") {
        return Ok(None);
    }

    let target = value.as_mapping().ok_or_else(|| {
        BuilderError::InvalidProperty("ref must be a mapping with 'kind' and 'name'".to_string())
    })?;
    match (string_entry(target, "kind"), string_entry(target, "name")) {
        (Some(kind), Some(name)) => Ok(Some((kind, name))),
        _ => Err(BuilderError::InvalidProperty(
            "ref must name both 'kind' and 'name'".to_string(),
        )),
    }
}

fn string_entry<'a>(mapping: &'a serde_yaml::Mapping, key: &str) -> Option<&'a str> {
    mapping
        .iter()
        .find(|(entry, _)| entry.as_str() == Some(key))
        .and_then(|(_, value)| value.as_str())
}
