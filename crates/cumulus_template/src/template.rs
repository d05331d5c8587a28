//! Top-level template documents.

use serde_json::json;
use tracing::debug;

use crate::composite::TemplateMember;
use crate::error::TemplateResult;
use crate::resource::Resource;
use crate::serializer::{self, OutputFormat};

/// The template format version emitted in every document.
pub const FORMAT_VERSION: &str = "2010-09-09";

/// Strategy deriving an output's export name from its resource name.
///
/// Injected into the template rather than hard-coded; the builder selects
/// [`ExportNaming::Prefixed`] when an environment is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExportNaming {
    /// The resource's own name, unqualified.
    #[default]
    ResourceName,
    /// The resource name qualified with a prefix, `<prefix>-<name>`.
    Prefixed(String),
}

impl ExportNaming {
    pub fn export_name(&self, resource_name: &str) -> String {
        match self {
            ExportNaming::ResourceName => resource_name.to_string(),
            ExportNaming::Prefixed(prefix) => format!("{}-{}", prefix, resource_name),
        }
    }
}

/// The top-level document: format version, optional name and description,
/// and a flat, insertion-ordered collection of resources.
#[derive(Debug, Clone, Default)]
pub struct Template {
    name: Option<String>,
    description: Option<String>,
    resources: Vec<Resource>,
    export_naming: ExportNaming,
}

impl Template {
    /// Create an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named template.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_export_naming(mut self, naming: ExportNaming) -> Self {
        self.export_naming = naming;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn format_version(&self) -> &'static str {
        FORMAT_VERSION
    }

    /// The flat resource list in insertion order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Append a resource, or recursively flatten a composite's members in
    /// pre-order. This is the only place composite recursion occurs.
    pub fn add(&mut self, member: impl Into<TemplateMember>) {
        match member.into() {
            TemplateMember::Resource(resource) => self.resources.push(resource),
            TemplateMember::Composite(composite) => {
                for nested in composite.into_members() {
                    self.add(nested);
                }
            }
        }
    }

    /// The exported resources, in their relative order within `resources`.
    pub fn exports(&self) -> Vec<&Resource> {
        self.resources.iter().filter(|r| r.export()).collect()
    }

    /// Assemble the plain document. `Resources` and `Outputs` are always
    /// present, even when empty; serialization never mutates the template.
    pub fn to_document(&self) -> serde_json::Value {
        let mut resources = serde_json::Map::new();
        for resource in &self.resources {
            resources.insert(resource.name().to_string(), resource.to_document());
        }

        let mut outputs = serde_json::Map::new();
        for resource in self.exports() {
            outputs.insert(
                resource.name().to_string(),
                json!({
                    "Value": { "Ref": resource.name() },
                    "Export": {
                        "Name": self.export_naming.export_name(resource.name())
                    }
                }),
            );
        }

        let mut document = serde_json::Map::new();
        document.insert("AWSTemplateFormatVersion".to_string(), json!(FORMAT_VERSION));
        document.insert(
            "Description".to_string(),
            match &self.description {
                Some(description) => json!(description),
                None => serde_json::Value::Null,
            },
        );
        document.insert("Resources".to_string(), serde_json::Value::Object(resources));
        document.insert("Outputs".to_string(), serde_json::Value::Object(outputs));
        serde_json::Value::Object(document)
    }

    /// Render the document as JSON or YAML.
    pub fn compile(&self, format: OutputFormat) -> TemplateResult<String> {
        debug!(
            "Compiling template {:?} with {} resources to {}",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.resources.len(),
            format
        );
        serializer::render(&self.to_document(), format)
    }
}
