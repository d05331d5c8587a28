//! Resource declarations.

use serde_json::json;

use crate::error::{TemplateError, TemplateResult};
use crate::properties::{PropertyTree, PropertyValue};

/// One infrastructure resource declaration: a fully-qualified type string, a
/// required logical name, an owned property tree, an export flag, and an
/// ordered list of explicit dependency names.
#[derive(Debug, Clone)]
pub struct Resource {
    kind: String,
    name: String,
    properties: PropertyTree,
    export: bool,
    dependencies: Vec<String>,
}

impl Resource {
    /// Create a resource. Fails immediately when `name` is empty.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> TemplateResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(TemplateError::InvalidResourceName);
        }

        Ok(Self {
            kind: kind.into(),
            name,
            properties: PropertyTree::new(),
            export: false,
            dependencies: Vec::new(),
        })
    }

    /// Replace the resource's properties.
    pub fn with_properties(mut self, properties: PropertyTree) -> Self {
        self.properties = properties;
        self
    }

    /// Mark the resource as exported from the template.
    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn export(&self) -> bool {
        self.export
    }

    pub fn properties(&self) -> &PropertyTree {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyTree {
        &mut self.properties
    }

    /// Ordered dependency names. Duplicates are kept as recorded.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Record an explicit ordering dependency on another resource.
    ///
    /// Explicit dependencies are for wiring with no property-level reference,
    /// e.g. attachment ordering; prefer embedding [`Resource::reference`]
    /// values when a property link exists.
    pub fn depends_on(&mut self, other: &Resource) {
        self.dependencies.push(other.name.clone());
    }

    /// Record an explicit ordering dependency by name.
    pub fn depends_on_name(&mut self, name: impl Into<String>) {
        self.dependencies.push(name.into());
    }

    /// The `{ "Ref": <name> }` value other resources embed in their
    /// properties to reference this one.
    pub fn reference(&self) -> PropertyValue {
        let mut reference = PropertyTree::new();
        reference.set("Ref", self.name.as_str());
        PropertyValue::Tree(reference)
    }

    /// The resource's template document: canonical properties, the type
    /// string, and `DependsOn` only when dependencies were recorded.
    pub fn to_document(&self) -> serde_json::Value {
        let mut document = serde_json::Map::new();
        document.insert("Properties".to_string(), self.properties.to_canonical());
        document.insert("Type".to_string(), json!(self.kind));
        if !self.dependencies.is_empty() {
            document.insert("DependsOn".to_string(), json!(self.dependencies));
        }
        serde_json::Value::Object(document)
    }
}
