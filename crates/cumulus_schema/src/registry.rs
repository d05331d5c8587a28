//! Registry of per-kind property specifications.

use std::collections::HashMap;

use tracing::debug;

use cumulus_template::PropertyTree;

use crate::error::{SchemaError, SchemaResult};
use crate::spec::{PropertySpec, PropertyType};

/// Maps a resource-kind identifier to an immutable ordered list of property
/// specifications. Kinds are registered explicitly at startup; there is no
/// shared mutable class state and registries owned by different sessions do
/// not interfere.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    kinds: HashMap<String, Vec<PropertySpec>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in resource kinds.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "ec2_instance",
            vec![
                PropertySpec::new("image_id", PropertyType::String),
                PropertySpec::new("instance_type", PropertyType::String),
                PropertySpec::new("key_name", PropertyType::String),
            ],
        );
        registry
    }

    /// Register the specification list for a kind. Re-registering replaces
    /// the previous list.
    pub fn register(&mut self, kind: impl Into<String>, specs: Vec<PropertySpec>) {
        let kind = kind.into();
        debug!("Registering {} property specs for kind '{}'", specs.len(), kind);
        self.kinds.insert(kind, specs);
    }

    pub fn get(&self, kind: &str) -> Option<&[PropertySpec]> {
        self.kinds.get(kind).map(Vec::as_slice)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Validate a property tree against the kind's specification:
    /// every required property present and correctly typed, every present
    /// property declared and correctly typed, no undeclared property present.
    pub fn validate(&self, kind: &str, properties: &PropertyTree) -> SchemaResult<()> {
        let specs = self
            .get(kind)
            .ok_or_else(|| SchemaError::UnknownKind(kind.to_string()))?;

        for spec in specs {
            match properties.lookup(&spec.name) {
                Some(value) => {
                    if !spec.matches(value) {
                        return Err(SchemaError::WrongType {
                            kind: kind.to_string(),
                            name: spec.name.clone(),
                            expected: spec.value_type.as_str(),
                        });
                    }
                }
                None => {
                    if spec.required {
                        return Err(SchemaError::MissingProperty {
                            kind: kind.to_string(),
                            name: spec.name.clone(),
                        });
                    }
                }
            }
        }

        for (key, _) in properties.iter() {
            if !specs.iter().any(|spec| spec.name == key) {
                return Err(SchemaError::UndeclaredProperty {
                    kind: kind.to_string(),
                    name: key.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Validate, then project the declared properties into their renamed
    /// template document form, in specification order.
    pub fn project(&self, kind: &str, properties: &PropertyTree) -> SchemaResult<serde_json::Value> {
        self.validate(kind, properties)?;

        let specs = self
            .get(kind)
            .ok_or_else(|| SchemaError::UnknownKind(kind.to_string()))?;

        let mut projected = serde_json::Map::new();
        for spec in specs {
            if let Some(scalar) = properties.lookup(&spec.name).and_then(|v| v.as_scalar()) {
                projected.insert(spec.template_name(), scalar.clone());
            }
        }
        Ok(serde_json::Value::Object(projected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        registry.register(
            "example",
            vec![
                PropertySpec::new("name", PropertyType::String).required(),
                PropertySpec::new("versioned", PropertyType::Boolean),
            ],
        );
        registry
    }

    #[test]
    fn test_unknown_kind() {
        let registry = registry();
        let properties = PropertyTree::new();

        assert_eq!(
            registry.validate("mystery", &properties),
            Err(SchemaError::UnknownKind("mystery".to_string()))
        );
    }

    #[test]
    fn test_valid_properties() {
        let registry = registry();
        let mut properties = PropertyTree::new();
        properties.set("name", "hello");
        properties.set("versioned", true);

        assert_eq!(registry.validate("example", &properties), Ok(()));
    }

    #[test]
    fn test_missing_required_property() {
        let registry = registry();
        let properties = PropertyTree::new();

        assert_eq!(
            registry.validate("example", &properties),
            Err(SchemaError::MissingProperty {
                kind: "example".to_string(),
                name: "name".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_optional_property_is_fine() {
        let registry = registry();
        let mut properties = PropertyTree::new();
        properties.set("name", "hello");

        assert_eq!(registry.validate("example", &properties), Ok(()));
    }

    #[test]
    fn test_wrong_type_on_required_property() {
        let registry = registry();
        let mut properties = PropertyTree::new();
        properties.set("name", 1234);

        assert!(matches!(
            registry.validate("example", &properties),
            Err(SchemaError::WrongType { .. })
        ));
    }

    #[test]
    fn test_wrong_type_on_optional_property() {
        let registry = registry();
        let mut properties = PropertyTree::new();
        properties.set("name", "hello");
        properties.set("versioned", 1234);

        assert!(matches!(
            registry.validate("example", &properties),
            Err(SchemaError::WrongType { .. })
        ));
    }

    #[test]
    fn test_undeclared_property_is_rejected() {
        let registry = registry();
        let mut properties = PropertyTree::new();
        properties.set("name", "hello");
        properties.set("color", "blue");

        assert_eq!(
            registry.validate("example", &properties),
            Err(SchemaError::UndeclaredProperty {
                kind: "example".to_string(),
                name: "color".to_string(),
            })
        );
    }

    #[test]
    fn test_project() {
        let registry = registry();
        let mut properties = PropertyTree::new();
        properties.set("versioned", true);
        properties.set("name", "hello");

        // Projection follows specification order, not insertion order.
        assert_eq!(
            registry.project("example", &properties).unwrap(),
            json!({"Name": "hello", "Versioned": true})
        );
    }

    #[test]
    fn test_builtin_ec2_instance() {
        let registry = SchemaRegistry::builtin();
        let mut properties = PropertyTree::new();
        properties.set("image_id", "ami-0ff8a91507f77f867");
        properties.set("instance_type", "t2.micro");
        properties.set("key_name", "test_key");

        assert_eq!(registry.validate("ec2_instance", &properties), Ok(()));
        assert_eq!(
            registry.project("ec2_instance", &properties).unwrap(),
            json!({
                "ImageId": "ami-0ff8a91507f77f867",
                "InstanceType": "t2.micro",
                "KeyName": "test_key"
            })
        );
    }
}
