//! Property specifications.

use serde::{Deserialize, Serialize};

use cumulus_template::PropertyValue;

/// Expected scalar type of a declared property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Boolean,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named property declaration: expected type and required flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: String,
    pub value_type: PropertyType,
    #[serde(default)]
    pub required: bool,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, value_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            value_type,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The key this property takes in the rendered template document.
    pub fn template_name(&self) -> String {
        self.name.split('_').map(capitalize).collect()
    }

    /// Whether a stored value satisfies this spec's type.
    pub fn matches(&self, value: &PropertyValue) -> bool {
        match value.as_scalar() {
            Some(scalar) => match self.value_type {
                PropertyType::String => scalar.is_string(),
                PropertyType::Boolean => scalar.is_boolean(),
            },
            // Subtrees never satisfy a scalar spec.
            None => false,
        }
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
