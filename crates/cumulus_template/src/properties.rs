//! Recursive property trees for resource configuration.
//!
//! A [`PropertyTree`] is one level of a nested property structure: an
//! insertion-ordered mapping from key to either a scalar value or another
//! tree. Trees are populated through explicit `set`/`child` calls and support
//! auto-vivification: reading an unset key attaches an empty subtree at that
//! key, so callers can chain into nested attributes before any leaf exists.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single value held by a [`PropertyTree`] entry.
///
/// A key holds either a scalar (string, number, boolean, null, or a plain
/// list carried through untouched) or a nested tree, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Scalar(serde_json::Value),
    Tree(PropertyTree),
}

impl PropertyValue {
    pub fn is_tree(&self) -> bool {
        matches!(self, PropertyValue::Tree(_))
    }

    /// The scalar held by this value, if it is one.
    pub fn as_scalar(&self) -> Option<&serde_json::Value> {
        match self {
            PropertyValue::Scalar(scalar) => Some(scalar),
            PropertyValue::Tree(_) => None,
        }
    }

    /// The nested tree held by this value, if it is one.
    pub fn as_tree(&self) -> Option<&PropertyTree> {
        match self {
            PropertyValue::Scalar(_) => None,
            PropertyValue::Tree(tree) => Some(tree),
        }
    }
}

impl From<serde_json::Value> for PropertyValue {
    /// Plain objects are recursively wrapped as nested trees; everything else
    /// is stored as a scalar.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(object) => {
                PropertyValue::Tree(PropertyTree::from_object(object))
            }
            other => PropertyValue::Scalar(other),
        }
    }
}

impl From<PropertyTree> for PropertyValue {
    fn from(tree: PropertyTree) -> Self {
        PropertyValue::Tree(tree)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Scalar(serde_json::Value::String(value.to_string()))
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Scalar(serde_json::Value::String(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Scalar(serde_json::Value::Bool(value))
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Scalar(serde_json::Value::from(value))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Scalar(serde_json::Value::from(value))
    }
}

/// One level of a nested property structure.
///
/// Entries keep insertion order; serialization order is entry order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyTree {
    entries: Vec<(String, PropertyValue)>,
}

impl PropertyTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a plain JSON object, wrapping nested objects as
    /// subtrees in entry order.
    pub fn from_object(object: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut tree = Self::new();
        for (key, value) in object {
            tree.set(key, value);
        }
        tree
    }

    /// True when no keys are present at this level. An attached empty subtree
    /// still counts as an entry of its parent.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Look up a key without side effects.
    pub fn lookup(&self, key: &str) -> Option<&PropertyValue> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    /// Store a scalar, or wrap a plain object value as a nested tree.
    /// Overwriting is not an error; the last write wins and the key keeps its
    /// original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Read a key, attaching an empty subtree at the key if it was unset.
    ///
    /// The write side effect on first read is deliberate: it lets builder
    /// code chain into nested attributes before any leaf is assigned, and the
    /// vivified subtree stays attached so later writes through it are visible
    /// through the original path.
    pub fn get(&mut self, key: &str) -> &PropertyValue {
        let idx = self.ensure_entry(key);
        &self.entries[idx].1
    }

    /// Descend into the subtree at `key`, creating it when unset. A scalar
    /// previously stored under the key is displaced by the new subtree.
    pub fn child(&mut self, key: &str) -> &mut PropertyTree {
        let idx = self.ensure_entry(key);
        if !matches!(self.entries[idx].1, PropertyValue::Tree(_)) {
            self.entries[idx].1 = PropertyValue::Tree(PropertyTree::new());
        }
        match &mut self.entries[idx].1 {
            PropertyValue::Tree(tree) => tree,
            PropertyValue::Scalar(_) => unreachable!(),
        }
    }

    /// Produce a new tree with every key at every depth converted to upper
    /// camel case. The original tree is untouched.
    ///
    /// Keys are split on `_` and each segment's first letter is upper-cased;
    /// no acronym is special-cased here (that belongs to the resource-kind
    /// translator, not the tree).
    pub fn rename(&self) -> PropertyTree {
        let mut renamed = PropertyTree::new();
        for (key, value) in &self.entries {
            let value = match value {
                PropertyValue::Tree(tree) => PropertyValue::Tree(tree.rename()),
                PropertyValue::Scalar(scalar) => PropertyValue::Scalar(scalar.clone()),
            };
            renamed.set(template_key(key), value);
        }
        renamed
    }

    /// Convert to a plain nested JSON value, preserving entry order.
    pub fn to_value(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        for (key, value) in &self.entries {
            let value = match value {
                PropertyValue::Scalar(scalar) => scalar.clone(),
                PropertyValue::Tree(tree) => tree.to_value(),
            };
            object.insert(key.clone(), value);
        }
        serde_json::Value::Object(object)
    }

    /// The canonical template form: rename to upper camel case, then flatten.
    ///
    /// Kept as an explicit two-step composition; callers that need the
    /// renamed-but-still-structured intermediate use [`PropertyTree::rename`]
    /// directly.
    pub fn to_canonical(&self) -> serde_json::Value {
        self.rename().to_value()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(entry_key, _)| entry_key == key)
    }

    fn ensure_entry(&mut self, key: &str) -> usize {
        match self.position(key) {
            Some(idx) => idx,
            None => {
                self.entries
                    .push((key.to_string(), PropertyValue::Tree(PropertyTree::new())));
                self.entries.len() - 1
            }
        }
    }
}

impl Serialize for PropertyTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Scalar(scalar) => scalar.serialize(serializer),
            PropertyValue::Tree(tree) => tree.serialize(serializer),
        }
    }
}

/// Convert an underscore-delimited key to its template form: split on `_`,
/// upper-case each segment's first letter, concatenate.
fn template_key(key: &str) -> String {
    key.split('_').map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
