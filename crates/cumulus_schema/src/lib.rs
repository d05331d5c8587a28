//! # cumulus_schema
//!
//! Optional property specification registry and validation for Cumulus.
//!
//! Resource kinds with a registered, ordered list of property specifications
//! can be validated before a template is rendered: required properties must
//! be present and correctly typed, and undeclared properties are rejected.
//! The core property tree stays permissive; nothing in `cumulus_template`
//! depends on this crate.
//!
//! ## Example
//!
//! ```rust
//! use cumulus_schema::SchemaRegistry;
//! use cumulus_template::PropertyTree;
//!
//! let registry = SchemaRegistry::builtin();
//!
//! let mut properties = PropertyTree::new();
//! properties.set("image_id", "ami-0ff8a91507f77f867");
//! properties.set("instance_type", "t2.micro");
//!
//! registry.validate("ec2_instance", &properties).unwrap();
//! ```

pub mod error;
pub mod registry;
pub mod spec;

pub use error::{SchemaError, SchemaResult};
pub use registry::SchemaRegistry;
pub use spec::{PropertySpec, PropertyType};
