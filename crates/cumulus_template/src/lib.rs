//! # cumulus_template
//!
//! Core data model for declarative infrastructure templates.
//!
//! This crate holds the property/resource/template model: a recursive,
//! insertion-ordered property tree with deterministic key renaming, a
//! resource abstraction with dependency tracking and reference values,
//! composite grouping with recursive flattening, and a serializer producing
//! byte-stable, key-ordered JSON or YAML.
//!
//! ## Example
//!
//! ```rust
//! use cumulus_template::{OutputFormat, PropertyTree, Resource, Template};
//!
//! let mut properties = PropertyTree::new();
//! properties.set("image_id", "ami-0ff8a91507f77f867");
//! properties.set("instance_type", "t2.micro");
//!
//! let instance = Resource::new("AWS::EC2::Instance", "MyEC2Instance")
//!     .unwrap()
//!     .with_properties(properties);
//!
//! let mut template = Template::new().with_description("A empty template");
//! template.add(instance);
//!
//! let json = template.compile(OutputFormat::Json).unwrap();
//! assert!(json.contains("\"InstanceType\": \"t2.micro\""));
//! ```

pub mod composite;
pub mod error;
pub mod properties;
pub mod resource;
pub mod serializer;
pub mod template;

pub use composite::{CompositeResource, TemplateMember};
pub use error::{TemplateError, TemplateResult};
pub use properties::{PropertyTree, PropertyValue};
pub use resource::Resource;
pub use serializer::{render, OutputFormat};
pub use template::{ExportNaming, Template, FORMAT_VERSION};
